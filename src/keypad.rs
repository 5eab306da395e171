//! Keypad keys and their intents.
//!
//! Each key on the pad issues exactly one intent. Keys are parsed from their
//! labels so a front end (or the `calc` binary) can forward raw key presses.

use crate::core::{Intent, Operation};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A key on the calculator pad.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Key {
    /// `0`-`9` or `.`
    Digit(char),
    Operator(Operation),
    Delete,
    Reset,
    Equals,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum KeyError {
    #[error("Empty key label")]
    Empty,

    #[error("Unknown key '{0}'")]
    Unknown(String),
}

impl Key {
    /// Key labels in grid order, four per row.
    pub const LAYOUT: [&'static str; 18] = [
        "7", "8", "9", "DEL", //
        "4", "5", "6", "+", //
        "1", "2", "3", "-", //
        ".", "0", "÷", "×", //
        "RESET", "=",
    ];

    /// The intent this key issues.
    pub fn intent(&self) -> Intent {
        match *self {
            Self::Digit(digit) => Intent::AddDigit(digit),
            Self::Operator(operation) => Intent::ChooseOperation(operation),
            Self::Delete => Intent::Delete,
            Self::Reset => Intent::Clear,
            Self::Equals => Intent::Evaluate,
        }
    }

    pub fn label(&self) -> String {
        match self {
            Self::Digit(digit) => digit.to_string(),
            Self::Operator(operation) => operation.symbol().to_string(),
            Self::Delete => "DEL".to_string(),
            Self::Reset => "RESET".to_string(),
            Self::Equals => "=".to_string(),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl FromStr for Key {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        if label.is_empty() {
            return Err(KeyError::Empty);
        }

        let mut chars = label.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if c.is_ascii_digit() || c == '.' {
                return Ok(Self::Digit(c));
            }
        }

        if let Ok(operation) = label.parse::<Operation>() {
            return Ok(Self::Operator(operation));
        }

        match label.to_ascii_uppercase().as_str() {
            "DEL" | "DELETE" | "⌫" => Ok(Self::Delete),
            "RESET" | "AC" | "C" => Ok(Self::Reset),
            "=" => Ok(Self::Equals),
            _ => Err(KeyError::Unknown(label.to_string())),
        }
    }
}

/// Split a line of whitespace-separated labels into keys.
///
/// A token made only of digits and points is expanded into one key per
/// character, so `"12.5 + 3 ="` is seven presses.
///
/// # Example
///
/// ```rust
/// use keycalc::keypad::{parse_keys, Key};
/// use keycalc::core::Operation;
///
/// let keys = parse_keys("12 + 3 =").unwrap();
/// assert_eq!(
///     keys,
///     vec![
///         Key::Digit('1'),
///         Key::Digit('2'),
///         Key::Operator(Operation::Add),
///         Key::Digit('3'),
///         Key::Equals,
///     ]
/// );
/// ```
pub fn parse_keys(line: &str) -> Result<Vec<Key>, KeyError> {
    keys_in(line).collect()
}

/// Lazily tokenise a line into keys, yielding an error for each bad label.
pub fn keys_in(line: &str) -> impl Iterator<Item = Result<Key, KeyError>> + '_ {
    line.split_whitespace().flat_map(|token| {
        let tokens: Vec<Result<Key, KeyError>> =
            if token.chars().all(|c| c.is_ascii_digit() || c == '.') {
                token.chars().map(|c| Ok(Key::Digit(c))).collect()
            } else {
                vec![token.parse()]
            };
        tokens
    })
}
