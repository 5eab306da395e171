//! User intents fed into the calculator state machine.

use super::operation::Operation;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A discrete user intent.
///
/// Intents are plain values. The reducer decides whether an intent applies
/// to the current state; intents that do not apply leave the state unchanged.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Intent {
    /// Append a digit (`0`-`9`) or the decimal point (`.`).
    AddDigit(char),
    /// Select the pending binary operation.
    ChooseOperation(Operation),
    /// Remove the last character of the current operand.
    Delete,
    /// Reset to the empty state.
    Clear,
    /// Compute the pending expression.
    Evaluate,
}

impl Intent {
    /// Short name for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddDigit(_) => "AddDigit",
            Self::ChooseOperation(_) => "ChooseOperation",
            Self::Delete => "Delete",
            Self::Clear => "Clear",
            Self::Evaluate => "Evaluate",
        }
    }
}

/// Whether `c` is a character the digit keys can produce.
pub fn is_digit_key(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AddDigit(d) => write!(f, "AddDigit({d})"),
            Self::ChooseOperation(op) => write!(f, "ChooseOperation({op})"),
            other => f.write_str(other.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_keys_are_digits_and_point() {
        for c in "0123456789.".chars() {
            assert!(is_digit_key(c));
        }
        assert!(!is_digit_key('a'));
        assert!(!is_digit_key('-'));
        assert!(!is_digit_key(','));
    }

    #[test]
    fn display_includes_payload() {
        assert_eq!(Intent::AddDigit('7').to_string(), "AddDigit(7)");
        assert_eq!(
            Intent::ChooseOperation(Operation::Multiply).to_string(),
            "ChooseOperation(×)"
        );
        assert_eq!(Intent::Evaluate.to_string(), "Evaluate");
    }

    #[test]
    fn intent_serializes_correctly() {
        let intent = Intent::ChooseOperation(Operation::Add);
        let json = serde_json::to_string(&intent).unwrap();
        let back: Intent = serde_json::from_str(&json).unwrap();
        assert_eq!(intent, back);
    }
}
