//! Binary operators offered by the keypad.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the four keypad operators.
///
/// Operators form a closed set with an explicit evaluation table, so no
/// string dispatch happens while computing.
///
/// # Example
///
/// ```rust
/// use keycalc::core::Operation;
///
/// let op: Operation = "×".parse().unwrap();
/// assert_eq!(op, Operation::Multiply);
/// assert_eq!(op.apply(6.0, 7.0), 42.0);
/// assert_eq!(op.symbol(), "×");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Operation {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "×")]
    Multiply,
    #[serde(rename = "÷")]
    Divide,
}

/// Error returned when a symbol names no operator.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("Unknown operator '{0}'")]
pub struct UnknownOperation(pub String);

impl Operation {
    /// All operators in keypad order.
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// Display symbol for this operator.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Apply the operator to two operands.
    ///
    /// Division follows IEEE-754: dividing by zero yields an infinity, or
    /// `NaN` for `0 ÷ 0`.
    pub fn apply(&self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Operation {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+" => Ok(Self::Add),
            "-" | "−" => Ok(Self::Subtract),
            "×" | "x" | "X" | "*" => Ok(Self::Multiply),
            "÷" | "/" => Ok(Self::Divide),
            other => Err(UnknownOperation(other.to_string())),
        }
    }
}
