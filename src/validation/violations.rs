//! Invariant violations for calculator states.

use thiserror::Error;

/// A broken data-model invariant.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StateViolation {
    #[error("Operand '{field}' is not a numeric literal: {value:?}")]
    MalformedOperand { field: &'static str, value: String },

    #[error("Operation is set without a previous operand")]
    OperationWithoutOperand,

    #[error("Overwrite is set but no result is shown")]
    OverwriteOutsideResult,
}
