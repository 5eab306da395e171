//! Build errors for calculator sessions.

use crate::validation::StateViolation;
use thiserror::Error;

/// Errors that can occur when building a calculator session.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial state is invalid ({} violations). Start from CalculatorState::default() or a reachable state", .0.len())]
    InvalidInitialState(Vec<StateViolation>),

    #[error("History limit must be at least 1. Use .unbounded_history() to keep every record")]
    ZeroHistoryLimit,
}
