//! The calculator state record.
//!
//! A `CalculatorState` is an immutable value. Transitions never mutate a
//! state in place; they build a new record from the old one.

use super::operation::Operation;
use serde::{Deserialize, Serialize};

/// Snapshot of the running computation.
///
/// # Example
///
/// ```rust
/// use keycalc::core::{CalculatorState, Phase};
///
/// let state = CalculatorState::default();
/// assert!(state.is_empty());
/// assert_eq!(state.phase(), Phase::Idle);
///
/// let state = CalculatorState::new().with_current("42");
/// assert_eq!(state.current_operand(), Some("42"));
/// assert_eq!(state.phase().name(), "Entering");
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct CalculatorState {
    /// Operand being typed, or the last result when `overwrite` is set
    pub current_operand: Option<String>,
    /// Operand captured when an operator was chosen
    pub previous_operand: Option<String>,
    /// Pending binary operation
    pub operation: Option<Operation>,
    /// Next digit replaces `current_operand` instead of appending
    #[serde(default)]
    pub overwrite: bool,
}

/// Coarse position of a state in the entry cycle.
///
/// Used for diagnostics; the reducer works on the fields directly.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Phase {
    /// Nothing entered
    Idle,
    /// Typing the first operand
    Entering,
    /// Operator chosen, second operand may be in progress
    Pending,
    /// Showing an evaluation result
    Result,
}

impl Phase {
    /// Get the phase's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Entering => "Entering",
            Self::Pending => "Pending",
            Self::Result => "Result",
        }
    }
}

impl CalculatorState {
    /// Create the empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of this state with `current_operand` set.
    pub fn with_current(&self, operand: impl Into<String>) -> Self {
        Self {
            current_operand: Some(operand.into()),
            ..self.clone()
        }
    }

    /// Copy of this state with `previous_operand` set.
    pub fn with_previous(&self, operand: impl Into<String>) -> Self {
        Self {
            previous_operand: Some(operand.into()),
            ..self.clone()
        }
    }

    /// Copy of this state with `operation` set.
    pub fn with_operation(&self, operation: Operation) -> Self {
        Self {
            operation: Some(operation),
            ..self.clone()
        }
    }

    /// Copy of this state with `overwrite` set.
    pub fn with_overwrite(&self, overwrite: bool) -> Self {
        Self {
            overwrite,
            ..self.clone()
        }
    }

    pub fn current_operand(&self) -> Option<&str> {
        self.current_operand.as_deref()
    }

    pub fn previous_operand(&self) -> Option<&str> {
        self.previous_operand.as_deref()
    }

    pub fn operation(&self) -> Option<Operation> {
        self.operation
    }

    /// True for the empty record.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Classify this state.
    pub fn phase(&self) -> Phase {
        if self.overwrite {
            Phase::Result
        } else if self.operation.is_some() || self.previous_operand.is_some() {
            Phase::Pending
        } else if self.current_operand.is_some() {
            Phase::Entering
        } else {
            Phase::Idle
        }
    }
}
