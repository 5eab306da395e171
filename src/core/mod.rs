//! Core calculator types and logic.
//!
//! This module contains the pure functional core of the calculator:
//! - The `CalculatorState` record and the `Intent`s that drive it
//! - The `transition` reducer and its evaluation table
//! - Number rendering for evaluation results
//! - Immutable history tracking
//!
//! Nothing in this module performs I/O or logging.

mod history;
mod intent;
mod number;
mod operation;
mod reducer;
mod state;

pub use history::{History, TransitionRecord};
pub use intent::{is_digit_key, Intent};
pub use number::{parse_operand, render};
pub use operation::{Operation, UnknownOperation};
pub use reducer::{evaluate, transition};
pub use state::{CalculatorState, Phase};
