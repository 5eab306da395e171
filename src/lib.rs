//! Keycalc: a pure functional keypad calculator core
//!
//! Keycalc follows the "pure core, imperative shell" philosophy. The
//! calculator logic is a pure reducer over an immutable state record, while
//! the session shell owns the single current state, logs, keeps history and
//! handles configuration and snapshots.
//!
//! # Core Concepts
//!
//! - **State**: `CalculatorState`, an immutable record replaced on every intent
//! - **Intents**: digit entry, operator choice, delete, clear, evaluate
//! - **Reducer**: `transition(state, intent)`, total and side-effect free
//! - **Display**: operand formatting with thousands separators
//! - **Session**: `Calculator`, the shell a front end talks to
//!
//! # Example
//!
//! ```rust
//! use keycalc::core::{transition, CalculatorState, Intent, Operation};
//! use keycalc::display::format_operand;
//!
//! let state = CalculatorState::default();
//! let state = transition(&state, &Intent::AddDigit('5'));
//! let state = transition(&state, &Intent::ChooseOperation(Operation::Add));
//! let state = transition(&state, &Intent::AddDigit('3'));
//! let state = transition(&state, &Intent::Evaluate);
//!
//! assert_eq!(state.current_operand(), Some("8"));
//! assert!(state.overwrite);
//! assert_eq!(format_operand(Some("1000000")).as_deref(), Some("1,000,000"));
//! ```

pub mod config;
pub mod core;
pub mod display;
pub mod keypad;
pub mod session;
pub mod snapshot;
pub mod theme;
pub mod validation;

// Re-export commonly used types
pub use crate::config::CalculatorConfig;
pub use crate::core::{transition, CalculatorState, Intent, Operation};
pub use crate::display::{format_operand, DisplayLine, NumberFormat};
pub use crate::keypad::Key;
pub use crate::session::Calculator;
pub use crate::snapshot::Snapshot;
pub use crate::theme::Theme;
