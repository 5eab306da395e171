//! The calculator reducer.
//!
//! `transition` is pure and total: every `(state, intent)` pair yields a new
//! state, and intents that do not apply return the input unchanged.

use super::intent::{is_digit_key, Intent};
use super::number::{parse_operand, render};
use super::operation::Operation;
use super::state::CalculatorState;

/// Apply an intent to a state, producing the next state.
///
/// # Example
///
/// ```rust
/// use keycalc::core::{transition, CalculatorState, Intent, Operation};
///
/// let intents = [
///     Intent::AddDigit('5'),
///     Intent::ChooseOperation(Operation::Add),
///     Intent::AddDigit('3'),
///     Intent::Evaluate,
/// ];
///
/// let state = intents
///     .iter()
///     .fold(CalculatorState::default(), |state, intent| transition(&state, intent));
///
/// assert_eq!(state.current_operand(), Some("8"));
/// assert!(state.overwrite);
/// assert_eq!(state.previous_operand(), None);
/// assert_eq!(state.operation(), None);
/// ```
pub fn transition(state: &CalculatorState, intent: &Intent) -> CalculatorState {
    match *intent {
        Intent::AddDigit(digit) => add_digit(state, digit),
        Intent::ChooseOperation(operation) => choose_operation(state, operation),
        Intent::Delete => delete_digit(state),
        Intent::Clear => CalculatorState::default(),
        Intent::Evaluate => evaluate_pending(state),
    }
}

fn add_digit(state: &CalculatorState, digit: char) -> CalculatorState {
    if !is_digit_key(digit) {
        return state.clone();
    }

    if state.overwrite {
        return CalculatorState {
            current_operand: Some(digit.to_string()),
            overwrite: false,
            ..state.clone()
        };
    }

    let current = state.current_operand().unwrap_or("");
    if digit == '0' && current == "0" {
        return state.clone();
    }
    if digit == '.' && current.contains('.') {
        return state.clone();
    }

    CalculatorState {
        current_operand: Some(format!("{current}{digit}")),
        ..state.clone()
    }
}

fn choose_operation(state: &CalculatorState, operation: Operation) -> CalculatorState {
    match (&state.current_operand, &state.previous_operand) {
        (None, None) => state.clone(),
        (None, Some(_)) => CalculatorState {
            operation: Some(operation),
            ..state.clone()
        },
        (Some(current), None) => CalculatorState {
            current_operand: None,
            previous_operand: Some(current.clone()),
            operation: Some(operation),
            overwrite: false,
        },
        (Some(_), Some(_)) => CalculatorState {
            current_operand: None,
            previous_operand: Some(evaluate(state)),
            operation: Some(operation),
            overwrite: false,
        },
    }
}

fn delete_digit(state: &CalculatorState) -> CalculatorState {
    if state.overwrite {
        return CalculatorState {
            current_operand: None,
            overwrite: false,
            ..state.clone()
        };
    }

    let Some(current) = state.current_operand() else {
        return state.clone();
    };

    let mut chars = current.chars();
    chars.next_back();
    let remaining = chars.as_str();

    CalculatorState {
        current_operand: (!remaining.is_empty()).then(|| remaining.to_string()),
        ..state.clone()
    }
}

fn evaluate_pending(state: &CalculatorState) -> CalculatorState {
    if state.operation.is_none()
        || state.current_operand.is_none()
        || state.previous_operand.is_none()
    {
        return state.clone();
    }

    CalculatorState {
        current_operand: Some(evaluate(state)),
        previous_operand: None,
        operation: None,
        overwrite: true,
    }
}

/// Compute `previous operation current` and render the result.
///
/// Returns the empty string when an operand is missing or does not parse,
/// or when no operation is pending.
///
/// # Example
///
/// ```rust
/// use keycalc::core::{evaluate, CalculatorState, Operation};
///
/// let state = CalculatorState::new()
///     .with_previous("5")
///     .with_operation(Operation::Divide)
///     .with_current("0");
/// assert_eq!(evaluate(&state), "Infinity");
///
/// let broken = state.with_current(".");
/// assert_eq!(evaluate(&broken), "");
/// ```
pub fn evaluate(state: &CalculatorState) -> String {
    let operands = (
        state.previous_operand().and_then(parse_operand),
        state.current_operand().and_then(parse_operand),
        state.operation,
    );

    match operands {
        (Some(previous), Some(current), Some(operation)) => {
            render(operation.apply(previous, current))
        }
        _ => String::new(),
    }
}
