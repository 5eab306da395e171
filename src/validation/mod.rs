//! Validation of calculator state invariants.
//!
//! States built by the reducer always satisfy the data-model invariants.
//! States that arrive from elsewhere (a builder, a decoded snapshot) are
//! checked here. Checks use Stillwater's `Validation` so every violation is
//! reported at once rather than only the first.
//!
//! # Example
//!
//! ```rust
//! use keycalc::core::{CalculatorState, Operation};
//! use keycalc::validation::{validate_state, StateViolation};
//! use stillwater::validation::Validation;
//!
//! let good = CalculatorState::new().with_previous("3").with_operation(Operation::Add);
//! assert!(validate_state(&good).is_success());
//!
//! let bad = CalculatorState::new()
//!     .with_current("1..2")
//!     .with_operation(Operation::Add);
//!
//! match validate_state(&bad) {
//!     Validation::Failure(violations) => assert_eq!(violations.len(), 2),
//!     Validation::Success(_) => panic!("expected violations"),
//! }
//! ```

pub mod violations;

pub use violations::StateViolation;

use crate::core::CalculatorState;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Result of validating a state.
pub type StateValidation = Validation<(), NonEmptyVec<StateViolation>>;

/// Check every invariant of `state`, accumulating ALL violations.
pub fn validate_state(state: &CalculatorState) -> StateValidation {
    let checks = vec![
        check_current_operand(state),
        check_operand("previous_operand", state.previous_operand(), is_operand_literal),
        check_operation(state),
        check_overwrite(state),
    ];

    Validation::all_vec(checks).map(|_| ())
}

/// Collect the violations of `state` into a plain vector.
///
/// Empty when the state is valid.
pub fn violations(state: &CalculatorState) -> Vec<StateViolation> {
    match validate_state(state) {
        Validation::Success(_) => Vec::new(),
        Validation::Failure(errors) => errors.iter().cloned().collect(),
    }
}

/// A rendered result may only sit in `current_operand` while `overwrite` is
/// set; otherwise the operand is still being typed.
fn check_current_operand(state: &CalculatorState) -> StateValidation {
    let accepts: fn(&str) -> bool = if state.overwrite {
        is_operand_literal
    } else {
        is_entry_literal
    };
    check_operand("current_operand", state.current_operand(), accepts)
}

fn check_operand(
    field: &'static str,
    operand: Option<&str>,
    accepts: fn(&str) -> bool,
) -> StateValidation {
    match operand {
        Some(value) if !accepts(value) => {
            Validation::fail(StateViolation::MalformedOperand {
                field,
                value: value.to_string(),
            })
        }
        _ => Validation::success(()),
    }
}

fn check_operation(state: &CalculatorState) -> StateValidation {
    if state.operation.is_some() && state.previous_operand.is_none() {
        Validation::fail(StateViolation::OperationWithoutOperand)
    } else {
        Validation::success(())
    }
}

fn check_overwrite(state: &CalculatorState) -> StateValidation {
    let showing_result = state.current_operand.is_some()
        && state.previous_operand.is_none()
        && state.operation.is_none();

    if state.overwrite && !showing_result {
        Validation::fail(StateViolation::OverwriteOutsideResult)
    } else {
        Validation::success(())
    }
}

/// Whether `value` is an operand still being typed: digits with at most one
/// point and no repeated leading zero before the point.
pub fn is_entry_literal(value: &str) -> bool {
    let mut points = 0;
    for c in value.chars() {
        match c {
            '.' => points += 1,
            '0'..='9' => {}
            _ => return false,
        }
    }

    !value.is_empty() && points <= 1 && (points == 1 || !value.starts_with("00"))
}

/// Whether `value` is a literal the calculator can hold.
///
/// Accepts in-progress entries (digits with at most one point, no repeated
/// leading zero before the point) and rendered evaluation results, including
/// the empty fallback, `NaN`, the infinities and exponent forms.
pub fn is_operand_literal(value: &str) -> bool {
    if matches!(value, "" | "NaN" | "Infinity" | "-Infinity") {
        return true;
    }

    let unsigned = value.strip_prefix('-').unwrap_or(value);
    let (mantissa, exponent) = match unsigned.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, Some(exponent)),
        None => (unsigned, None),
    };

    let (integer, fraction) = match mantissa.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (mantissa, None),
    };

    let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if !all_digits(integer) || !fraction.is_none_or(all_digits) {
        return false;
    }
    if fraction.is_none() && integer.len() > 1 && integer.starts_with("00") {
        return false;
    }

    let has_digit = !integer.is_empty() || fraction.is_some_and(|f| !f.is_empty());
    if unsigned.len() != value.len() && !has_digit {
        return false;
    }

    match exponent {
        None => true,
        Some(exponent) => {
            let digits = exponent
                .strip_prefix('+')
                .or_else(|| exponent.strip_prefix('-'))
                .unwrap_or(exponent);
            has_digit && !digits.is_empty() && all_digits(digits)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operation;

    #[test]
    fn empty_state_is_valid() {
        assert!(validate_state(&CalculatorState::new()).is_success());
    }

    #[test]
    fn accepts_entry_literals() {
        for literal in ["0", "7", "05", "0.", ".", ".5", "12.50", "1000000"] {
            assert!(is_operand_literal(literal), "{literal}");
        }
    }

    #[test]
    fn accepts_rendered_results() {
        for literal in ["", "-5", "0.30000000000000004", "NaN", "Infinity", "-Infinity", "1e+21", "-1.5e-7"] {
            assert!(is_operand_literal(literal), "{literal}");
        }
    }

    #[test]
    fn entry_literals_exclude_results() {
        for literal in ["0", "05", "0.", ".", ".5", "12.50"] {
            assert!(is_entry_literal(literal), "{literal}");
        }
        for literal in ["", "-5", "NaN", "Infinity", "1e+21", "1.2.", "00"] {
            assert!(!is_entry_literal(literal), "{literal}");
        }
    }

    #[test]
    fn results_in_current_operand_require_overwrite() {
        for result in ["Infinity", "NaN", "-5", "1e+21", ""] {
            let typing = CalculatorState::new().with_current(result);
            assert_eq!(
                violations(&typing),
                vec![StateViolation::MalformedOperand {
                    field: "current_operand",
                    value: result.to_string(),
                }],
                "{result}"
            );

            let shown = typing.with_overwrite(true);
            assert!(validate_state(&shown).is_success(), "{result}");
        }
    }

    #[test]
    fn previous_operand_accepts_results() {
        let state = CalculatorState::new()
            .with_previous("-Infinity")
            .with_operation(Operation::Subtract)
            .with_current("3");
        assert!(validate_state(&state).is_success());
    }

    #[test]
    fn rejects_malformed_literals() {
        for literal in ["1.2.3", "00", "abc", "-", "1e", "e5", "1,000", "+5", " 5"] {
            assert!(!is_operand_literal(literal), "{literal}");
        }
    }

    #[test]
    fn validation_accumulates_all_violations() {
        let state = CalculatorState {
            current_operand: None,
            previous_operand: Some("1..".to_string()),
            operation: None,
            overwrite: true,
        }
        .with_current("x");

        let found = violations(&state);
        assert_eq!(found.len(), 3);
        assert!(found
            .iter()
            .any(|v| matches!(v, StateViolation::MalformedOperand { field: "current_operand", .. })));
        assert!(found
            .iter()
            .any(|v| matches!(v, StateViolation::MalformedOperand { field: "previous_operand", .. })));
        assert!(found.contains(&StateViolation::OverwriteOutsideResult));
    }

    #[test]
    fn operation_requires_previous_operand() {
        let state = CalculatorState::new().with_operation(Operation::Add);
        assert_eq!(violations(&state), vec![StateViolation::OperationWithoutOperand]);
    }

    #[test]
    fn overwrite_requires_result() {
        let state = CalculatorState::new().with_overwrite(true);
        assert_eq!(violations(&state), vec![StateViolation::OverwriteOutsideResult]);

        let result = CalculatorState::new().with_current("8").with_overwrite(true);
        assert!(validate_state(&result).is_success());
    }

    #[test]
    fn violation_messages_are_descriptive() {
        let violation = StateViolation::MalformedOperand {
            field: "current_operand",
            value: "1..2".to_string(),
        };
        assert_eq!(
            violation.to_string(),
            "Operand 'current_operand' is not a numeric literal: \"1..2\""
        );
    }
}
