//! End-to-end keypad scenarios through the public API.

use keycalc::core::{transition, CalculatorState, Intent, Operation};
use keycalc::display::format_operand;
use keycalc::session::Calculator;
use keycalc::snapshot::Snapshot;
use keycalc::theme::Theme;

fn run(state: CalculatorState, intents: &[Intent]) -> CalculatorState {
    intents
        .iter()
        .fold(state, |state, intent| transition(&state, intent))
}

#[test]
fn add_then_evaluate() {
    let state = run(
        CalculatorState::default(),
        &[
            Intent::AddDigit('5'),
            Intent::ChooseOperation(Operation::Add),
            Intent::AddDigit('3'),
            Intent::Evaluate,
        ],
    );

    assert_eq!(state.current_operand(), Some("8"));
    assert!(state.overwrite);
    assert_eq!(state.operation(), None);
    assert_eq!(state.previous_operand(), None);
}

#[test]
fn pending_addition_evaluates() {
    let state = CalculatorState::new()
        .with_previous("2")
        .with_operation(Operation::Add)
        .with_current("3");
    let state = transition(&state, &Intent::Evaluate);
    assert_eq!(state.current_operand(), Some("5"));
}

#[test]
fn choose_then_evaluate_round_trip() {
    let state = CalculatorState::new().with_current("2");
    let state = run(
        state,
        &[
            Intent::ChooseOperation(Operation::Add),
            Intent::AddDigit('3'),
            Intent::Evaluate,
        ],
    );
    assert_eq!(state.current_operand(), Some("5"));
}

#[test]
fn choose_with_both_operands_but_no_operation() {
    let state = CalculatorState::new().with_previous("2").with_current("3");
    let state = run(
        state,
        &[Intent::ChooseOperation(Operation::Add), Intent::Evaluate],
    );

    // Nothing was pending, so the fold yields the empty fallback and the
    // evaluate has no current operand to work with.
    assert_eq!(state.previous_operand(), Some(""));
    assert_eq!(state.operation(), Some(Operation::Add));
    assert_eq!(state.current_operand(), None);
}

#[test]
fn delete_after_two_digits() {
    let state = run(
        CalculatorState::default(),
        &[Intent::AddDigit('1'), Intent::AddDigit('2'), Intent::Delete],
    );
    assert_eq!(state.current_operand(), Some("1"));
}

#[test]
fn formatting_examples() {
    assert_eq!(format_operand(Some("1000000")).as_deref(), Some("1,000,000"));
    assert_eq!(format_operand(Some("12.5")).as_deref(), Some("12.5"));
    assert_eq!(format_operand(None), None);
}

#[test]
fn divide_by_zero_shows_infinity() {
    let mut calculator = Calculator::new();
    calculator.press_line("5 ÷ 0 =").unwrap();

    assert_eq!(calculator.state().current_operand(), Some("Infinity"));
    assert_eq!(calculator.display(), "∞");
}

#[test]
fn chained_operators_evaluate_left_to_right() {
    let mut calculator = Calculator::new();
    calculator.press_line("2 + 3 × 4 =").unwrap();
    assert_eq!(calculator.state().current_operand(), Some("20"));
}

#[test]
fn changing_operator_before_second_operand() {
    let mut calculator = Calculator::new();
    calculator.press_line("9 + - ×").unwrap();
    assert_eq!(calculator.display(), "9×");
}

#[test]
fn digit_after_result_starts_fresh() {
    let mut calculator = Calculator::new();
    calculator.press_line("6 × 7 = 1 5").unwrap();
    assert_eq!(calculator.display(), "15");
}

#[test]
fn operator_after_result_continues() {
    let mut calculator = Calculator::new();
    calculator.press_line("6 × 7 = + 8 =").unwrap();
    assert_eq!(calculator.display(), "50");
    assert_eq!(calculator.history().results(), vec!["42", "50"]);
}

#[test]
fn delete_after_result_clears_display() {
    let mut calculator = Calculator::new();
    calculator.press_line("1 + 1 = DEL").unwrap();
    assert!(calculator.display_line().is_blank());
}

#[test]
fn reset_key_clears() {
    let mut calculator = Calculator::new();
    calculator.press_line("12 + 4 RESET").unwrap();
    assert!(calculator.state().is_empty());
}

#[test]
fn session_survives_snapshot_with_theme() {
    let mut calculator = Calculator::new();
    calculator.set_theme(Theme::Theme2);
    calculator.press_line("1000 - 1").unwrap();

    let bytes = calculator.snapshot().to_bytes().unwrap();
    let mut resumed = Calculator::new()
        .restore(Snapshot::from_bytes(&bytes).unwrap())
        .unwrap();
    resumed.press_label("=").unwrap();

    assert_eq!(resumed.theme(), Theme::Theme2);
    assert_eq!(resumed.display(), "999");
}
