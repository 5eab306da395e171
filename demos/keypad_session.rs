//! Keypad Session
//!
//! This example drives a calculator session key by key and prints the
//! display after each press.
//!
//! Key concepts:
//! - Keys parsed from their labels
//! - Chained operators evaluate the pending expression
//! - Results overwrite on the next digit
//!
//! Run with: cargo run --example keypad_session

use keycalc::keypad::Key;
use keycalc::session::Calculator;

fn main() {
    println!("=== Keypad Session Example ===\n");

    let mut calculator = Calculator::new();

    for label in ["1", "2", "0", "0", "×", "3", "-", "6", "0", "0", "=", "DEL", "9"] {
        let key: Key = label.parse().expect("demo labels are valid");
        calculator.press(key);
        println!("  {:>5}  ->  {}", key.label(), calculator.display());
    }

    println!("\nResults so far: {:?}", calculator.history().results());
    println!("Transitions recorded: {}", calculator.history().len());

    println!("\n=== Example Complete ===");
}
