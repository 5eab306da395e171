//! Snapshot and Resume
//!
//! This example captures a session half-way through an expression, encodes
//! it, and finishes the computation in a fresh session.
//!
//! Key concepts:
//! - JSON for readability, binary for compactness
//! - Restored states are validated before use
//!
//! Run with: cargo run --example snapshot_resume

use keycalc::session::Calculator;
use keycalc::snapshot::Snapshot;
use keycalc::theme::Theme;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Snapshot and Resume Example ===\n");

    let mut calculator = Calculator::new();
    calculator.set_theme(Theme::Theme3);
    calculator.press_line("250 ÷ 4")?;
    println!("Before snapshot: {}", calculator.display());

    let snapshot = calculator.snapshot();
    let json = snapshot.to_json_pretty()?;
    let bytes = snapshot.to_bytes()?;
    println!("JSON size: {} bytes, binary size: {} bytes", json.len(), bytes.len());

    let mut resumed = Calculator::new().restore(Snapshot::from_bytes(&bytes)?)?;
    resumed.press_label("=")?;

    println!("Resumed theme: {}", resumed.theme());
    println!("Result: {}", resumed.display());

    println!("\n=== Example Complete ===");
    Ok(())
}
