//! Operand display formatting.
//!
//! Formatting is separate from the state machine: operands stay raw strings
//! in `CalculatorState` and are only grouped for display.

use crate::core::{CalculatorState, Operation};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Digits per thousands group.
const GROUP_SIZE: usize = 3;

/// Separators used when displaying operands.
///
/// The default matches en-US: `,` between thousands groups and `.` before
/// the fraction.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberFormat {
    pub group_separator: char,
    pub decimal_separator: char,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            group_separator: ',',
            decimal_separator: '.',
        }
    }
}

impl NumberFormat {
    pub fn new(group_separator: char, decimal_separator: char) -> Self {
        Self {
            group_separator,
            decimal_separator,
        }
    }

    /// Format an operand for display.
    ///
    /// The integer part is grouped into thousands; the decimal part, when
    /// present, is reattached unformatted.
    ///
    /// # Example
    ///
    /// ```rust
    /// use keycalc::display::NumberFormat;
    ///
    /// let en = NumberFormat::default();
    /// assert_eq!(en.format("1000000"), "1,000,000");
    /// assert_eq!(en.format("1234.5678"), "1,234.5678");
    ///
    /// let de = NumberFormat::new('.', ',');
    /// assert_eq!(de.format("1234.5"), "1.234,5");
    /// ```
    pub fn format(&self, operand: &str) -> String {
        if operand.is_empty() {
            return String::new();
        }

        match operand.split_once('.') {
            Some((integer, decimal)) => format!(
                "{}{}{}",
                self.format_integer(integer),
                self.decimal_separator,
                decimal
            ),
            None => self.format_integer(operand),
        }
    }

    fn format_integer(&self, integer: &str) -> String {
        let (sign, digits) = match integer.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", integer),
        };

        if digits.chars().all(|c| c.is_ascii_digit()) {
            let trimmed = digits.trim_start_matches('0');
            let trimmed = if trimmed.is_empty() { "0" } else { trimmed };
            return format!("{sign}{}", self.group(trimmed));
        }

        match integer.parse::<f64>() {
            Ok(value) if value.is_infinite() => {
                if value.is_sign_negative() {
                    "-∞".to_string()
                } else {
                    "∞".to_string()
                }
            }
            Ok(value) if value.is_finite() => {
                let rounded = format!("{:.0}", value.round());
                self.format_integer(&rounded)
            }
            _ => "NaN".to_string(),
        }
    }

    fn group(&self, digits: &str) -> String {
        let mut grouped = String::with_capacity(digits.len() + digits.len() / GROUP_SIZE);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % GROUP_SIZE == 0 {
                grouped.push(self.group_separator);
            }
            grouped.push(c);
        }
        grouped
    }
}

/// Format an optional operand with the default en-US separators.
///
/// An absent operand formats as absent.
///
/// # Example
///
/// ```rust
/// use keycalc::display::format_operand;
///
/// assert_eq!(format_operand(Some("1000000")).as_deref(), Some("1,000,000"));
/// assert_eq!(format_operand(Some("12.5")).as_deref(), Some("12.5"));
/// assert_eq!(format_operand(None), None);
/// ```
pub fn format_operand(operand: Option<&str>) -> Option<String> {
    operand.map(|operand| NumberFormat::default().format(operand))
}

/// The formatted output line: previous operand, operator, current operand.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct DisplayLine {
    pub previous: Option<String>,
    pub operation: Option<Operation>,
    pub current: Option<String>,
}

impl DisplayLine {
    /// Build the display line for a state.
    ///
    /// # Example
    ///
    /// ```rust
    /// use keycalc::core::{CalculatorState, Operation};
    /// use keycalc::display::{DisplayLine, NumberFormat};
    ///
    /// let state = CalculatorState::new()
    ///     .with_previous("1200")
    ///     .with_operation(Operation::Multiply)
    ///     .with_current("3");
    ///
    /// let line = DisplayLine::from_state(&state, &NumberFormat::default());
    /// assert_eq!(line.to_string(), "1,200×3");
    /// ```
    pub fn from_state(state: &CalculatorState, format: &NumberFormat) -> Self {
        Self {
            previous: state.previous_operand().map(|operand| format.format(operand)),
            operation: state.operation(),
            current: state.current_operand().map(|operand| format.format(operand)),
        }
    }

    /// True when nothing would be rendered.
    pub fn is_blank(&self) -> bool {
        self.to_string().is_empty()
    }
}

impl fmt::Display for DisplayLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(previous) = &self.previous {
            f.write_str(previous)?;
        }
        if let Some(operation) = self.operation {
            f.write_str(operation.symbol())?;
        }
        if let Some(current) = &self.current {
            f.write_str(current)?;
        }
        Ok(())
    }
}
