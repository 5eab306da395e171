//! Conversions between operand strings and `f64`.

/// Threshold above which results switch to exponent notation.
const EXPONENT_UPPER: f64 = 1e21;

/// Threshold below which non-zero results switch to exponent notation.
const EXPONENT_LOWER: f64 = 1e-6;

/// Parse an operand string into a finite-or-infinite number.
///
/// Returns `None` for strings that are not numbers (including `"."` and the
/// empty evaluation fallback) and for `NaN`.
///
/// # Example
///
/// ```rust
/// use keycalc::core::parse_operand;
///
/// assert_eq!(parse_operand("12.5"), Some(12.5));
/// assert_eq!(parse_operand("Infinity"), Some(f64::INFINITY));
/// assert_eq!(parse_operand("."), None);
/// assert_eq!(parse_operand("NaN"), None);
/// ```
pub fn parse_operand(operand: &str) -> Option<f64> {
    operand
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| !value.is_nan())
}

/// Render a number the way a browser's `Number#toString` does.
///
/// # Example
///
/// ```rust
/// use keycalc::core::render;
///
/// assert_eq!(render(5.0), "5");
/// assert_eq!(render(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(render(f64::INFINITY), "Infinity");
/// assert_eq!(render(1e21), "1e+21");
/// assert_eq!(render(1.5e-7), "1.5e-7");
/// ```
pub fn render(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if (EXPONENT_LOWER..EXPONENT_UPPER).contains(&magnitude) {
        format!("{value}")
    } else {
        render_exponent(value)
    }
}

fn render_exponent(value: f64) -> String {
    let formatted = format!("{value:e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => formatted,
    }
}
