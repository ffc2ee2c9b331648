//! Rendering of numeric results back into expression text
//!
//! The rendered string must be valid input for the editor again, so the
//! output never uses exponent notation and never carries a trailing `.0`.

use crate::config::MAX_PRECISION;

/// Formats a result for display.
///
/// With `precision` set, the value is rounded to at most that many
/// fractional digits and trailing zeros are trimmed. Precision past
/// [`MAX_PRECISION`] is treated as `MAX_PRECISION`. Without it the
/// shortest representation that round-trips to the same `f64` is used.
#[must_use]
pub fn format_result(value: f64, precision: Option<usize>) -> String {
    // -0 would render as "-0"
    let value = if value == 0.0 { 0.0 } else { value };

    let rendered = match precision {
        None => format!("{value}"),
        Some(digits) => {
            let digits = digits.min(MAX_PRECISION);
            let fixed = format!("{value:.digits$}");
            if fixed.contains('.') {
                fixed
                    .trim_end_matches('0')
                    .trim_end_matches('.')
                    .to_string()
            } else {
                fixed
            }
        }
    };

    if rendered == "-0" {
        "0".to_string()
    } else {
        rendered
    }
}
