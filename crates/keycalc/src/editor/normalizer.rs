//! Merges digit and decimal-point keystrokes into the expression text

use super::buffer::{last_segment, ZERO};
use super::Edit;

/// A keystroke that extends the numeric literal being typed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericInput {
    /// One of `'0'..='9'`
    Digit(char),
    /// The decimal point
    Decimal,
}

/// Keeps every segment a valid numeric literal
#[derive(Debug, Clone, Copy, Default)]
pub struct InputNormalizer;

impl InputNormalizer {
    /// Returns the text after applying `input` to `text`
    #[must_use]
    pub fn apply(text: &str, input: NumericInput) -> Edit {
        match input {
            NumericInput::Digit(d) => Self::push_digit(text, d),
            NumericInput::Decimal => Self::push_decimal(text),
        }
    }

    /// A digit replaces a lone `"0"` and is appended otherwise
    #[must_use]
    pub fn push_digit(text: &str, digit: char) -> Edit {
        if text == ZERO {
            return Edit::accepted(digit.to_string());
        }
        Edit::accepted(format!("{text}{digit}"))
    }

    /// A second `.` in the same segment is rejected; a `.` opening a
    /// segment is written as `0.`
    #[must_use]
    pub fn push_decimal(text: &str) -> Edit {
        let segment = last_segment(text);
        if segment.has_decimal() {
            return Edit::rejected(text);
        }
        if segment.is_blank() {
            return Edit::accepted(format!("{text}0."));
        }
        Edit::accepted(format!("{text}."))
    }
}
