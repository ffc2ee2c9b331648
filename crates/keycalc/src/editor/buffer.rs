//! Expression buffer and the segment scanner
//!
//! The buffer is the single owner of the expression text. Handlers never
//! keep a copy: they borrow the current text and hand back the next one.

use super::collapser::OperatorCollapser;
use super::normalizer::{InputNormalizer, NumericInput};
use super::sanitizer::Sanitizer;
use super::{Edit, Key, KeyOutcome};
use crate::config::EditorConfig;
use crate::core::evaluator::Evaluator;
use crate::core::format::format_result;
use crate::core::{CalcError, CalcResult, Operator};

/// Text of a freshly reset buffer
pub const ZERO: &str = "0";

/// One numeric literal between binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    /// The literal characters (digits, `.`, parentheses)
    pub literal: &'a str,
    /// True when the literal is introduced by a unary minus
    pub negative: bool,
}

impl Segment<'_> {
    /// Returns true if the literal already holds a decimal point
    #[must_use]
    pub fn has_decimal(&self) -> bool {
        self.literal.contains('.')
    }

    /// Returns true if no character of the literal has been typed yet
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.literal.is_empty()
    }
}

/// Splits expression text on `+ - * /` into segments.
///
/// A `-` with nothing typed before it in the current segment is a sign,
/// not a separator. The final segment is always yielded, so text ending in
/// a binary operator produces a trailing blank segment.
#[must_use]
pub fn segments(text: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut negative = false;

    for (idx, ch) in text.char_indices() {
        if !Operator::is_operator_char(ch) {
            continue;
        }
        if ch == '-' && idx == start {
            negative = true;
        } else {
            out.push(Segment {
                literal: &text[start..idx],
                negative,
            });
            negative = false;
        }
        start = idx + ch.len_utf8();
    }

    out.push(Segment {
        literal: &text[start..],
        negative,
    });
    out
}

/// Returns the segment currently being typed
#[must_use]
pub fn last_segment(text: &str) -> Segment<'_> {
    // segments() always yields at least one entry
    segments(text).pop().unwrap_or(Segment {
        literal: "",
        negative: false,
    })
}

/// Owner of the current expression text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpressionBuffer {
    text: String,
}

impl Default for ExpressionBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpressionBuffer {
    /// Creates a buffer holding `"0"`
    #[must_use]
    pub fn new() -> Self {
        Self {
            text: ZERO.to_string(),
        }
    }

    /// Creates a buffer seeded with arbitrary text
    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Returns the current text
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Resets the text to `"0"`
    pub fn reset(&mut self) {
        self.text.clear();
        self.text.push_str(ZERO);
    }

    /// Returns true if the buffer holds exactly `"0"`
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.text == ZERO
    }

    /// Returns true if backspace removed every character
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Removes the last character; the text may become empty
    pub fn backspace(&mut self) {
        self.text.pop();
    }

    /// Returns all segments of the current text
    #[must_use]
    pub fn segments(&self) -> Vec<Segment<'_>> {
        segments(&self.text)
    }

    /// Routes one keystroke to its handler and stores the handler's text.
    ///
    /// An evaluation failure leaves the text untouched and is returned as
    /// the error; choosing the sentinel is up to the caller.
    pub fn dispatch(&mut self, key: Key, config: &EditorConfig) -> CalcResult<KeyOutcome> {
        let edit = match key {
            Key::Digit(d) => match char::from_digit(u32::from(d), 10) {
                Some(c) => InputNormalizer::apply(&self.text, NumericInput::Digit(c)),
                None => Edit::rejected(&self.text),
            },
            Key::Decimal => InputNormalizer::apply(&self.text, NumericInput::Decimal),
            Key::Operator(op) => OperatorCollapser::apply(&self.text, op),
            Key::Backspace => {
                self.backspace();
                return Ok(KeyOutcome::Accepted);
            }
            Key::Clear => {
                self.reset();
                return Ok(KeyOutcome::Accepted);
            }
            Key::Evaluate => {
                self.text = evaluate_text(&self.text, config)?;
                return Ok(KeyOutcome::Evaluated);
            }
        };

        self.text = edit.text;
        Ok(edit.outcome)
    }
}

/// Sanitizes and evaluates `text`, returning the rendered result
pub fn evaluate_text(text: &str, config: &EditorConfig) -> CalcResult<String> {
    let sanitized = Sanitizer::sanitize(text);
    if sanitized.is_empty() {
        return Err(CalcError::EmptyExpression);
    }
    let value = Evaluator::new().evaluate_str(&sanitized)?;
    Ok(format_result(value, config.precision))
}
