//! Arithmetic core: operators, tokenizer, parser and evaluator
//!
//! Everything here works on already-sanitized text. The keystroke editor
//! in [`crate::editor`] is responsible for producing that text.

pub mod evaluator;
pub mod format;
mod operations;
pub mod parser;

pub use operations::{Arithmetic, Operator};

use thiserror::Error;

/// Result type for arithmetic operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Evaluation failures - every variant ends in the error sentinel on screen
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division by zero attempted
    #[error("Division by zero")]
    DivisionByZero,
    /// Result overflowed (infinity)
    #[error("Overflow: result exceeds maximum value")]
    Overflow,
    /// Invalid expression syntax
    #[error("Invalid expression: {0}")]
    ParseError(String),
    /// Nothing left to evaluate after sanitizing
    #[error("Empty expression")]
    EmptyExpression,
    /// Invalid result (NaN or other)
    #[error("Invalid result: {0}")]
    InvalidResult(String),
}

impl CalcError {
    /// Create a parse error
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::ParseError(message.into())
    }

    /// Returns true if the failure came from arithmetic rather than syntax
    #[must_use]
    pub const fn is_arithmetic(&self) -> bool {
        matches!(
            self,
            Self::DivisionByZero | Self::Overflow | Self::InvalidResult(_)
        )
    }
}
