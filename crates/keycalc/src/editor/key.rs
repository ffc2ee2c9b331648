//! Discrete key events fed into the editor

use crate::core::Operator;
use serde::{Deserialize, Serialize};

/// One keystroke from whatever surface hosts the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Insert a digit (0-9)
    Digit(u8),
    /// Insert a decimal point
    Decimal,
    /// Insert an operator
    Operator(Operator),
    /// Remove the last character
    Backspace,
    /// Reset to `"0"`
    Clear,
    /// Evaluate the expression
    Evaluate,
}

impl Key {
    /// Creates a digit key, `None` for values above 9
    #[must_use]
    pub const fn digit(d: u8) -> Option<Self> {
        if d <= 9 {
            Some(Self::Digit(d))
        } else {
            None
        }
    }

    /// Maps a typed character to a key.
    ///
    /// Besides the expression alphabet: `=` and newline evaluate, `c`/`C`
    /// and Esc clear, `<` and the DEL/BS control characters delete.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => c.to_digit(10).and_then(|d| Self::digit(d as u8)),
            '.' => Some(Self::Decimal),
            '=' | '\n' | '\r' => Some(Self::Evaluate),
            'c' | 'C' | '\u{1b}' => Some(Self::Clear),
            '<' | '\u{8}' | '\u{7f}' => Some(Self::Backspace),
            _ => Operator::from_char(c).map(Self::Operator),
        }
    }

    /// Returns the character [`Key::from_char`] maps back to this key
    #[must_use]
    pub fn to_char(&self) -> Option<char> {
        match self {
            Self::Digit(d) => char::from_digit(u32::from(*d), 10),
            Self::Decimal => Some('.'),
            Self::Operator(op) => Some(op.symbol()),
            Self::Backspace => Some('<'),
            Self::Clear => Some('C'),
            Self::Evaluate => Some('='),
        }
    }

    /// Returns the button label for this key
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Operator(Operator::Multiply) => "x".to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Backspace => "⌫".to_string(),
            Self::Clear => "AC".to_string(),
            Self::Evaluate => "=".to_string(),
        }
    }

    /// Returns true for keys that edit the literal being typed
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Digit(_) | Self::Decimal)
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}

/// Parses a string of key characters, skipping whitespace.
///
/// Returns the first character that maps to no key as the error.
pub fn parse_keys(input: &str) -> Result<Vec<Key>, char> {
    input
        .chars()
        .filter(|c| *c != ' ' && *c != '\t')
        .map(|c| Key::from_char(c).ok_or(c))
        .collect()
}
