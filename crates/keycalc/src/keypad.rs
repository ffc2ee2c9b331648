//! Keypad layout for presentation shells
//!
//! Shells wire their buttons by id and ask the keypad which [`Key`] a
//! button sends. Layout (column spans in brackets):
//!
//! ```text
//! [ AC     ] [ ⌫ ] [ + ]
//! [ 7 ] [ 8 ] [ 9 ] [ - ]
//! [ 4 ] [ 5 ] [ 6 ] [ x ]
//! [ 1 ] [ 2 ] [ 3 ] [ / ]
//! [ 0 ] [ . ] [ =      ]
//! ```

use crate::core::Operator;
use crate::editor::Key;

/// A single keypad button definition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadButton {
    /// The key this button sends
    pub key: Key,
    /// Stable element id
    pub id: &'static str,
    /// Grid row (0-indexed)
    pub row: usize,
    /// First grid column (0-indexed)
    pub col: usize,
    /// Number of columns covered
    pub span: usize,
}

impl KeypadButton {
    const fn new(key: Key, id: &'static str, row: usize, col: usize, span: usize) -> Self {
        Self {
            key,
            id,
            row,
            col,
            span,
        }
    }

    /// Returns true if the button covers grid cell `(row, col)`
    #[must_use]
    pub const fn covers(&self, row: usize, col: usize) -> bool {
        self.row == row && col >= self.col && col < self.col + self.span
    }
}

const fn op(o: Operator) -> Key {
    Key::Operator(o)
}

static BUTTONS: [KeypadButton; 18] = [
    KeypadButton::new(Key::Clear, "clear", 0, 0, 2),
    KeypadButton::new(Key::Backspace, "backspace", 0, 2, 1),
    KeypadButton::new(op(Operator::Add), "add", 0, 3, 1),
    KeypadButton::new(Key::Digit(7), "seven", 1, 0, 1),
    KeypadButton::new(Key::Digit(8), "eight", 1, 1, 1),
    KeypadButton::new(Key::Digit(9), "nine", 1, 2, 1),
    KeypadButton::new(op(Operator::Subtract), "subtract", 1, 3, 1),
    KeypadButton::new(Key::Digit(4), "four", 2, 0, 1),
    KeypadButton::new(Key::Digit(5), "five", 2, 1, 1),
    KeypadButton::new(Key::Digit(6), "six", 2, 2, 1),
    KeypadButton::new(op(Operator::Multiply), "multiply", 2, 3, 1),
    KeypadButton::new(Key::Digit(1), "one", 3, 0, 1),
    KeypadButton::new(Key::Digit(2), "two", 3, 1, 1),
    KeypadButton::new(Key::Digit(3), "three", 3, 2, 1),
    KeypadButton::new(op(Operator::Divide), "divide", 3, 3, 1),
    KeypadButton::new(Key::Digit(0), "zero", 4, 0, 1),
    KeypadButton::new(Key::Decimal, "decimal", 4, 1, 1),
    KeypadButton::new(Key::Evaluate, "equals", 4, 2, 2),
];

/// Standard five-row keypad
#[derive(Debug, Clone, Copy, Default)]
pub struct Keypad;

impl Keypad {
    /// Number of grid rows
    pub const ROWS: usize = 5;
    /// Number of grid columns
    pub const COLS: usize = 4;

    /// Creates the standard keypad
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Gets all button definitions
    #[must_use]
    pub fn buttons(&self) -> &'static [KeypadButton] {
        &BUTTONS
    }

    /// Finds a button by element id
    #[must_use]
    pub fn button(&self, id: &str) -> Option<&'static KeypadButton> {
        BUTTONS.iter().find(|b| b.id == id)
    }

    /// Finds the button covering a grid cell
    #[must_use]
    pub fn button_at(&self, row: usize, col: usize) -> Option<&'static KeypadButton> {
        BUTTONS.iter().find(|b| b.covers(row, col))
    }

    /// Returns the key a button id sends
    #[must_use]
    pub fn key_for(&self, id: &str) -> Option<Key> {
        self.button(id).map(|b| b.key)
    }
}
