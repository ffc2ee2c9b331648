//! keycalc - keystroke-driven arithmetic expression editor
//!
//! Turns discrete key events (digit, decimal point, operator, backspace,
//! clear, evaluate) into one expression string that stays a sane prefix of
//! a valid arithmetic expression after every keystroke, then reduces it to
//! a number or the `"Error"` sentinel.
//!
//! # Layers
//!
//! - [`editor`]: buffer, input normalizer, operator collapser, sanitizer and
//!   the `(state, key) -> state` transition function
//! - [`core`]: tokenizer, recursive descent parser and checked evaluator
//! - [`driver`]: scenario suite shared by every keystroke surface
//! - [`keypad`]: button layout for presentation shells
//!
//! # Example
//!
//! ```rust
//! use keycalc::prelude::*;
//!
//! let mut editor = Editor::new();
//! editor.press_all(parse_keys("4+*2").unwrap());
//! assert_eq!(editor.display(), "4*2");
//!
//! editor.press(Key::Evaluate);
//! assert_eq!(editor.display(), "8");
//!
//! editor.press_all(parse_keys("/0=").unwrap());
//! assert_eq!(editor.display(), "Error");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod config;
pub mod core;
pub mod driver;
pub mod editor;
pub mod keypad;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::EditorConfig;
    pub use crate::core::evaluator::Evaluator;
    pub use crate::core::parser::{AstNode, Parser, Token, Tokenizer};
    pub use crate::core::{CalcError, CalcResult, Operator};
    pub use crate::driver::KeyDriver;
    pub use crate::editor::{
        parse_keys, transition, DisplayState, Editor, EditorState, ExpressionBuffer, Key,
        KeyOutcome, ERROR_SENTINEL,
    };
    pub use crate::keypad::{Keypad, KeypadButton};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        let mut editor = Editor::new();
        editor.press(Key::Digit(2));
        assert_eq!(editor.display(), "2");
        assert_eq!(Evaluator::new().evaluate_str("2+3"), Ok(5.0));
    }

    #[test]
    fn test_parser_direct() {
        let ast = Parser::parse_str("1+2*3").unwrap();
        assert_eq!(Evaluator::new().evaluate(&ast).unwrap(), 7.0);
    }

    #[test]
    fn test_keypad_drives_editor() {
        let keypad = Keypad::new();
        let mut editor = Editor::new();
        for id in ["nine", "multiply", "three", "equals"] {
            editor.press(keypad.key_for(id).unwrap());
        }
        assert_eq!(editor.display(), "27");
    }

    #[test]
    fn test_error_sentinel_constant() {
        let mut editor = Editor::new();
        editor.press_all(parse_keys("1/0=").unwrap());
        assert_eq!(editor.display(), ERROR_SENTINEL);
    }
}
