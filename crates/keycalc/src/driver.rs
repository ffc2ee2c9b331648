//! Unified keystroke driver
//!
//! **Write the scenario once, run it against every surface.** The core
//! [`Editor`] and any host wrapping it (the CLI session, a GUI shell)
//! implement [`KeyDriver`]; the `verify_*` functions below are the shared
//! behavioral contract and panic on the first mismatch.
//!
//! ```rust
//! use keycalc::driver::run_full_specification;
//! use keycalc::editor::Editor;
//!
//! let mut editor = Editor::new();
//! run_full_specification(&mut editor);
//! ```

use crate::core::Operator;
use crate::editor::{Editor, Key, KeyOutcome};

/// Anything that accepts keystrokes and shows one display string
pub trait KeyDriver {
    /// Feeds one keystroke
    fn press(&mut self, key: Key) -> KeyOutcome;

    /// Returns the current display string
    fn display(&self) -> String;

    /// Feeds keys in order
    fn press_keys(&mut self, keys: &[Key]) {
        for key in keys {
            self.press(*key);
        }
    }
}

impl KeyDriver for Editor {
    fn press(&mut self, key: Key) -> KeyOutcome {
        Editor::press(self, key)
    }

    fn display(&self) -> String {
        Editor::display(self).to_string()
    }
}

const ADD: Key = Key::Operator(Operator::Add);
const SUB: Key = Key::Operator(Operator::Subtract);
const MUL: Key = Key::Operator(Operator::Multiply);
const DIV: Key = Key::Operator(Operator::Divide);

/// `[5, +, 3, =]` shows `"8"`
pub fn verify_simple_sum<D: KeyDriver>(driver: &mut D) {
    driver.press(Key::Clear);
    driver.press_keys(&[Key::Digit(5), ADD, Key::Digit(3), Key::Evaluate]);
    assert_eq!(driver.display(), "8");
}

/// `[1, ., ., 5, =]`: the second `.` is a no-op
pub fn verify_duplicate_decimal<D: KeyDriver>(driver: &mut D) {
    driver.press(Key::Clear);
    driver.press_keys(&[Key::Digit(1), Key::Decimal]);
    assert_eq!(driver.press(Key::Decimal), KeyOutcome::Rejected);
    driver.press(Key::Digit(5));
    assert_eq!(driver.display(), "1.5");
    driver.press(Key::Evaluate);
    assert_eq!(driver.display(), "1.5");
}

/// `[9, /, 0, =]` shows the sentinel
pub fn verify_division_by_zero<D: KeyDriver>(driver: &mut D) {
    driver.press(Key::Clear);
    driver.press_keys(&[Key::Digit(9), DIV, Key::Digit(0)]);
    assert_eq!(driver.press(Key::Evaluate), KeyOutcome::Failed);
    assert_eq!(driver.display(), "Error");
}

/// `[4, +, *, 2, =]`: the `*` replaces the pending `+`
pub fn verify_operator_collapse<D: KeyDriver>(driver: &mut D) {
    driver.press(Key::Clear);
    driver.press_keys(&[Key::Digit(4), ADD]);
    assert_eq!(driver.press(MUL), KeyOutcome::Collapsed);
    driver.press(Key::Digit(2));
    assert_eq!(driver.display(), "4*2");
    driver.press(Key::Evaluate);
    assert_eq!(driver.display(), "8");
}

/// `[C, 7]` shows `"7"` even from the sentinel
pub fn verify_clear_recovers<D: KeyDriver>(driver: &mut D) {
    driver.press_keys(&[Key::Clear, Key::Digit(1), DIV, Key::Digit(0), Key::Evaluate]);
    assert_eq!(driver.display(), "Error");
    driver.press_keys(&[Key::Clear, Key::Digit(7)]);
    assert_eq!(driver.display(), "7");
}

/// Leading zero replacement and negative operands
pub fn verify_sign_handling<D: KeyDriver>(driver: &mut D) {
    driver.press(Key::Clear);
    driver.press_keys(&[Key::Digit(0), Key::Digit(6), MUL, SUB]);
    assert_eq!(driver.display(), "6*-");
    driver.press_keys(&[Key::Decimal, Key::Digit(5), Key::Evaluate]);
    assert_eq!(driver.display(), "-3");
}

/// Backspace trims one character and bottoms out at `"0"`
pub fn verify_backspace<D: KeyDriver>(driver: &mut D) {
    driver.press(Key::Clear);
    driver.press_keys(&[Key::Digit(1), Key::Digit(2), ADD]);
    driver.press(Key::Backspace);
    assert_eq!(driver.display(), "12");
    driver.press_keys(&[Key::Backspace, Key::Backspace]);
    assert_eq!(driver.display(), "0");
}

/// Complete verification suite - runs all scenarios
pub fn run_full_specification<D: KeyDriver>(driver: &mut D) {
    verify_simple_sum(driver);
    verify_duplicate_decimal(driver);
    verify_division_by_zero(driver);
    verify_operator_collapse(driver);
    verify_clear_recovers(driver);
    verify_sign_handling(driver);
    verify_backspace(driver);
}
