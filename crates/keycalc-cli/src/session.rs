//! Keystroke sessions driven from the command line

use crate::config::CliConfig;
use crate::error::{CliError, CliResult};
use keycalc::driver::KeyDriver;
use keycalc::editor::{parse_keys, Editor, Key, KeyOutcome};
use std::fmt;
use tracing::{debug, info};

/// One applied keystroke and what the display showed after it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// Key pressed
    pub key: Key,
    /// How the editor took it
    pub outcome: KeyOutcome,
    /// Display after the key
    pub display: String,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.key, self.display)
    }
}

/// An editor plus the step log of everything typed into it
#[derive(Debug, Clone, Default)]
pub struct Session {
    editor: Editor,
    steps: Vec<Step>,
}

impl Session {
    /// Creates a session showing `"0"`
    #[must_use]
    pub fn new(config: &CliConfig) -> Self {
        Self {
            editor: Editor::with_config(config.editor.clone()),
            steps: Vec::new(),
        }
    }

    /// Feeds every character of `keys` as a keystroke.
    ///
    /// Nothing is applied if any character maps to no key.
    pub fn type_keys(&mut self, keys: &str) -> CliResult<&[Step]> {
        let parsed = parse_keys(keys).map_err(CliError::invalid_key)?;
        let start = self.steps.len();
        for key in parsed {
            self.press(key);
        }
        debug!(
            keys = self.steps.len() - start,
            display = self.editor.display(),
            "typed key string"
        );
        Ok(&self.steps[start..])
    }

    /// Returns every step so far
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Returns the current display
    #[must_use]
    pub fn display(&self) -> &str {
        self.editor.display()
    }

    /// Returns the wrapped editor
    #[must_use]
    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    /// Starts over at `"0"` and forgets the step log
    pub fn reset(&mut self) {
        self.editor.press(Key::Clear);
        self.steps.clear();
    }
}

impl KeyDriver for Session {
    fn press(&mut self, key: Key) -> KeyOutcome {
        let outcome = self.editor.press(key);
        self.steps.push(Step {
            key,
            outcome,
            display: self.editor.display().to_string(),
        });
        outcome
    }

    fn display(&self) -> String {
        self.editor.display().to_string()
    }
}

/// Seeds an editor with raw text and evaluates it.
///
/// Evaluation failure is a displayed result, not an error: the returned
/// string is then the sentinel.
#[must_use]
pub fn evaluate_expression(expr: &str, config: &CliConfig) -> String {
    let mut editor = Editor::with_text(expr, config.editor.clone());
    let outcome = editor.press(Key::Evaluate);
    match editor.last_error() {
        Some(err) => info!(expr, error = %err, "evaluation failed"),
        None => debug!(expr, ?outcome, result = editor.display(), "evaluated"),
    }
    editor.display().to_string()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use keycalc::driver::run_full_specification;

    fn session() -> Session {
        Session::new(&CliConfig::default())
    }

    #[test]
    fn test_type_keys_returns_new_steps() {
        let mut s = session();
        let steps = s.type_keys("12").unwrap();
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[1].display, "12");
        let steps = s.type_keys("+3").unwrap();
        assert_eq!(steps.len(), 2);
        assert_eq!(s.steps().len(), 4);
        assert_eq!(s.display(), "12+3");
    }

    #[test]
    fn test_type_keys_skips_spaces() {
        let mut s = session();
        s.type_keys("5 + 3 =").unwrap();
        assert_eq!(s.display(), "8");
        assert_eq!(s.steps().len(), 4);
    }

    #[test]
    fn test_type_keys_invalid_applies_nothing() {
        let mut s = session();
        let err = s.type_keys("12x3").unwrap_err();
        assert!(matches!(err, CliError::InvalidKey { key: 'x' }));
        assert_eq!(s.display(), "0");
        assert!(s.steps().is_empty());
    }

    #[test]
    fn test_step_display_format() {
        let mut s = session();
        s.type_keys("4+*").unwrap();
        let lines: Vec<String> = s.steps().iter().map(ToString::to_string).collect();
        assert_eq!(lines, ["4 -> 4", "+ -> 4+", "x -> 4*"]);
        assert_eq!(s.steps()[2].outcome, KeyOutcome::Collapsed);
    }

    #[test]
    fn test_reset() {
        let mut s = session();
        s.type_keys("9/0=").unwrap();
        s.reset();
        assert_eq!(s.display(), "0");
        assert!(s.steps().is_empty());
    }

    #[test]
    fn test_session_passes_all_scenarios() {
        let mut s = session();
        run_full_specification(&mut s);
    }

    #[test]
    fn test_session_uses_precision() {
        let config = CliConfig::default().with_precision(Some(3));
        let mut s = Session::new(&config);
        s.type_keys("2/3=").unwrap();
        assert_eq!(s.display(), "0.667");
    }

    #[test]
    fn test_evaluate_expression() {
        let config = CliConfig::default();
        assert_eq!(evaluate_expression("(1+2)*3", &config), "9");
        assert_eq!(evaluate_expression("7+", &config), "7");
        assert_eq!(evaluate_expression("1/0", &config), "Error");
        assert_eq!(evaluate_expression("", &config), "0");
    }
}
