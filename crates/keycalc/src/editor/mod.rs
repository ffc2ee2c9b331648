//! Keystroke editor: turns key events into expression text and results
//!
//! The editor is an explicit state machine over three states:
//!
//! ```text
//!            digit/./op              digit/./op/<
//!   Zero ─────────────────▶ Expression ◀──────┐
//!    ▲  ▲                      │   │  └───────┘
//!    │  └──── C, = → "0" ──────┘   │ = fails
//!    │                             ▼
//!    └──────────── C ─────────── Error ── digit/./op → fresh "0" + key
//! ```
//!
//! Every keystroke goes through [`transition`], a pure function; [`Editor`]
//! owns the single state value and logs each step.

pub mod buffer;
pub mod collapser;
mod key;
pub mod normalizer;
pub mod sanitizer;

pub use buffer::{evaluate_text, last_segment, segments, ExpressionBuffer, Segment};
pub use collapser::OperatorCollapser;
pub use key::{parse_keys, Key};
pub use normalizer::{InputNormalizer, NumericInput};
pub use sanitizer::Sanitizer;

use crate::config::EditorConfig;
use crate::core::CalcError;
use tracing::{debug, trace};

/// Display value of the error state
pub const ERROR_SENTINEL: &str = "Error";

/// How a keystroke was taken
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Applied verbatim
    Accepted,
    /// Ignored; the display did not change
    Rejected,
    /// Applied, but rewrote the operators already in the text
    Collapsed,
    /// Evaluation produced a number
    Evaluated,
    /// Evaluation failed; the editor now shows the sentinel
    Failed,
}

/// Text produced by a handler together with how the keystroke was taken
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    /// The next expression text
    pub text: String,
    /// Outcome classification
    pub outcome: KeyOutcome,
}

impl Edit {
    /// Keystroke applied verbatim
    #[must_use]
    pub fn accepted(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            outcome: KeyOutcome::Accepted,
        }
    }

    /// Keystroke ignored; `text` is the unchanged input
    #[must_use]
    pub fn rejected(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            outcome: KeyOutcome::Rejected,
        }
    }

    /// Keystroke applied with a rewrite
    #[must_use]
    pub fn collapsed(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            outcome: KeyOutcome::Collapsed,
        }
    }
}

/// Coarse display classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayState {
    /// Showing `"0"`
    Zero,
    /// Showing an expression or a result
    Expression,
    /// Showing the error sentinel
    ErrorSentinel,
}

/// Full editor state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditorState {
    /// Freshly reset
    #[default]
    Zero,
    /// Text other than `"0"`
    Expression(ExpressionBuffer),
    /// Last evaluation failed
    Error(CalcError),
}

impl EditorState {
    /// Returns the string a display should show
    #[must_use]
    pub fn display(&self) -> &str {
        match self {
            Self::Zero => buffer::ZERO,
            Self::Expression(buffer) if buffer.is_empty() => buffer::ZERO,
            Self::Expression(buffer) => buffer.text(),
            Self::Error(_) => ERROR_SENTINEL,
        }
    }

    /// Returns the coarse display classification
    #[must_use]
    pub const fn display_state(&self) -> DisplayState {
        match self {
            Self::Zero => DisplayState::Zero,
            Self::Expression(_) => DisplayState::Expression,
            Self::Error(_) => DisplayState::ErrorSentinel,
        }
    }

    /// Settles a buffer into `Zero` or `Expression`
    fn from_buffer(buffer: ExpressionBuffer) -> Self {
        if buffer.is_zero() || buffer.is_empty() {
            Self::Zero
        } else {
            Self::Expression(buffer)
        }
    }
}

/// Result of one transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// State after the keystroke
    pub state: EditorState,
    /// How the keystroke was taken
    pub outcome: KeyOutcome,
}

/// The editor's transition function
#[must_use]
pub fn transition(state: EditorState, key: Key, config: &EditorConfig) -> Transition {
    let mut buffer = match (state, key) {
        (_, Key::Clear) => {
            return Transition {
                state: EditorState::Zero,
                outcome: KeyOutcome::Accepted,
            };
        }
        (state @ EditorState::Zero, Key::Backspace)
        | (state @ EditorState::Error(_), Key::Backspace | Key::Evaluate) => {
            return Transition {
                state,
                outcome: KeyOutcome::Rejected,
            };
        }
        (EditorState::Zero | EditorState::Error(_), _) => ExpressionBuffer::new(),
        (EditorState::Expression(buffer), _) => buffer,
    };

    match buffer.dispatch(key, config) {
        Ok(outcome) => Transition {
            state: EditorState::from_buffer(buffer),
            outcome,
        },
        Err(err) => Transition {
            state: EditorState::Error(err),
            outcome: KeyOutcome::Failed,
        },
    }
}

/// Single-owner keystroke editor
#[derive(Debug, Clone, Default)]
pub struct Editor {
    state: EditorState,
    config: EditorConfig,
}

impl Editor {
    /// Creates an editor showing `"0"`
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an editor with custom configuration
    #[must_use]
    pub fn with_config(config: EditorConfig) -> Self {
        Self {
            state: EditorState::Zero,
            config,
        }
    }

    /// Creates an editor whose buffer holds `text` verbatim
    #[must_use]
    pub fn with_text(text: impl Into<String>, config: EditorConfig) -> Self {
        Self {
            state: EditorState::from_buffer(ExpressionBuffer::from_text(text)),
            config,
        }
    }

    /// Applies one keystroke
    pub fn press(&mut self, key: Key) -> KeyOutcome {
        let state = std::mem::take(&mut self.state);
        let Transition { state, outcome } = transition(state, key, &self.config);
        self.state = state;

        let shown = self.display();
        match outcome {
            KeyOutcome::Rejected => {
                debug!(target: "keycalc::editor", %key, display = shown, "keystroke rejected");
            }
            KeyOutcome::Collapsed => {
                debug!(target: "keycalc::editor", %key, display = shown, "operator run collapsed");
            }
            KeyOutcome::Failed => {
                if let Some(err) = self.last_error() {
                    debug!(target: "keycalc::editor", %key, error = %err, "evaluation failed");
                }
            }
            KeyOutcome::Accepted | KeyOutcome::Evaluated => {
                trace!(target: "keycalc::editor", %key, display = shown, "keystroke applied");
            }
        }

        outcome
    }

    /// Applies keystrokes in order, returning the last outcome
    pub fn press_all(&mut self, keys: impl IntoIterator<Item = Key>) -> Option<KeyOutcome> {
        keys.into_iter().map(|key| self.press(key)).last()
    }

    /// Returns the display string
    #[must_use]
    pub fn display(&self) -> &str {
        self.state.display()
    }

    /// Returns the raw buffer text, `None` in the error state
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match &self.state {
            EditorState::Zero => Some(buffer::ZERO),
            EditorState::Expression(buffer) => Some(buffer.text()),
            EditorState::Error(_) => None,
        }
    }

    /// Returns the coarse display classification
    #[must_use]
    pub fn display_state(&self) -> DisplayState {
        self.state.display_state()
    }

    /// Returns the evaluation error behind the sentinel
    #[must_use]
    pub fn last_error(&self) -> Option<&CalcError> {
        match &self.state {
            EditorState::Error(err) => Some(err),
            _ => None,
        }
    }

    /// Returns the current state
    #[must_use]
    pub fn state(&self) -> &EditorState {
        &self.state
    }

    /// Returns the configuration
    #[must_use]
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }
}
