//! Terminal key event mapping for interactive mode

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use keycalc::editor::Key;

/// What a terminal key event asks the interactive loop to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Feed a keystroke to the editor
    Press(Key),
    /// Leave interactive mode
    Quit,
    /// Ignored input
    None,
}

/// Maps crossterm key events to editor keys
#[derive(Debug, Default, Clone, Copy)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> InputAction {
        let KeyEvent {
            code,
            modifiers,
            kind,
            ..
        } = event;

        // Windows also reports release and repeat events
        if kind != KeyEventKind::Press {
            return InputAction::None;
        }

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'd') => InputAction::Quit,
                KeyCode::Char('u') => InputAction::Press(Key::Clear),
                _ => InputAction::None,
            };
        }

        match code {
            KeyCode::Char('q' | 'Q') => InputAction::Quit,
            KeyCode::Char(c) => Key::from_char(c).map_or(InputAction::None, InputAction::Press),
            KeyCode::Backspace | KeyCode::Delete => InputAction::Press(Key::Backspace),
            KeyCode::Enter => InputAction::Press(Key::Evaluate),
            KeyCode::Esc => InputAction::Press(Key::Clear),
            _ => InputAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;
    use keycalc::core::Operator;

    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn key_event_ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    // ===== Character input tests =====

    #[test]
    fn test_handle_digit_keys() {
        let handler = InputHandler::new();
        for d in 0..=9u8 {
            let c = char::from(b'0' + d);
            assert_eq!(
                handler.handle_key(key_event(KeyCode::Char(c))),
                InputAction::Press(Key::Digit(d))
            );
        }
    }

    #[test]
    fn test_handle_operator_keys() {
        let handler = InputHandler::new();
        for op in Operator::ALL {
            assert_eq!(
                handler.handle_key(key_event(KeyCode::Char(op.symbol()))),
                InputAction::Press(Key::Operator(op))
            );
        }
    }

    #[test]
    fn test_handle_unknown_char() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('%'))),
            InputAction::None
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('('))),
            InputAction::None
        );
    }

    // ===== Special key tests =====

    #[test]
    fn test_handle_editing_keys() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Backspace)),
            InputAction::Press(Key::Backspace)
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Enter)),
            InputAction::Press(Key::Evaluate)
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Esc)),
            InputAction::Press(Key::Clear)
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('c'))),
            InputAction::Press(Key::Clear)
        );
    }

    #[test]
    fn test_handle_quit() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('q'))),
            InputAction::Quit
        );
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('c'))),
            InputAction::Quit
        );
    }

    #[test]
    fn test_handle_ctrl_u_clears() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('u'))),
            InputAction::Press(Key::Clear)
        );
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('x'))),
            InputAction::None
        );
    }

    #[test]
    fn test_release_events_ignored() {
        let handler = InputHandler::new();
        let event = KeyEvent {
            code: KeyCode::Char('5'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(handler.handle_key(event), InputAction::None);
    }

    #[test]
    fn test_function_keys_ignored() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(key_event(KeyCode::F(1))), InputAction::None);
        assert_eq!(handler.handle_key(key_event(KeyCode::Left)), InputAction::None);
    }
}
