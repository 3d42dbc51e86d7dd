use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Maps key presses to actions depending on whether the add dialog is open
pub struct InputHandler {}

impl InputHandler {
    pub fn new() -> Self {
        Self {}
    }

    /// Process a key event
    pub fn handle_key(&self, key: KeyEvent, dialog_open: bool) -> InputAction {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return InputAction::Quit;
        }

        if dialog_open {
            return match key.code {
                KeyCode::Enter => InputAction::Submit,
                KeyCode::Esc => InputAction::Cancel,
                KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                    InputAction::SwitchField
                }
                _ => InputAction::Edit(key),
            };
        }

        match key.code {
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('n') => InputAction::Next,
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('p') => InputAction::Previous,
            KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Char('f') => InputAction::Flip,
            KeyCode::Char('d') | KeyCode::Delete => InputAction::Delete,
            KeyCode::Char('a') | KeyCode::Char('+') => InputAction::OpenAddDialog,
            KeyCode::Char('t') => InputAction::CycleTheme,
            KeyCode::Char('?') => InputAction::ToggleHelp,
            KeyCode::Char('q') | KeyCode::Esc => InputAction::Quit,
            _ => InputAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    Next,
    Previous,
    Flip,
    Delete,
    OpenAddDialog,
    CycleTheme,
    ToggleHelp,
    Quit,
    // Add dialog
    Submit,
    Cancel,
    SwitchField,
    Edit(KeyEvent),
    None,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_browse_keys() {
        let input = InputHandler::new();
        assert_eq!(input.handle_key(key(KeyCode::Right), false), InputAction::Next);
        assert_eq!(input.handle_key(key(KeyCode::Char('h')), false), InputAction::Previous);
        assert_eq!(input.handle_key(key(KeyCode::Char(' ')), false), InputAction::Flip);
        assert_eq!(input.handle_key(key(KeyCode::Char('d')), false), InputAction::Delete);
        assert_eq!(
            input.handle_key(key(KeyCode::Char('a')), false),
            InputAction::OpenAddDialog
        );
        assert_eq!(input.handle_key(key(KeyCode::Char('q')), false), InputAction::Quit);
        assert_eq!(input.handle_key(key(KeyCode::F(5)), false), InputAction::None);
    }

    #[test]
    fn test_dialog_keys_edit_text() {
        let input = InputHandler::new();
        let typed = key(KeyCode::Char('q'));
        assert_eq!(input.handle_key(typed, true), InputAction::Edit(typed));
        assert_eq!(input.handle_key(key(KeyCode::Enter), true), InputAction::Submit);
        assert_eq!(input.handle_key(key(KeyCode::Esc), true), InputAction::Cancel);
        assert_eq!(input.handle_key(key(KeyCode::Tab), true), InputAction::SwitchField);
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let input = InputHandler::new();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(input.handle_key(ctrl_c, false), InputAction::Quit);
        assert_eq!(input.handle_key(ctrl_c, true), InputAction::Quit);
    }
}
