//! Keymap
//!
//! Key bindings for the sign-up form.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Actions that can be triggered by key presses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Focus
    NextField,
    PrevField,

    // Form
    Submit,
    TogglePasswordVisibility,

    // Text input
    InsertChar(char),
    DeleteChar,
    DeleteCharForward,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    ClearLine,

    // Application
    Quit,

    // No action
    None,
}

impl Action {
    /// Character the action would insert, if any
    pub fn inserted_char(&self) -> Option<char> {
        match self {
            Self::InsertChar(c) => Some(*c),
            _ => None,
        }
    }
}

/// Map key event to action while the form has focus
pub fn form_action(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Enter, _) => Action::Submit,
        (KeyCode::Tab, KeyModifiers::NONE) | (KeyCode::Down, _) => Action::NextField,
        (KeyCode::BackTab, _) | (KeyCode::Up, _) => Action::PrevField,
        (KeyCode::Char('s'), KeyModifiers::CONTROL) => Action::TogglePasswordVisibility,
        (KeyCode::Backspace, _) => Action::DeleteChar,
        (KeyCode::Delete, _) => Action::DeleteCharForward,
        (KeyCode::Left, _) => Action::CursorLeft,
        (KeyCode::Right, _) => Action::CursorRight,
        (KeyCode::Home, _) | (KeyCode::Char('a'), KeyModifiers::CONTROL) => Action::CursorHome,
        (KeyCode::End, _) | (KeyCode::Char('e'), KeyModifiers::CONTROL) => Action::CursorEnd,
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => Action::ClearLine,
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => Action::InsertChar(c),
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn key_ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    #[test]
    fn test_text_input() {
        assert_eq!(form_action(key(KeyCode::Char('a'))), Action::InsertChar('a'));
        assert_eq!(form_action(key(KeyCode::Char(' '))), Action::InsertChar(' '));
        assert_eq!(
            form_action(KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            Action::InsertChar('A')
        );
        assert_eq!(form_action(key(KeyCode::Backspace)), Action::DeleteChar);
        assert_eq!(form_action(key(KeyCode::Delete)), Action::DeleteCharForward);
    }

    #[test]
    fn test_navigation() {
        assert_eq!(form_action(key(KeyCode::Tab)), Action::NextField);
        assert_eq!(form_action(key(KeyCode::Down)), Action::NextField);
        assert_eq!(
            form_action(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT)),
            Action::PrevField
        );
        assert_eq!(form_action(key(KeyCode::Up)), Action::PrevField);
    }

    #[test]
    fn test_ctrl_shortcuts() {
        assert_eq!(form_action(key_ctrl(KeyCode::Char('a'))), Action::CursorHome);
        assert_eq!(form_action(key_ctrl(KeyCode::Char('e'))), Action::CursorEnd);
        assert_eq!(form_action(key_ctrl(KeyCode::Char('u'))), Action::ClearLine);
        assert_eq!(form_action(key_ctrl(KeyCode::Char('s'))), Action::TogglePasswordVisibility);
        assert_eq!(form_action(key_ctrl(KeyCode::Char('c'))), Action::Quit);
        assert_eq!(form_action(key_ctrl(KeyCode::Char('x'))), Action::None);
    }

    #[test]
    fn test_form_keys() {
        assert_eq!(form_action(key(KeyCode::Enter)), Action::Submit);
        assert_eq!(form_action(key(KeyCode::Esc)), Action::Quit);
    }

    #[test]
    fn test_action_helpers() {
        assert_eq!(Action::InsertChar('7').inserted_char(), Some('7'));
        assert_eq!(Action::DeleteChar.inserted_char(), None);
    }
}
