use std::time::Instant;

use crossterm::event::{KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

use crate::form::{FormEvent, KeyPress, TextInput};
use crate::input::{form_action, Action};
use crate::validate::Field;

use super::App;

impl App {
    /// Handle a key press. Returns true when the app should exit.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }

        let caps_lock = key.state.contains(KeyEventState::CAPS_LOCK);
        let action = match form_action(key) {
            Action::InsertChar(c) if caps_lock => {
                Action::InsertChar(apply_caps_lock(c, key.modifiers.contains(KeyModifiers::SHIFT)))
            }
            action => action,
        };

        if action == Action::Quit {
            self.should_quit = true;
            return true;
        }

        let field = self.controller.page().focused();
        let press = KeyPress {
            ch: action.inserted_char(),
            caps_lock,
        };
        let key_down = FormEvent::KeyDown { field, key: press };
        if self.controller.dispatch(key_down, now).is_prevented() {
            return false;
        }

        self.apply_action(field, action, now);
        false
    }

    /// Insert pasted text into the focused field as a single edit
    pub fn handle_paste(&mut self, text: &str, now: Instant) {
        let field = self.controller.page().focused();
        let input = self.controller.page_mut().input_mut(field);

        let mut changed = false;
        for c in text.chars().filter(|c| !c.is_control()) {
            changed |= input.insert_char(c);
        }
        if changed {
            self.controller.dispatch(FormEvent::Input(field), now);
        }
    }

    fn apply_action(&mut self, field: Field, action: Action, now: Instant) {
        match action {
            Action::Submit => {
                self.controller.dispatch(FormEvent::Submit, now);
            }
            Action::NextField => self.move_focus(field, field.next(), now),
            Action::PrevField => self.move_focus(field, field.prev(), now),
            Action::TogglePasswordVisibility => {
                self.controller.page_mut().toggle_password_visibility();
            }
            action => {
                let input = self.controller.page_mut().input_mut(field);
                if edit_input(input, &action) {
                    self.controller.dispatch(FormEvent::Input(field), now);
                }
            }
        }
    }

    fn move_focus(&mut self, from: Field, to: Field, now: Instant) {
        self.controller.dispatch(FormEvent::Blur(from), now);
        self.controller.page_mut().focus(to);
    }
}

/// Apply a text-editing action. Returns true if the value changed.
fn edit_input(input: &mut TextInput, action: &Action) -> bool {
    match action {
        Action::InsertChar(c) => input.insert_char(*c),
        Action::DeleteChar => input.delete_char(),
        Action::DeleteCharForward => input.delete_char_forward(),
        Action::ClearLine => input.clear(),
        Action::CursorLeft => {
            input.cursor_left();
            false
        }
        Action::CursorRight => {
            input.cursor_right();
            false
        }
        Action::CursorHome => {
            input.cursor_home();
            false
        }
        Action::CursorEnd => {
            input.cursor_end();
            false
        }
        _ => false,
    }
}

/// Caps Lock inverts Shift for letters
fn apply_caps_lock(c: char, shift: bool) -> char {
    if shift {
        c.to_ascii_lowercase()
    } else {
        c.to_ascii_uppercase()
    }
}
