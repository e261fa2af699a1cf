//! Form Page
//!
//! The elements the form reads from and writes to: three text inputs plus
//! the error slots, checkmarks, strength bar, caps-lock warning, result
//! message and submit button. Nothing here knows about validation rules.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::validate::{Field, PasswordCriteria};

/// Single-line text input with a char-indexed caret.
#[derive(Clone, Default, Zeroize, ZeroizeOnDrop)]
pub struct TextInput {
    value: String,
    cursor: usize,
}

impl TextInput {
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Caret position in characters
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn char_len(&self) -> usize {
        self.value.chars().count()
    }

    #[cfg(test)]
    pub fn set_value(&mut self, value: &str) {
        self.value.zeroize();
        self.value.push_str(value);
        self.cursor = self.char_len();
    }

    fn byte_index(&self) -> usize {
        self.value
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    pub fn insert_char(&mut self, c: char) -> bool {
        let idx = self.byte_index();
        self.value.insert(idx, c);
        self.cursor += 1;
        true
    }

    /// Delete character before the caret (backspace)
    pub fn delete_char(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let idx = self.byte_index();
        self.value.remove(idx);
        true
    }

    /// Delete character under the caret (delete key)
    pub fn delete_char_forward(&mut self) -> bool {
        if self.cursor >= self.char_len() {
            return false;
        }
        let idx = self.byte_index();
        self.value.remove(idx);
        true
    }

    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.char_len();
    }

    pub fn clear(&mut self) -> bool {
        if self.value.is_empty() {
            return false;
        }
        self.zeroize();
        true
    }
}

/// Proof of having put a message into an error slot.
///
/// Clearing through a token only succeeds while no newer message has
/// replaced the one it was minted for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MessageToken(u64);

impl MessageToken {
    #[cfg(test)]
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}

#[derive(Debug, Clone, Default)]
struct ErrorSlot {
    text: Option<String>,
    owner: Option<MessageToken>,
}

pub struct FormPage {
    inputs: [TextInput; 3],
    errors: [ErrorSlot; 3],
    checks: [bool; 3],
    strength_percent: u16,
    strength_label: String,
    strength_rating: &'static str,
    caps_warning: bool,
    result: Option<String>,
    submit_enabled: bool,
    focused: Field,
    mask_password: bool,
    next_token: u64,
}

impl Default for FormPage {
    fn default() -> Self {
        Self::new(true)
    }
}

impl FormPage {
    pub fn new(mask_password: bool) -> Self {
        Self {
            inputs: Default::default(),
            errors: Default::default(),
            checks: [false; 3],
            strength_percent: 0,
            strength_label: strength_aria_label(0),
            strength_rating: PasswordCriteria::default().label(),
            caps_warning: false,
            result: None,
            submit_enabled: false,
            focused: Field::Name,
            mask_password,
            next_token: 0,
        }
    }

    // Inputs

    pub fn value(&self, field: Field) -> &str {
        self.inputs[field.index()].value()
    }

    pub fn input(&self, field: Field) -> &TextInput {
        &self.inputs[field.index()]
    }

    pub fn input_mut(&mut self, field: Field) -> &mut TextInput {
        &mut self.inputs[field.index()]
    }

    pub fn focused(&self) -> Field {
        self.focused
    }

    pub fn focus(&mut self, field: Field) {
        self.focused = field;
        self.inputs[field.index()].cursor_end();
    }

    pub fn is_password_masked(&self) -> bool {
        self.mask_password
    }

    pub fn toggle_password_visibility(&mut self) {
        self.mask_password = !self.mask_password;
    }

    /// Empty every input, wiping the old contents
    pub fn reset_inputs(&mut self) {
        for input in &mut self.inputs {
            input.zeroize();
        }
    }

    // Outputs

    /// Show `message` under `field` and take ownership of the slot
    pub fn show_error(&mut self, field: Field, message: &str) -> MessageToken {
        self.next_token += 1;
        let token = MessageToken(self.next_token);
        let slot = &mut self.errors[field.index()];
        slot.text = Some(message.to_string());
        slot.owner = Some(token);
        token
    }

    pub fn hide_error(&mut self, field: Field) {
        let slot = &mut self.errors[field.index()];
        slot.text = None;
        slot.owner = None;
    }

    /// Hide the error only if `token` still owns the slot
    pub fn hide_error_if_owned(&mut self, field: Field, token: MessageToken) -> bool {
        if self.errors[field.index()].owner != Some(token) {
            return false;
        }
        self.hide_error(field);
        true
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors[field.index()].text.as_deref()
    }

    pub fn mark_check(&mut self, field: Field, ok: bool) {
        self.checks[field.index()] = ok;
    }

    pub fn is_checked(&self, field: Field) -> bool {
        self.checks[field.index()]
    }

    /// Fill the strength bar to `percent` and show `rating` beside it
    pub fn set_strength(&mut self, percent: u16, rating: &'static str) {
        let percent = percent.min(100);
        self.strength_percent = percent;
        self.strength_label = strength_aria_label(percent);
        self.strength_rating = rating;
    }

    pub fn strength_percent(&self) -> u16 {
        self.strength_percent
    }

    /// Accessible description of the strength bar
    pub fn strength_label(&self) -> &str {
        &self.strength_label
    }

    pub fn strength_rating(&self) -> &'static str {
        self.strength_rating
    }

    pub fn set_caps_warning(&mut self, visible: bool) {
        self.caps_warning = visible;
    }

    pub fn caps_warning_visible(&self) -> bool {
        self.caps_warning
    }

    pub fn show_result(&mut self, text: &str) {
        self.result = Some(text.to_string());
    }

    pub fn hide_result(&mut self) {
        self.result = None;
    }

    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    pub fn set_submit_enabled(&mut self, enabled: bool) {
        self.submit_enabled = enabled;
    }

    pub fn submit_enabled(&self) -> bool {
        self.submit_enabled
    }
}

fn strength_aria_label(percent: u16) -> String {
    format!("Password strength: {}%", percent)
}
