//! Form Events
//!
//! Typed versions of the events a field can receive.

use crate::validate::Field;

/// A key press as seen by a field before it is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyPress {
    /// Character the key would insert, if any
    pub ch: Option<char>,
    /// Caps-lock state reported by the terminal at this instant
    pub caps_lock: bool,
}

#[cfg(test)]
impl KeyPress {
    pub fn char(ch: char) -> Self {
        Self { ch: Some(ch), caps_lock: false }
    }

    pub fn other() -> Self {
        Self::default()
    }

    pub fn with_caps_lock(mut self, on: bool) -> Self {
        self.caps_lock = on;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    /// Fired before a key is applied to the focused field
    KeyDown { field: Field, key: KeyPress },
    /// Fired after the field's value changed
    Input(Field),
    /// Fired when the field loses focus
    Blur(Field),
    Submit,
}

/// Whether the host should go on to apply the event's default effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultAction {
    Allow,
    Prevent,
}

impl DefaultAction {
    pub fn is_prevented(&self) -> bool {
        *self == Self::Prevent
    }
}
