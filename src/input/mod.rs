//! Input Module
//!
//! Maps terminal key events onto form actions.

pub mod keymap;

// Re-exports
pub use keymap::{form_action, Action};
