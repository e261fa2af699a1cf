//! UI Components
//!
//! Widgets for the sign-up form.

pub mod form;
pub mod statusline;
pub mod strength;

// Re-exports
pub use form::FormWidget;
pub use statusline::HelpBar;
