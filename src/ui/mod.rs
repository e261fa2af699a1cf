//! UI Module
//!
//! Terminal user interface using ratatui.

pub mod components;
pub mod renderer;
pub mod terminal;

// Re-exports
pub use renderer::Renderer;
pub use terminal::setup_terminal;
