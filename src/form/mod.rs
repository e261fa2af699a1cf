//! Form Module
//!
//! The sign-up form: host page elements, deferred actions, and the event
//! controller that ties validators to the page.

pub mod controller;
pub mod event;
pub mod page;
pub mod timer;

// Re-exports
pub use controller::{FormController, TransientDelays};
pub use event::{FormEvent, KeyPress};
pub use page::{FormPage, TextInput};
