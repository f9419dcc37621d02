//! Terminal input module (engine-facing).
//!
//! This module is independent of any rendering. It maps `crossterm` key
//! events and typed lines onto [`crate::types::Command`], debounces held
//! keys, and exposes both behind a single [`InputSource`] trait so the
//! session loop never depends on platform input mechanics.

pub mod bindings;
pub mod debounce;
pub mod error;
pub mod map;
pub mod source;

pub use tui_2048_types as types;

pub use bindings::KeyBindings;
pub use debounce::KeyDebouncer;
pub use error::{BindingError, InputError};
pub use map::{map_key_event, should_quit};
pub use source::{InputSource, LineInput, TerminalInput};
