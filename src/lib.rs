//! TUI 2048 (workspace facade crate).
//!
//! Re-exports the member crates as `tui_2048::{core,input,term,types}` and
//! hosts the pieces that tie them together: configuration, logging and the
//! game session loop.

pub use tui_2048_core as core;
pub use tui_2048_input as input;
pub use tui_2048_term as term;
pub use tui_2048_types as types;

pub mod config;
pub mod logging;
pub mod session;

pub use config::{ConfigError, GameConfig};
pub use session::{Session, SessionEnd};
