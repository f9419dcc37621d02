//! Terminal "game renderer" module.
//!
//! A small rendering layer for terminal play. The full-screen path renders
//! into a framebuffer that is diffed and flushed through crossterm; the
//! line-buffered path prints plain text. Both sit behind [`Screen`] so the
//! session loop does not care which one is active.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep views pure (snapshot in, framebuffer or lines out)
//! - Give tiles a fixed display width so the board stays aligned

pub mod fb;
pub mod game_view;
pub mod help;
pub mod renderer;
pub mod screen;
pub mod text;

pub use tui_2048_core as core;
pub use tui_2048_input as input;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{tile_style, AnchorY, GameView, Viewport};
pub use help::{controls_line, help_lines};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use screen::{Screen, TerminalScreen, TextScreen};
pub use text::TextRenderer;
