//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the 2048 rules: the grid, the slide/merge engine,
//! tile spawning, scoring and game-over detection. It has **zero
//! dependencies** on terminal, input, or I/O, making it:
//!
//! - **Deterministic**: Same seed and moves produce identical games
//! - **Testable**: Every rule is reachable without a terminal
//! - **Allocation-free**: Boards are `Copy` arrays; empty-cell scans use `ArrayVec`
//!
//! # Module Structure
//!
//! - [`line`]: compress / merge / slide of a single row toward index 0
//! - [`board`]: 4x4 board, transpose/reverse transforms, pure `slide`
//! - [`game`]: the engine (`Game`) owning board, score and RNG
//! - [`rng`]: seedable spawn RNG (2 at 90%, 4 at 10%)
//! - [`snapshot`]: read-only views and move outcomes
//!
//! # Game Rules
//!
//! - **One slide rule**: every direction reuses the same row primitive via
//!   transposition and reversal
//! - **Single merge**: a tile formed by a merge never merges again in the same move
//! - **Scoring**: each merge adds the value of the new tile
//! - **Spawning**: one tile after every move that changes the grid, none otherwise
//! - **Game over**: the grid is full and no two neighbours are equal
//!
//! # Example
//!
//! ```
//! use tui_2048_core::Game;
//! use tui_2048_types::Direction;
//!
//! let mut game = Game::from_cells(
//!     [[2, 2, 2, 2], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
//!     42,
//! );
//!
//! assert!(game.apply_move(Direction::Left));
//! assert_eq!(&game.grid()[0][..2], &[4, 4]);
//! assert_eq!(game.score(), 8);
//! assert!(!game.is_game_over());
//! ```

pub mod board;
pub mod game;
pub mod line;
pub mod rng;
pub mod snapshot;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Orientation};
pub use game::Game;
pub use line::{compress, merge, slide_row};
pub use rng::TileRng;
pub use snapshot::{GridSnapshot, MoveOutcome, SpawnedTile};
