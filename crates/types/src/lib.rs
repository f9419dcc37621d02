//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no external dependencies, so the engine,
//! input layer and renderers can share them freely.
//!
//! # Grid
//!
//! - **Size**: 4x4 cells (indexed `[row][col]`, row 0 at the top)
//! - **Empty cell**: `0`
//! - **Tile**: a power of two (2, 4, 8, ...)
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_INITIAL_TILES` | 2 | Tiles spawned when a game starts |
//! | `DEFAULT_MOVE_DELAY_MS` | 200 | Pause after a move before reading input again |
//! | `DEFAULT_POLL_INTERVAL_MS` | 20 | Input poll timeout in the terminal loop |
//! | `DEFAULT_CELL_WIDTH` | 4 | Columns used to print one tile |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Command, Direction, GRID_SIZE};
//!
//! let dir = Direction::from_str("up").unwrap();
//! assert_eq!(dir, Direction::Up);
//! assert_eq!(dir.opposite(), Direction::Down);
//!
//! let cmd = Command::Move(Direction::Left);
//! assert_eq!(cmd.direction(), Some(Direction::Left));
//!
//! assert_eq!(GRID_SIZE, 4);
//! ```

/// Grid side length (4 rows, 4 columns)
pub const GRID_SIZE: usize = 4;

/// Number of cells on the grid
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Value of a spawned tile in the common case
pub const SPAWN_LOW: Tile = 2;

/// Value of a spawned tile in the rare case
pub const SPAWN_HIGH: Tile = 4;

/// Chance out of [`SPAWN_ODDS_DENOM`] that a spawned tile is [`SPAWN_HIGH`] (1 in 10)
pub const SPAWN_HIGH_ODDS: u32 = 1;

/// Denominator for [`SPAWN_HIGH_ODDS`]
pub const SPAWN_ODDS_DENOM: u32 = 10;

/// Tiles spawned when a new game starts
pub const DEFAULT_INITIAL_TILES: u8 = 2;

/// Pause after an accepted move, in milliseconds
pub const DEFAULT_MOVE_DELAY_MS: u64 = 200;

/// Terminal input poll timeout, in milliseconds
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 20;

/// Display width of one tile, in terminal columns
pub const DEFAULT_CELL_WIDTH: u16 = 4;

/// A single grid cell value (`0` means empty)
pub type Tile = u32;

/// One row (or transposed column) of the grid
pub type Row = [Tile; GRID_SIZE];

/// The full 4x4 grid, indexed `[row][col]`
pub type Cells = [Row; GRID_SIZE];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_constants() {
        assert_eq!(GRID_SIZE, 4);
        assert_eq!(CELL_COUNT, 16);
        assert_eq!(SPAWN_LOW, 2);
        assert_eq!(SPAWN_HIGH, 4);
        assert_eq!(SPAWN_HIGH_ODDS, 1);
        assert_eq!(SPAWN_ODDS_DENOM, 10);
        assert_eq!(DEFAULT_INITIAL_TILES, 2);
        assert_eq!(DEFAULT_MOVE_DELAY_MS, 200);
        assert_eq!(DEFAULT_CELL_WIDTH, 4);
    }

    #[test]
    fn direction_round_trips_through_str() {
        for dir in Direction::ALL {
            assert_eq!(Direction::from_str(dir.as_str()), Some(dir));
        }
        assert_eq!(Direction::from_str("LEFT"), Some(Direction::Left));
        assert_eq!(Direction::from_str("sideways"), None);
    }

    #[test]
    fn opposite_is_an_involution() {
        for dir in Direction::ALL {
            assert_ne!(dir.opposite(), dir);
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn status_is_terminal_except_playing() {
        assert!(!GameStatus::Playing.is_terminal());
        assert!(GameStatus::GameOver.is_terminal());
        assert!(GameStatus::Quit.is_terminal());
    }
}

/// The four move directions
///
/// A closed set: raw key input is mapped onto this enum before it ever
/// reaches the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in a fixed order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Parse direction from string (case-insensitive)
    ///
    /// Accepts full names or single letters: "up" | "u", "down" | "d",
    /// "left" | "l", "right" | "r".
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("Right"), Some(Direction::Right));
    /// assert_eq!(Direction::from_str("u"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("north"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Commands produced by an input source
///
/// "No command this poll" is expressed as `Option::<Command>::None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Slide the grid in a direction
    Move(Direction),
    /// Show the help screen
    Help,
    /// End the session
    Quit,
}

impl Command {
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Command::Move(dir) => Some(*dir),
            _ => None,
        }
    }
}

/// Session-level game state
///
/// `Playing` moves to `GameOver` once no move can change the grid, or to
/// `Quit` on a quit command. Both are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameStatus {
    #[default]
    Playing,
    GameOver,
    Quit,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::Playing)
    }
}
