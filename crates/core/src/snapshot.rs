use crate::types::{Cells, Tile, GRID_SIZE};

/// Tile placed by a spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpawnedTile {
    pub row: usize,
    pub col: usize,
    pub value: Tile,
}

/// Result of one move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveOutcome {
    /// Whether any of the 16 cells differ from before the move
    pub changed: bool,
    /// Sum of the tiles formed by merges in this move
    pub gained: u32,
    /// Tile spawned after the move, only when `changed`
    pub spawned: Option<SpawnedTile>,
}

impl MoveOutcome {
    pub fn unchanged() -> Self {
        Self::default()
    }
}

/// Read-only view of a game, handed to renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridSnapshot {
    pub cells: Cells,
    pub score: u32,
    pub moves: u32,
    pub max_tile: Tile,
    pub empty_cells: u8,
    pub game_over: bool,
}

impl GridSnapshot {
    pub fn clear(&mut self) {
        self.cells = [[0; GRID_SIZE]; GRID_SIZE];
        self.score = 0;
        self.moves = 0;
        self.max_tile = 0;
        self.empty_cells = (GRID_SIZE * GRID_SIZE) as u8;
        self.game_over = false;
    }
}

impl Default for GridSnapshot {
    fn default() -> Self {
        let mut s = Self {
            cells: [[0; GRID_SIZE]; GRID_SIZE],
            score: 0,
            moves: 0,
            max_tile: 0,
            empty_cells: 0,
            game_over: false,
        };
        s.clear();
        s
    }
}
