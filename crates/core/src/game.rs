//! Game module - the grid engine
//!
//! [`Game`] owns the board, the score and the spawn RNG. It is the only
//! place the grid is mutated: through [`Game::apply_move`] (or
//! [`Game::step`]) and [`Game::spawn_tile`]. Callers only ever see copies.
//!
//! A move spawns a tile iff the full grid differs from the grid before the
//! move. Change is detected by comparing boards, not by tracking whether
//! anything slid or merged along the way.

use crate::board::Board;
use crate::rng::TileRng;
use crate::snapshot::{GridSnapshot, MoveOutcome, SpawnedTile};
use crate::types::{Cells, Direction, Tile, DEFAULT_INITIAL_TILES};

/// Complete state of one 2048 game
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    score: u32,
    moves: u32,
    rng: TileRng,
}

impl Game {
    /// New game with an entropy-seeded RNG and the default two starting tiles.
    pub fn new() -> Self {
        Self::with_rng(TileRng::from_entropy(), DEFAULT_INITIAL_TILES)
    }

    /// New deterministic game.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_core::Game;
    ///
    /// let a = Game::with_seed(7, 2);
    /// let b = Game::with_seed(7, 2);
    /// assert_eq!(a.grid(), b.grid());
    /// assert_eq!(a.board().empty_count(), 14);
    /// ```
    pub fn with_seed(seed: u64, initial_tiles: u8) -> Self {
        Self::with_rng(TileRng::new(seed), initial_tiles)
    }

    /// Zero-filled grid, then `initial_tiles` spawns.
    ///
    /// Spawning stops having an effect once the grid is full.
    pub fn with_rng(rng: TileRng, initial_tiles: u8) -> Self {
        let mut game = Self {
            board: Board::new(),
            score: 0,
            moves: 0,
            rng,
        };
        for _ in 0..initial_tiles {
            game.spawn_tile();
        }
        game
    }

    /// Game starting from an explicit position, without initial spawns.
    pub fn from_cells(cells: Cells, seed: u64) -> Self {
        Self {
            board: Board::from_cells(cells),
            score: 0,
            moves: 0,
            rng: TileRng::new(seed),
        }
    }

    /// Place a 2 (90%) or 4 (10%) on a uniformly chosen empty cell.
    ///
    /// Returns `None` and leaves the grid untouched when it is full.
    pub fn spawn_tile(&mut self) -> Option<SpawnedTile> {
        let empty = self.board.empty_cells();
        if empty.is_empty() {
            return None;
        }
        let (row, col) = empty[self.rng.pick_index(empty.len())];
        let value = self.rng.tile_value();
        self.board.set(row, col, value);
        Some(SpawnedTile { row, col, value })
    }

    /// Slide toward `direction`, add merge points to the score, and spawn
    /// one tile if the grid changed.
    pub fn step(&mut self, direction: Direction) -> MoveOutcome {
        let before = self.board;
        let (after, gained) = before.slide(direction);
        self.board = after;
        self.score += gained;

        if self.board == before {
            return MoveOutcome::unchanged();
        }

        self.moves += 1;
        let spawned = self.spawn_tile();
        MoveOutcome {
            changed: true,
            gained,
            spawned,
        }
    }

    /// Apply a move; returns whether the grid changed.
    pub fn apply_move(&mut self, direction: Direction) -> bool {
        self.step(direction).changed
    }

    /// Full grid with no equal horizontal or vertical neighbours.
    pub fn is_game_over(&self) -> bool {
        self.board.is_full() && !self.board.has_adjacent_pair()
    }

    pub fn can_move(&self, direction: Direction) -> bool {
        self.board.can_move(direction)
    }

    /// Copy of the grid, indexed `[row][col]`
    pub fn grid(&self) -> Cells {
        self.board.cells()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Number of moves that changed the grid
    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn max_tile(&self) -> Tile {
        self.board.max_tile()
    }

    pub fn snapshot(&self) -> GridSnapshot {
        let mut snap = GridSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }

    /// Fill an existing snapshot in place.
    pub fn snapshot_into(&self, out: &mut GridSnapshot) {
        out.cells = self.board.cells();
        out.score = self.score;
        out.moves = self.moves;
        out.max_tile = self.board.max_tile();
        out.empty_cells = self.board.empty_count() as u8;
        out.game_over = self.is_game_over();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_game_has_initial_tiles() {
        let g = Game::with_seed(1, 2);
        assert_eq!(g.board().empty_count(), 14);
        assert_eq!(g.score(), 0);
        assert_eq!(g.moves(), 0);
        for &v in g.grid().iter().flatten() {
            assert!(v == 0 || v == 2 || v == 4);
        }
    }

    #[test]
    fn initial_tiles_are_configurable() {
        assert_eq!(Game::with_seed(1, 0).board().empty_count(), 16);
        assert_eq!(Game::with_seed(1, 5).board().empty_count(), 11);
        // More than 16 just fills the board.
        assert_eq!(Game::with_seed(1, 20).board().empty_count(), 0);
    }

    #[test]
    fn spawn_on_full_grid_is_noop() {
        let full = [[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]];
        let mut g = Game::from_cells(full, 9);
        assert_eq!(g.spawn_tile(), None);
        assert_eq!(g.grid(), full);
    }

    #[test]
    fn spawn_fills_only_empty_cell() {
        let mut cells = [[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]];
        cells[2][1] = 0;
        let mut g = Game::from_cells(cells, 5);
        let spawned = g.spawn_tile().unwrap();
        assert_eq!((spawned.row, spawned.col), (2, 1));
        assert!(spawned.value == 2 || spawned.value == 4);
        assert_eq!(g.grid()[2][1], spawned.value);
    }

    #[test]
    fn unchanged_move_does_not_spawn_or_count() {
        let cells = [[2, 4, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]];
        let mut g = Game::from_cells(cells, 1);
        let outcome = g.step(Direction::Left);
        assert_eq!(outcome, MoveOutcome::unchanged());
        assert_eq!(g.grid(), cells);
        assert_eq!(g.moves(), 0);
    }

    #[test]
    fn changed_move_scores_and_spawns_once() {
        let cells = [[2, 2, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]];
        let mut g = Game::from_cells(cells, 1);
        let outcome = g.step(Direction::Left);
        assert!(outcome.changed);
        assert_eq!(outcome.gained, 4);
        assert_eq!(g.score(), 4);
        assert_eq!(g.moves(), 1);
        let spawned = outcome.spawned.unwrap();
        assert_ne!((spawned.row, spawned.col), (0, 0));
        assert_eq!(g.board().empty_count(), 14);
    }

    #[test]
    fn game_over_requires_full_board_without_pairs() {
        let checker = [[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]];
        assert!(Game::from_cells(checker, 0).is_game_over());

        let mut with_gap = checker;
        with_gap[0][0] = 0;
        assert!(!Game::from_cells(with_gap, 0).is_game_over());

        let mut horizontal = checker;
        horizontal[3][3] = 4;
        assert!(!Game::from_cells(horizontal, 0).is_game_over());
    }

    #[test]
    fn snapshot_reflects_state() {
        let cells = [[2, 2, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 128]];
        let mut g = Game::from_cells(cells, 3);
        g.apply_move(Direction::Left);
        let snap = g.snapshot();
        assert_eq!(snap.cells, g.grid());
        assert_eq!(snap.score, 4);
        assert_eq!(snap.moves, 1);
        assert_eq!(snap.max_tile, 128);
        assert_eq!(snap.empty_cells as usize, g.board().empty_count());
        assert!(!snap.game_over);
    }
}
