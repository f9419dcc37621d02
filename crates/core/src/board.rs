//! Board module - the 4x4 grid and its direction transforms
//!
//! The board is a plain `Copy` value. Moves are pure: [`Board::slide`]
//! returns a new board and the score gained, and never spawns. Every
//! direction goes through the same row primitive in [`crate::line`]; an
//! [`Orientation`] describes how to rotate the grid so the direction of
//! motion points at the front of each row, and how to rotate it back.

use arrayvec::ArrayVec;

use crate::line::slide_row;
use crate::types::{Cells, Direction, Tile, CELL_COUNT, GRID_SIZE};

/// Row/column coordinate on the board.
pub type Pos = (usize, usize);

/// How a direction is mapped onto "toward index 0 of each row".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Orientation {
    pub transpose: bool,
    pub reverse: bool,
}

impl Orientation {
    /// Transform table.
    ///
    /// | Direction | transpose | reverse |
    /// |-----------|-----------|---------|
    /// | Left      | no        | no      |
    /// | Right     | no        | yes     |
    /// | Up        | yes       | no      |
    /// | Down      | yes       | yes     |
    pub const fn for_direction(direction: Direction) -> Self {
        match direction {
            Direction::Left => Self {
                transpose: false,
                reverse: false,
            },
            Direction::Right => Self {
                transpose: false,
                reverse: true,
            },
            Direction::Up => Self {
                transpose: true,
                reverse: false,
            },
            Direction::Down => Self {
                transpose: true,
                reverse: true,
            },
        }
    }

    /// Rotate a board into the canonical left-moving frame.
    pub fn enter(&self, board: Board) -> Board {
        let mut b = board;
        if self.transpose {
            b = b.transposed();
        }
        if self.reverse {
            b = b.reversed_rows();
        }
        b
    }

    /// Undo [`Orientation::enter`].
    pub fn leave(&self, board: Board) -> Board {
        let mut b = board;
        if self.reverse {
            b = b.reversed_rows();
        }
        if self.transpose {
            b = b.transposed();
        }
        b
    }
}

/// 4x4 grid of tiles (`0` = empty)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: Cells,
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: Cells) -> Self {
        Self { cells }
    }

    /// Copy of the cells, indexed `[row][col]`
    pub fn cells(&self) -> Cells {
        self.cells
    }

    pub fn rows(&self) -> &Cells {
        &self.cells
    }

    /// Get a cell, `None` when out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Tile> {
        self.cells.get(row)?.get(col).copied()
    }

    /// Set a cell. Returns false when out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: Tile) -> bool {
        match self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(cell) => {
                *cell = value;
                true
            }
            None => false,
        }
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> ArrayVec<Pos, CELL_COUNT> {
        let mut out = ArrayVec::new();
        for (r, row) in self.cells.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                if v == 0 {
                    out.push((r, c));
                }
            }
        }
        out
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&v| v == 0).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|&v| v != 0)
    }

    /// True if any two horizontally or vertically adjacent non-empty cells are equal.
    pub fn has_adjacent_pair(&self) -> bool {
        for r in 0..GRID_SIZE {
            for c in 0..GRID_SIZE {
                let v = self.cells[r][c];
                if v == 0 {
                    continue;
                }
                if c + 1 < GRID_SIZE && self.cells[r][c + 1] == v {
                    return true;
                }
                if r + 1 < GRID_SIZE && self.cells[r + 1][c] == v {
                    return true;
                }
            }
        }
        false
    }

    pub fn max_tile(&self) -> Tile {
        self.cells.iter().flatten().copied().max().unwrap_or(0)
    }

    pub fn sum(&self) -> u64 {
        self.cells.iter().flatten().map(|&v| u64::from(v)).sum()
    }

    /// Swap rows and columns.
    pub fn transposed(&self) -> Board {
        let mut out = [[0; GRID_SIZE]; GRID_SIZE];
        for (r, row) in self.cells.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                out[c][r] = v;
            }
        }
        Board { cells: out }
    }

    /// Reverse the order of cells inside every row.
    pub fn reversed_rows(&self) -> Board {
        let mut out = self.cells;
        for row in &mut out {
            row.reverse();
        }
        Board { cells: out }
    }

    /// Slide and merge every line toward `direction`.
    ///
    /// Pure: returns the resulting board and the score gained. No tile is
    /// spawned.
    pub fn slide(&self, direction: Direction) -> (Board, u32) {
        let orientation = Orientation::for_direction(direction);
        let mut work = orientation.enter(*self);
        let mut gained = 0;
        for row in &mut work.cells {
            gained += slide_row(row);
        }
        (orientation.leave(work), gained)
    }

    /// True if sliding toward `direction` changes the board.
    pub fn can_move(&self, direction: Direction) -> bool {
        self.slide(direction).0 != *self
    }
}
