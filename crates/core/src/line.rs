//! Row primitives - the single slide rule every direction is built on
//!
//! Each function works on one row oriented so that the direction of motion
//! points at index 0. Columns and rightward moves are handled by the board,
//! which transposes and/or reverses the grid before calling into here.

use crate::types::{Row, GRID_SIZE};

/// Pack non-zero tiles toward index 0 and zero-fill the remainder.
///
/// Order of the remaining tiles is preserved.
///
/// # Examples
///
/// ```
/// use tui_2048_core::line::compress;
///
/// let mut row = [0, 2, 0, 4];
/// compress(&mut row);
/// assert_eq!(row, [2, 4, 0, 0]);
/// ```
pub fn compress(row: &mut Row) {
    let mut write = 0;
    for read in 0..GRID_SIZE {
        if row[read] != 0 {
            row[write] = row[read];
            write += 1;
        }
    }
    for cell in &mut row[write..] {
        *cell = 0;
    }
}

/// Merge equal adjacent pairs, scanning from index 0.
///
/// A merged pair becomes `(2v, 0)` and the scan resumes after the pair, so a
/// freshly doubled tile is never compared again in the same pass. Returns the
/// sum of the newly formed tiles, which is the score gained.
///
/// # Examples
///
/// ```
/// use tui_2048_core::line::merge;
///
/// let mut row = [2, 2, 2, 2];
/// assert_eq!(merge(&mut row), 8);
/// assert_eq!(row, [4, 0, 4, 0]);
/// ```
pub fn merge(row: &mut Row) -> u32 {
    let mut gained = 0;
    let mut i = 0;
    while i + 1 < GRID_SIZE {
        if row[i] != 0 && row[i] == row[i + 1] {
            row[i] *= 2;
            row[i + 1] = 0;
            gained += row[i];
            i += 2;
        } else {
            i += 1;
        }
    }
    gained
}

/// Compress, merge, compress: one full move of a single row toward index 0.
///
/// Returns the score gained by the row.
pub fn slide_row(row: &mut Row) -> u32 {
    compress(row);
    let gained = merge(row);
    compress(row);
    gained
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slid(mut row: Row) -> (Row, u32) {
        let gained = slide_row(&mut row);
        (row, gained)
    }

    #[test]
    fn compress_packs_toward_front() {
        let mut row = [0, 0, 0, 8];
        compress(&mut row);
        assert_eq!(row, [8, 0, 0, 0]);

        let mut row = [4, 0, 2, 0];
        compress(&mut row);
        assert_eq!(row, [4, 2, 0, 0]);
    }

    #[test]
    fn compress_is_idempotent_on_packed_rows() {
        for packed in [[2, 4, 8, 16], [2, 4, 0, 0], [0, 0, 0, 0], [32, 0, 0, 0]] {
            let mut row = packed;
            compress(&mut row);
            assert_eq!(row, packed);
        }
    }

    #[test]
    fn merge_single_pair_adds_doubled_value() {
        let mut row = [8, 8, 0, 0];
        assert_eq!(merge(&mut row), 16);
        assert_eq!(row, [16, 0, 0, 0]);
    }

    #[test]
    fn merge_ignores_zero_pairs() {
        let mut row = [0, 0, 0, 0];
        assert_eq!(merge(&mut row), 0);
        assert_eq!(row, [0, 0, 0, 0]);
    }

    #[test]
    fn merge_does_not_rescan_new_tile() {
        // 4 produced from the first pair must not merge with the following 4.
        let mut row = [2, 2, 4, 0];
        assert_eq!(merge(&mut row), 4);
        assert_eq!(row, [4, 0, 4, 0]);
    }

    #[test]
    fn slide_row_four_equal_tiles_merges_pairwise() {
        assert_eq!(slid([2, 2, 2, 2]), ([4, 4, 0, 0], 8));
    }

    #[test]
    fn slide_row_three_equal_tiles_merges_front_pair() {
        assert_eq!(slid([2, 2, 2, 0]), ([4, 2, 0, 0], 4));
        assert_eq!(slid([0, 2, 2, 2]), ([4, 2, 0, 0], 4));
    }

    #[test]
    fn slide_row_merges_across_gaps() {
        assert_eq!(slid([2, 0, 0, 2]), ([4, 0, 0, 0], 4));
        assert_eq!(slid([4, 0, 4, 8]), ([8, 8, 0, 0], 8));
    }

    #[test]
    fn slide_row_without_pairs_only_compresses() {
        assert_eq!(slid([0, 2, 0, 4]), ([2, 4, 0, 0], 0));
        assert_eq!(slid([2, 4, 8, 16]), ([2, 4, 8, 16], 0));
    }

    #[test]
    fn slide_row_two_distinct_pairs() {
        assert_eq!(slid([4, 4, 8, 8]), ([8, 16, 0, 0], 24));
    }
}
