//! Plain-text board rendering for line-buffered terminals.

use crate::core::GridSnapshot;
use crate::help::controls_line;
use crate::input::KeyBindings;
use crate::types::{DEFAULT_CELL_WIDTH, GRID_SIZE};

/// Renders a snapshot as lines of text: header, separators and padded cells.
#[derive(Debug, Clone)]
pub struct TextRenderer {
    cell_width: usize,
    bindings: KeyBindings,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_CELL_WIDTH, KeyBindings::default())
    }
}

impl TextRenderer {
    pub fn new(cell_width: u16, bindings: KeyBindings) -> Self {
        Self {
            cell_width: cell_width.max(1) as usize,
            bindings,
        }
    }

    pub fn render(&self, snap: &GridSnapshot) -> Vec<String> {
        let mut lines = Vec::with_capacity(4 + 2 * GRID_SIZE);
        lines.push(format!(
            "2048  |  Score: {}  |  Moves: {}",
            snap.score, snap.moves
        ));
        lines.push(format!("Controls: {}", controls_line(&self.bindings)));

        let width = self.width_for(snap);
        let separator = separator(width);
        lines.push(separator.clone());
        for row in &snap.cells {
            let mut line = String::from("|");
            for &v in row {
                let text = if v == 0 { ".".to_string() } else { v.to_string() };
                line.push_str(&format!("{text:^width$}|"));
            }
            lines.push(line);
            lines.push(separator.clone());
        }

        if snap.game_over {
            lines.push(format!("GAME OVER  Final score: {}", snap.score));
        }
        lines
    }

    /// Configured width, grown so the largest tile still fits.
    fn width_for(&self, snap: &GridSnapshot) -> usize {
        let largest = snap.cells.iter().flatten().copied().max().unwrap_or(0);
        self.cell_width.max(largest.to_string().len())
    }
}

fn separator(width: usize) -> String {
    let mut s = String::from("+");
    for _ in 0..GRID_SIZE {
        s.push_str(&"-".repeat(width));
        s.push('+');
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap(cells: [[u32; 4]; 4]) -> GridSnapshot {
        GridSnapshot {
            cells,
            score: 12,
            moves: 3,
            ..GridSnapshot::default()
        }
    }

    #[test]
    fn renders_header_and_grid() {
        let r = TextRenderer::default();
        let lines = r.render(&snap([[2, 0, 0, 0], [0, 4, 0, 0], [0, 0, 128, 0], [0, 0, 0, 2048]]));
        assert_eq!(lines[0], "2048  |  Score: 12  |  Moves: 3");
        assert_eq!(lines[1], "Controls: w/a/s/d move  h help  q quit");
        assert_eq!(lines[2], "+----+----+----+----+");
        assert_eq!(lines[3], "| 2  | .  | .  | .  |");
        assert_eq!(lines[5], "| .  | 4  | .  | .  |");
        assert_eq!(lines[7], "| .  | .  |128 | .  |");
        assert_eq!(lines[9], "| .  | .  | .  |2048|");
        assert_eq!(lines.len(), 11);
    }

    #[test]
    fn game_over_line_is_appended() {
        let r = TextRenderer::default();
        let mut s = snap([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
        s.game_over = true;
        let lines = r.render(&s);
        assert_eq!(lines.last().unwrap(), "GAME OVER  Final score: 12");
    }

    #[test]
    fn large_tiles_widen_every_cell() {
        let r = TextRenderer::default();
        let lines = r.render(&snap([[16384, 2, 0, 0], [0; 4], [0; 4], [0; 4]]));
        assert_eq!(lines[2], "+-----+-----+-----+-----+");
        assert_eq!(lines[3], "|16384|  2  |  .  |  .  |");
        assert_eq!(lines[5], "|  .  |  .  |  .  |  .  |");
        let widths: Vec<usize> = lines[2..11].iter().map(|l| l.len()).collect();
        assert!(widths.iter().all(|&w| w == widths[0]), "{widths:?}");
    }

    #[test]
    fn wide_cells_pad_values() {
        let r = TextRenderer::new(6, KeyBindings::default());
        let lines = r.render(&snap([[16, 0, 0, 0], [0; 4], [0; 4], [0; 4]]));
        assert_eq!(lines[2], "+------+------+------+------+");
        assert_eq!(lines[3], "|  16  |  .   |  .   |  .   |");
    }
}
