//! GameView: maps a `core::GridSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GridSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::help::controls_line;
use crate::input::KeyBindings;
use crate::types::{Tile, DEFAULT_CELL_WIDTH, GRID_SIZE};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

// Rows above the board: title/score, controls, blank.
const HEADER_ROWS: u16 = 3;
// Rows below the board: blank, status line.
const FOOTER_ROWS: u16 = 2;

const PANEL_BG: Rgb = Rgb::new(30, 30, 40);
const BORDER: CellStyle = CellStyle::new(Rgb::new(150, 140, 130), Rgb::new(0, 0, 0));
const LABEL: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
const VALUE: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

/// A lightweight terminal view of the 2048 board.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Tile width in terminal columns.
    cell_w: u16,
    anchor_y: AnchorY,
    bindings: KeyBindings,
}

impl Default for GameView {
    fn default() -> Self {
        Self::new(DEFAULT_CELL_WIDTH, KeyBindings::default())
    }
}

impl GameView {
    pub fn new(cell_w: u16, bindings: KeyBindings) -> Self {
        Self {
            cell_w: cell_w.max(1),
            anchor_y: AnchorY::Center,
            bindings,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Board frame size in terminal cells, separators included.
    pub fn board_size(&self) -> (u16, u16) {
        let n = GRID_SIZE as u16;
        (n * self.cell_w + n + 1, 2 * n + 1)
    }

    /// Top-left corner of the board frame inside `viewport`.
    pub fn board_origin(&self, viewport: Viewport) -> (u16, u16) {
        let (board_w, board_h) = self.board_size();
        let total_h = HEADER_ROWS + board_h + FOOTER_ROWS;
        let x = viewport.width.saturating_sub(board_w) / 2;
        let top = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(total_h) / 2,
            AnchorY::Top => 0,
        };
        (x, top + HEADER_ROWS)
    }

    /// This view with the tile width grown so the largest tile in `snap` fits.
    pub fn fitted_to(&self, snap: &GridSnapshot) -> GameView {
        let largest = snap.cells.iter().flatten().copied().max().unwrap_or(0);
        let mut digits = [0u8; 10];
        let needed = format_tile(largest, &mut digits).len() as u16;
        GameView {
            cell_w: self.cell_w.max(needed),
            ..self.clone()
        }
    }

    /// Render the board screen into an existing framebuffer.
    ///
    /// `status` is an optional line shown under the board when the game is
    /// still running. Tiles wider than the configured width widen every
    /// cell rather than spill over the grid lines.
    pub fn render_into(
        &self,
        snap: &GridSnapshot,
        status: Option<&str>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        self.fitted_to(snap).draw_board(snap, status, viewport, fb);
    }

    fn draw_board(
        &self,
        snap: &GridSnapshot,
        status: Option<&str>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (start_x, board_y) = self.board_origin(viewport);
        let (_, board_h) = self.board_size();

        self.draw_header(fb, snap, start_x, board_y.saturating_sub(HEADER_ROWS));
        self.draw_grid_lines(fb, start_x, board_y);

        for (r, row) in snap.cells.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                self.draw_tile(fb, start_x, board_y, r as u16, c as u16, v);
            }
        }

        let status_y = board_y.saturating_add(board_h).saturating_add(1);
        if snap.game_over {
            let over = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(140, 30, 30)).bold();
            let x = fb.put_str(start_x, status_y, " GAME OVER ", over);
            fb.put_str(x, status_y, " press any key to exit", VALUE);
        } else if let Some(text) = status {
            fb.put_str(start_x, status_y, text, VALUE.dim());
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GridSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, None, viewport, &mut fb);
        fb
    }

    /// Render a block of text lines (the help screen), centered.
    pub fn render_lines_into(&self, lines: &[String], viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let block_w = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) as u16;
        let block_h = lines.len() as u16;
        let x = viewport.width.saturating_sub(block_w) / 2;
        let y0 = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(block_h) / 2,
            AnchorY::Top => 0,
        };
        for (i, line) in lines.iter().enumerate() {
            let style = if line.chars().all(|c| c.is_ascii_uppercase() || c == ' ') && !line.is_empty()
            {
                LABEL
            } else {
                VALUE
            };
            fb.put_str(x, y0.saturating_add(i as u16), line, style);
        }
    }

    fn draw_header(&self, fb: &mut FrameBuffer, snap: &GridSnapshot, x: u16, y: u16) {
        let title = CellStyle::new(Rgb::new(237, 194, 46), Rgb::new(0, 0, 0)).bold();
        let mut cx = fb.put_str(x, y, "2048", title);
        cx = fb.put_str(cx.saturating_add(2), y, "SCORE ", LABEL);
        cx = fb.put_u32(cx, y, snap.score, VALUE);
        cx = fb.put_str(cx.saturating_add(2), y, "MOVES ", LABEL);
        fb.put_u32(cx, y, snap.moves, VALUE);

        fb.put_str(x, y.saturating_add(1), &controls_line(&self.bindings), VALUE.dim());
    }

    fn draw_grid_lines(&self, fb: &mut FrameBuffer, x: u16, y: u16) {
        let (w, h) = self.board_size();
        let step = self.cell_w + 1;
        for dy in 0..h {
            let py = y.saturating_add(dy);
            if dy % 2 == 1 {
                for col in 0..=GRID_SIZE as u16 {
                    fb.put_char(x.saturating_add(col * step), py, '│', BORDER);
                }
                continue;
            }
            let (left, mid, right) = if dy == 0 {
                ('┌', '┬', '┐')
            } else if dy == h - 1 {
                ('└', '┴', '┘')
            } else {
                ('├', '┼', '┤')
            };
            for dx in 0..w {
                let ch = if dx == 0 {
                    left
                } else if dx == w - 1 {
                    right
                } else if dx % step == 0 {
                    mid
                } else {
                    '─'
                };
                fb.put_char(x.saturating_add(dx), py, ch, BORDER);
            }
        }
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, x: u16, y: u16, row: u16, col: u16, value: Tile) {
        let px = x + 1 + col * (self.cell_w + 1);
        let py = y + 1 + row * 2;
        if value == 0 {
            let empty = CellStyle::new(Rgb::new(90, 90, 100), PANEL_BG).dim();
            fb.put_centered(px, py, self.cell_w, "·", empty);
            return;
        }
        let mut digits = [0u8; 10];
        fb.put_centered(px, py, self.cell_w, format_tile(value, &mut digits), tile_style(value));
    }
}

fn format_tile(value: Tile, buf: &mut [u8; 10]) -> &str {
    let mut n = value;
    let mut start = buf.len();
    loop {
        start -= 1;
        buf[start] = b'0' + (n % 10) as u8;
        n /= 10;
        if n == 0 {
            break;
        }
    }
    // Only ASCII digits were written.
    std::str::from_utf8(&buf[start..]).unwrap_or("?")
}

/// Colours per tile value, warming up as tiles grow.
pub fn tile_style(value: Tile) -> CellStyle {
    let dark = Rgb::new(119, 110, 101);
    let light = Rgb::new(249, 246, 242);
    let (fg, bg) = match value {
        2 => (dark, Rgb::new(238, 228, 218)),
        4 => (dark, Rgb::new(237, 224, 200)),
        8 => (light, Rgb::new(242, 177, 121)),
        16 => (light, Rgb::new(245, 149, 99)),
        32 => (light, Rgb::new(246, 124, 95)),
        64 => (light, Rgb::new(246, 94, 59)),
        128 => (light, Rgb::new(237, 207, 114)),
        256 => (light, Rgb::new(237, 204, 97)),
        512 => (light, Rgb::new(237, 200, 80)),
        1024 => (light, Rgb::new(237, 197, 63)),
        2048 => (light, Rgb::new(237, 194, 46)),
        _ => (light, Rgb::new(60, 58, 50)),
    };
    let style = CellStyle::new(fg, bg);
    if value >= 128 {
        style.bold()
    } else {
        style
    }
}
