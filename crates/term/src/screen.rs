//! Screens: where the session loop sends what the player should see.

use std::io::Write;

use anyhow::Result;

use crate::core::GridSnapshot;
use crate::fb::FrameBuffer;
use crate::game_view::{GameView, Viewport};
use crate::help::help_lines;
use crate::input::KeyBindings;
use crate::renderer::TerminalRenderer;
use crate::text::TextRenderer;

/// Output side of a game session.
pub trait Screen {
    fn show_board(&mut self, snap: &GridSnapshot) -> Result<()>;
    fn show_help(&mut self) -> Result<()>;
    /// A one-off informational message.
    fn notice(&mut self, message: &str) -> Result<()>;
}

/// Full-screen board drawn through crossterm.
pub struct TerminalScreen {
    renderer: TerminalRenderer,
    view: GameView,
    bindings: KeyBindings,
    fb: FrameBuffer,
    status: Option<String>,
    last_snapshot: Option<GridSnapshot>,
}

impl TerminalScreen {
    /// Take over the terminal. Fails when raw mode is unavailable.
    pub fn enter(cell_width: u16, bindings: KeyBindings) -> Result<Self> {
        let mut renderer = TerminalRenderer::new();
        renderer.enter()?;
        Ok(Self {
            renderer,
            view: GameView::new(cell_width, bindings),
            bindings,
            fb: FrameBuffer::new(0, 0),
            status: None,
            last_snapshot: None,
        })
    }

    pub fn key_release_events(&self) -> bool {
        self.renderer.key_release_events()
    }

    /// Give the terminal back.
    pub fn leave(mut self) -> Result<()> {
        self.renderer.exit()
    }

    fn viewport() -> Viewport {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        Viewport::new(w, h)
    }
}

impl Screen for TerminalScreen {
    fn show_board(&mut self, snap: &GridSnapshot) -> Result<()> {
        self.view
            .render_into(snap, self.status.as_deref(), Self::viewport(), &mut self.fb);
        self.last_snapshot = Some(*snap);
        self.renderer.draw(&self.fb)
    }

    fn show_help(&mut self) -> Result<()> {
        let lines = help_lines(&self.bindings);
        self.view.render_lines_into(&lines, Self::viewport(), &mut self.fb);
        self.renderer.draw(&self.fb)
    }

    fn notice(&mut self, message: &str) -> Result<()> {
        self.status = Some(message.to_string());
        match self.last_snapshot {
            Some(snap) => self.show_board(&snap),
            None => Ok(()),
        }
    }
}

/// Line-oriented output for terminals without raw mode.
pub struct TextScreen<W> {
    out: W,
    renderer: TextRenderer,
    bindings: KeyBindings,
}

impl<W: Write> TextScreen<W> {
    pub fn new(out: W, cell_width: u16, bindings: KeyBindings) -> Self {
        Self {
            out,
            renderer: TextRenderer::new(cell_width, bindings),
            bindings,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_lines(&mut self, lines: &[String]) -> Result<()> {
        for line in lines {
            writeln!(self.out, "{line}")?;
        }
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> Screen for TextScreen<W> {
    fn show_board(&mut self, snap: &GridSnapshot) -> Result<()> {
        let mut lines = self.renderer.render(snap);
        if !snap.game_over {
            lines.push("Type a command and press Enter:".to_string());
        }
        lines.insert(0, String::new());
        self.write_lines(&lines)
    }

    fn show_help(&mut self) -> Result<()> {
        let mut lines = help_lines(&self.bindings);
        lines.insert(0, String::new());
        lines.push("Words work too: up, down, left, right, help, quit.".to_string());
        self.write_lines(&lines)
    }

    fn notice(&mut self, message: &str) -> Result<()> {
        self.write_lines(&[format!("note: {message}")])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_screen() -> TextScreen<Vec<u8>> {
        TextScreen::new(Vec::new(), 4, KeyBindings::default())
    }

    fn output(screen: TextScreen<Vec<u8>>) -> String {
        String::from_utf8(screen.into_inner()).unwrap()
    }

    #[test]
    fn text_screen_prints_board_and_prompt() {
        let mut screen = text_screen();
        let snap = GridSnapshot {
            score: 8,
            ..GridSnapshot::default()
        };
        screen.show_board(&snap).unwrap();
        let out = output(screen);
        assert!(out.contains("Score: 8"));
        assert!(out.contains("+----+----+----+----+"));
        assert!(out.contains("press Enter"));
    }

    #[test]
    fn text_screen_game_over_has_no_prompt() {
        let mut screen = text_screen();
        let snap = GridSnapshot {
            game_over: true,
            ..GridSnapshot::default()
        };
        screen.show_board(&snap).unwrap();
        let out = output(screen);
        assert!(out.contains("GAME OVER"));
        assert!(!out.contains("press Enter"));
    }

    #[test]
    fn text_screen_help_and_notice() {
        let mut screen = text_screen();
        screen.show_help().unwrap();
        screen.notice("line mode").unwrap();
        let out = output(screen);
        assert!(out.contains("HOW TO PLAY"));
        assert!(out.contains("note: line mode"));
    }
}
