//! Game session: the loop between an input source, the engine and a screen.
//!
//! The session is I/O agnostic. The binary hands it a [`TerminalInput`] and
//! a [`TerminalScreen`] for full-screen play, or a [`LineInput`] and a
//! [`TextScreen`] for line mode. When terminal input fails the loop returns
//! [`SessionEnd::InputLost`] and the same session can be resumed with a
//! different pair.
//!
//! [`TerminalInput`]: crate::input::TerminalInput
//! [`TerminalScreen`]: crate::term::TerminalScreen
//! [`LineInput`]: crate::input::LineInput
//! [`TextScreen`]: crate::term::TextScreen

use std::thread;
use std::time::Duration;

use anyhow::Result;

use crate::config::GameConfig;
use crate::core::{Game, TileRng};
use crate::input::{InputError, InputSource};
use crate::term::Screen;
use crate::types::{Command, Direction, GameStatus};

/// Why [`Session::run`] returned.
#[derive(Debug)]
pub enum SessionEnd {
    GameOver,
    Quit,
    /// The input source failed; the game is still playable.
    InputLost(InputError),
}

pub struct Session {
    game: Game,
    status: GameStatus,
    move_delay: Duration,
    showing_help: bool,
}

impl Session {
    pub fn new(game: Game, move_delay: Duration) -> Self {
        Self {
            game,
            status: GameStatus::Playing,
            move_delay,
            showing_help: false,
        }
    }

    /// Fresh game from config: seeded when a seed is set, entropy otherwise.
    pub fn from_config(config: &GameConfig) -> Self {
        let game = match config.seed {
            Some(seed) => Game::with_seed(seed, config.initial_tiles),
            None => Game::with_rng(TileRng::from_entropy(), config.initial_tiles),
        };
        Self::new(game, config.move_delay())
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Pause after each move that changed the board.
    pub fn set_move_delay(&mut self, delay: Duration) {
        self.move_delay = delay;
    }

    /// Draw the board, then play until game over, quit or lost input.
    pub fn run(
        &mut self,
        input: &mut dyn InputSource,
        screen: &mut dyn Screen,
    ) -> Result<SessionEnd> {
        if let Some(end) = self.finished() {
            return Ok(end);
        }
        self.showing_help = false;
        screen.show_board(&self.game.snapshot())?;
        if self.game.is_game_over() {
            self.status = GameStatus::GameOver;
            return Ok(SessionEnd::GameOver);
        }

        loop {
            let command = match input.next_command() {
                Ok(Some(command)) => command,
                Ok(None) => {
                    if let Some(text) = input.rejected_input() {
                        let message = rejection_notice(text);
                        screen.notice(&message)?;
                    }
                    continue;
                }
                Err(err) => {
                    tracing::warn!(error = %err, "input source failed");
                    return Ok(SessionEnd::InputLost(err));
                }
            };
            if let Some(end) = self.handle(command, screen)? {
                return Ok(end);
            }
        }
    }

    /// Apply one command. Returns `Some` when the session is over.
    ///
    /// Once the game is over or quit, every command is ignored and the
    /// grid never changes again.
    pub fn handle(&mut self, command: Command, screen: &mut dyn Screen) -> Result<Option<SessionEnd>> {
        if let Some(end) = self.finished() {
            return Ok(Some(end));
        }
        match command {
            Command::Quit => {
                self.status = GameStatus::Quit;
                tracing::info!(score = self.game.score(), moves = self.game.moves(), "player quit");
                Ok(Some(SessionEnd::Quit))
            }
            Command::Help => {
                self.showing_help = true;
                screen.show_help()?;
                Ok(None)
            }
            Command::Move(direction) => self.play(direction, screen),
        }
    }

    fn finished(&self) -> Option<SessionEnd> {
        match self.status {
            GameStatus::Playing => None,
            GameStatus::GameOver => Some(SessionEnd::GameOver),
            GameStatus::Quit => Some(SessionEnd::Quit),
        }
    }

    fn play(&mut self, direction: Direction, screen: &mut dyn Screen) -> Result<Option<SessionEnd>> {
        let outcome = self.game.step(direction);
        let leaving_help = std::mem::take(&mut self.showing_help);

        if outcome.changed {
            tracing::debug!(
                direction = direction.as_str(),
                gained = outcome.gained,
                score = self.game.score(),
                spawned = ?outcome.spawned,
                "move applied"
            );
        } else {
            tracing::trace!(direction = direction.as_str(), "move left the board unchanged");
        }

        if outcome.changed || leaving_help {
            screen.show_board(&self.game.snapshot())?;
        }

        if self.game.is_game_over() {
            self.status = GameStatus::GameOver;
            tracing::info!(
                score = self.game.score(),
                max_tile = self.game.max_tile(),
                moves = self.game.moves(),
                "game over"
            );
            return Ok(Some(SessionEnd::GameOver));
        }

        if outcome.changed && !self.move_delay.is_zero() {
            thread::sleep(self.move_delay);
        }
        Ok(None)
    }
}

fn rejection_notice(text: &str) -> String {
    if text.is_empty() {
        "no command entered; type help for the controls".to_string()
    } else {
        format!("unknown command {text:?}; type help for the controls")
    }
}
