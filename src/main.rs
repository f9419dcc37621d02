//! Terminal 2048 runner (default binary).
//!
//! Full-screen play uses crossterm for input and the framebuffer renderer.
//! Without a terminal (piped stdin, `--line-mode`, or raw mode failing) the
//! same game runs line by line: type a command, press Enter.

use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use tui_2048::config::GameConfig;
use tui_2048::input::{LineInput, TerminalInput};
use tui_2048::logging;
use tui_2048::session::{Session, SessionEnd};
use tui_2048::term::{Screen, TerminalScreen, TextScreen};

#[derive(Parser, Debug)]
#[command(name = "tui-2048", version, about = "Play 2048 in the terminal")]
struct Cli {
    /// RNG seed for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// TOML config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Tiles placed before the first move
    #[arg(long, value_name = "N")]
    initial_tiles: Option<u8>,

    /// Pause after each accepted move, in milliseconds
    #[arg(long, value_name = "MS")]
    move_delay_ms: Option<u64>,

    /// Read Enter-confirmed commands instead of single keypresses
    #[arg(long)]
    line_mode: bool,

    /// Directory for the log file
    #[arg(long, value_name = "PATH")]
    log_dir: Option<PathBuf>,
}

impl Cli {
    /// Defaults, then the config file, then the environment, then flags.
    fn resolve_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };
        config.apply_env()?;

        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(n) = self.initial_tiles {
            config.initial_tiles = n;
        }
        if let Some(ms) = self.move_delay_ms {
            config.move_delay_ms = ms;
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve_config().context("loading configuration")?;

    let log_dir = logging::log_directory(cli.log_dir.as_deref());
    let _log_guard = match logging::setup_logging(&log_dir) {
        Ok(guard) => Some(guard),
        Err(err) => {
            eprintln!("warning: logging disabled: {err:#}");
            None
        }
    };
    tracing::info!(?config, line_mode = cli.line_mode, "starting tui-2048");

    let mut session = Session::from_config(&config);
    let terminal = io::stdin().is_terminal() && io::stdout().is_terminal();
    let end = if cli.line_mode || !terminal {
        play_lines(&mut session, &config, None)?
    } else {
        play_terminal(&mut session, &config)?
    };

    let game = session.game();
    let outcome = match end {
        SessionEnd::GameOver => "Game over",
        SessionEnd::Quit => "Quit",
        SessionEnd::InputLost(_) => "Input lost",
    };
    println!(
        "{outcome}. Score: {}  Max tile: {}  Moves: {}",
        game.score(),
        game.max_tile(),
        game.moves()
    );
    tracing::info!(score = game.score(), moves = game.moves(), "exiting");
    Ok(())
}

fn play_terminal(session: &mut Session, config: &GameConfig) -> Result<SessionEnd> {
    let mut screen = match TerminalScreen::enter(config.cell_width, config.keys) {
        Ok(screen) => screen,
        Err(err) => {
            tracing::warn!(error = %err, "full-screen mode unavailable");
            let notice = format!("full-screen mode unavailable ({err}); using line mode");
            return play_lines(session, config, Some(notice));
        }
    };
    if !screen.key_release_events() {
        tracing::debug!("terminal does not report key releases; held keys re-arm on timeout");
    }

    let mut input = TerminalInput::new(config.keys, config.poll_interval());
    // On error the screen is dropped, which restores the terminal.
    let end = session.run(&mut input, &mut screen)?;

    match end {
        SessionEnd::GameOver => {
            wait_for_any_key(config.move_delay())?;
            screen.leave()?;
            Ok(SessionEnd::GameOver)
        }
        SessionEnd::InputLost(err) => {
            screen.leave()?;
            let notice = format!("lost keyboard input ({err}); continuing in line mode");
            play_lines(session, config, Some(notice))
        }
        SessionEnd::Quit => {
            screen.leave()?;
            Ok(SessionEnd::Quit)
        }
    }
}

fn play_lines(
    session: &mut Session,
    config: &GameConfig,
    notice: Option<String>,
) -> Result<SessionEnd> {
    session.set_move_delay(Duration::ZERO);

    let mut screen = TextScreen::new(io::stdout().lock(), config.cell_width, config.keys);
    if let Some(message) = notice {
        screen.notice(&message)?;
    }
    let mut input = LineInput::stdin(config.keys);

    match session.run(&mut input, &mut screen)? {
        SessionEnd::InputLost(err) => Err(err).context("reading commands from stdin"),
        end => Ok(end),
    }
}

/// Keep the final board up until the player presses something.
fn wait_for_any_key(settle: Duration) -> Result<()> {
    // Drop keys still buffered from the final move.
    std::thread::sleep(settle);
    while event::poll(Duration::ZERO)? {
        event::read()?;
    }
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "tui-2048",
            "--seed",
            "5",
            "--initial-tiles",
            "4",
            "--move-delay-ms",
            "0",
        ])
        .unwrap();
        let config = cli.resolve_config().unwrap();
        assert_eq!(config.seed, Some(5));
        assert_eq!(config.initial_tiles, 4);
        assert_eq!(config.move_delay_ms, 0);
    }

    #[test]
    fn invalid_flag_value_is_rejected() {
        let cli = Cli::try_parse_from(["tui-2048", "--initial-tiles", "0"]).unwrap();
        assert!(cli.resolve_config().is_err());
    }
}
