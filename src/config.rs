//! Game configuration.
//!
//! Layers, lowest priority first: built-in defaults, an optional TOML file,
//! environment variables, then command-line flags (applied by the binary).
//!
//! ```toml
//! initial_tiles = 2
//! move_delay_ms = 200
//! poll_interval_ms = 20
//! cell_width = 4
//! seed = 42
//!
//! [keys]
//! up = "k"
//! down = "j"
//! left = "h"
//! right = "l"
//! help = "?"
//! quit = "q"
//! ```

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::input::{BindingError, KeyBindings};
use crate::types::{
    CELL_COUNT, DEFAULT_CELL_WIDTH, DEFAULT_INITIAL_TILES, DEFAULT_MOVE_DELAY_MS,
    DEFAULT_POLL_INTERVAL_MS,
};

/// Environment variable names.
pub const ENV_INITIAL_TILES: &str = "TUI_2048_INITIAL_TILES";
pub const ENV_MOVE_DELAY_MS: &str = "TUI_2048_MOVE_DELAY_MS";
pub const ENV_SEED: &str = "TUI_2048_SEED";

const MAX_CELL_WIDTH: u16 = 12;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid key bindings: {0}")]
    Keys(#[from] BindingError),

    #[error("initial_tiles must be between 1 and 16, got {0}")]
    InitialTiles(u8),

    #[error("cell_width must be between 1 and 12, got {0}")]
    CellWidth(u16),

    #[error("poll_interval_ms must be non-zero")]
    PollInterval,

    #[error("invalid value for {key}: {value:?}")]
    Env { key: &'static str, value: String },
}

/// Settings consumed by the session loop and the terminal layer.
///
/// The engine itself only sees `initial_tiles` and `seed`; spawn odds are
/// fixed engine behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub keys: KeyBindings,
    pub initial_tiles: u8,
    pub move_delay_ms: u64,
    pub poll_interval_ms: u64,
    pub cell_width: u16,
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            keys: KeyBindings::default(),
            initial_tiles: DEFAULT_INITIAL_TILES,
            move_delay_ms: DEFAULT_MOVE_DELAY_MS,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            cell_width: DEFAULT_CELL_WIDTH,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Parse a TOML document; missing fields keep their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Load and validate a TOML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from the process environment.
    ///
    /// Environment variables:
    /// - `TUI_2048_INITIAL_TILES` - tiles spawned at start
    /// - `TUI_2048_MOVE_DELAY_MS` - pause after each accepted move
    /// - `TUI_2048_SEED` - RNG seed for a reproducible game
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env_from(|key| env::var(key).ok())
    }

    /// [`GameConfig::apply_env`] with an injectable lookup.
    pub fn apply_env_from<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = read_var(&lookup, ENV_INITIAL_TILES)? {
            self.initial_tiles = v;
        }
        if let Some(v) = read_var(&lookup, ENV_MOVE_DELAY_MS)? {
            self.move_delay_ms = v;
        }
        if let Some(v) = read_var(&lookup, ENV_SEED)? {
            self.seed = Some(v);
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.keys.validate()?;
        if self.initial_tiles == 0 || self.initial_tiles as usize > CELL_COUNT {
            return Err(ConfigError::InitialTiles(self.initial_tiles));
        }
        if self.cell_width == 0 || self.cell_width > MAX_CELL_WIDTH {
            return Err(ConfigError::CellWidth(self.cell_width));
        }
        if self.poll_interval_ms == 0 {
            return Err(ConfigError::PollInterval);
        }
        Ok(())
    }

    pub fn move_delay(&self) -> Duration {
        Duration::from_millis(self.move_delay_ms)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

fn read_var<T, F>(lookup: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Env { key, value }),
    }
}
