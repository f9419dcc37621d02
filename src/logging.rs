//! Logging setup.
//!
//! The full-screen game owns stdout and stderr, so logs go to a file only.
//! Filtering follows `RUST_LOG`, defaulting to `info`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub const ENV_LOG_DIR: &str = "TUI_2048_LOG_DIR";
pub const LOG_FILE_NAME: &str = "tui-2048.log";

/// Log directory: explicit path, else `TUI_2048_LOG_DIR`, else the temp dir.
pub fn log_directory(explicit: Option<&Path>) -> PathBuf {
    if let Some(dir) = explicit {
        return dir.to_path_buf();
    }
    if let Some(dir) = std::env::var_os(ENV_LOG_DIR) {
        return PathBuf::from(dir);
    }
    std::env::temp_dir().join("tui-2048")
}

/// Install the global subscriber writing to `<log_dir>/tui-2048.log`.
///
/// Keep the returned guard alive for the life of the program; dropping it
/// flushes and stops the background writer.
pub fn setup_logging(log_dir: &Path) -> Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("creating log directory {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("installing tracing subscriber")?;

    tracing::info!("Logging initialized");
    tracing::info!("Log file: {}", log_dir.join(LOG_FILE_NAME).display());

    Ok(guard)
}
