//! File-based tracing setup.
//!
//! Logs go to a per-session file so they never interleave with the animation
//! on the terminal.
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Installs the global subscriber and returns the guard that flushes the log
/// file. Keep the guard alive until the program exits.
pub fn setup_logging(log_dir: Option<&Path>) -> Result<(WorkerGuard, PathBuf)> {
    let log_dir = log_dir.map(Path::to_path_buf).unwrap_or_else(default_log_dir);

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default();
    let session_dir = log_dir.join(format!("session_{timestamp}"));
    std::fs::create_dir_all(&session_dir)
        .with_context(|| format!("failed to create log directory {}", session_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(&session_dir, "gridworld.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    let log_file = session_dir.join("gridworld.log");
    tracing::info!(log_file = %log_file.display(), "logging initialized");

    Ok((guard, log_file))
}

/// Platform cache directory, falling back to the system temp directory.
fn default_log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "gridworld")
        .map(|dirs| dirs.cache_dir().join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("gridworld").join("logs"))
}
