//! File-based logging bootstrap.
//!
//! The terminal belongs to ratatui while the app runs, so log output goes
//! to `~/.goals/` instead of stdout. Initialized once at startup, before
//! the alternate screen is entered.

use std::fs;
use std::path::PathBuf;

use flexi_logger::{FileSpec, Logger, LoggerHandle};

/// Starts file logging and returns the handle that keeps it alive.
///
/// The handle must outlive the event loop (dropping it stops logging),
/// so `main` holds it for the whole run. `verbose` switches the level
/// from `info` to `debug`. Returns a human-readable error when the log
/// directory cannot be created or the logger fails to start.
pub fn init(verbose: bool) -> Result<LoggerHandle, String> {
    let dir = log_dir().ok_or_else(|| "could not determine home directory".to_string())?;
    fs::create_dir_all(&dir)
        .map_err(|e| format!("failed to create log directory {}: {e}", dir.display()))?;

    let level = if verbose { "debug" } else { "info" };
    Logger::try_with_str(level)
        .map_err(|e| format!("failed to configure logging: {e}"))?
        .log_to_file(FileSpec::default().directory(&dir).basename("goals"))
        .append()
        .start()
        .map_err(|e| format!("failed to start logging: {e}"))
}

/// The log directory: `~/.goals/`.
fn log_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".goals"))
}
