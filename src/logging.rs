//! Logging setup built on the `tracing` ecosystem.
//!
//! The terminal belongs to the TUI, so log output only goes to a file. With no
//! log file configured no subscriber is installed and `tracing` macros cost
//! next to nothing.

use std::fs::{self, OpenOptions};
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::AppError;

/// Parse a `RUST_LOG`-style filter directive string.
pub fn parse_filter(filter: &str) -> Result<EnvFilter, AppError> {
    EnvFilter::try_new(filter).map_err(|e| AppError::LogFilter {
        filter: filter.to_string(),
        message: e.to_string(),
    })
}

/// Install a file-backed subscriber.
///
/// The returned guard flushes buffered lines when dropped and must be kept
/// alive for as long as logging is wanted. Errors from an already-installed
/// global subscriber are ignored.
pub fn init_logging(log_file: Option<&Path>, filter: &str) -> Result<Option<WorkerGuard>, AppError> {
    let Some(path) = log_file else {
        return Ok(None);
    };
    let filter = parse_filter(filter)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| AppError::LogFile {
                path: path.to_path_buf(),
                source,
            })?;
        }
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| AppError::LogFile {
            path: path.to_path_buf(),
            source,
        })?;

    let (writer, guard) = tracing_appender::non_blocking(file);
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .try_init();

    Ok(Some(guard))
}
