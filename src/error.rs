//! Error types for the binary's outer layers.
//!
//! Task list operations themselves never fail; these cover the terminal,
//! logging setup and state dumps.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal error: {0}")]
    Terminal(#[source] std::io::Error),

    #[error("TUI panicked: {0}")]
    Panicked(String),

    #[error("cannot open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid log filter '{filter}': {message}")]
    LogFilter { filter: String, message: String },

    #[error("failed to serialize state: {0}")]
    StateDump(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failure() {
        let err = AppError::LogFilter {
            filter: "=bad".into(),
            message: "nope".into(),
        };
        assert_eq!(err.to_string(), "invalid log filter '=bad': nope");
        assert_eq!(
            AppError::Panicked("boom".into()).to_string(),
            "TUI panicked: boom"
        );
    }
}
