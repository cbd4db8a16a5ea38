use std::path::PathBuf;

use clap::Parser;

use crate::cmd::Commands;

/// In-memory task list for the terminal.
/// Nothing is saved: tasks live only as long as the UI is open.
#[derive(Parser, Debug)]
#[command(name = "tasklist", version, about = "In-memory task list TUI")]
pub struct Cli {
    /// Append logs to this file (the terminal itself is used by the UI).
    #[arg(long, global = true, env = "TASKLIST_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Log filter directives, e.g. `debug` or `tasklist=trace`.
    #[arg(long, global = true, env = "TASKLIST_LOG", default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
