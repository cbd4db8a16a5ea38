//! Command implementations for the CLI interface.

use std::io::Write;
use std::time::Duration;

use clap::Subcommand;
use clap_complete::{generate, Shell};
use tracing::info;

use crate::error::AppError;
use crate::state::TaskListState;
use crate::tui::run::run_tui;

/// Default redraw/poll interval for the UI, in milliseconds.
pub const DEFAULT_TICK_MS: u64 = 250;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Launch the interactive task list (the default).
    Ui {
        /// Input poll interval in milliseconds.
        #[arg(long, default_value_t = DEFAULT_TICK_MS, value_parser = clap::value_parser!(u64).range(1..))]
        tick_ms: u64,

        /// Print the final state as JSON on exit.
        #[arg(long)]
        dump_state: bool,
    },

    /// Generate shell completion scripts.
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Ui {
            tick_ms: DEFAULT_TICK_MS,
            dump_state: false,
        }
    }
}

/// Launch the TUI and optionally dump the resulting state.
pub fn cmd_ui(tick_ms: u64, dump_state: bool) -> Result<(), AppError> {
    let state = run_tui(Duration::from_millis(tick_ms))?;
    info!(tasks = state.tasks.len(), "session ended");
    if dump_state {
        write_state(&state, &mut std::io::stdout())?;
    }
    Ok(())
}

/// Write `state` as pretty JSON followed by a newline.
pub fn write_state<W: Write>(state: &TaskListState, out: &mut W) -> Result<(), AppError> {
    serde_json::to_writer_pretty(&mut *out, state)?;
    writeln!(out).map_err(AppError::Terminal)?;
    Ok(())
}

/// Generate shell completions to stdout.
pub fn cmd_completions(shell: Shell) {
    use clap::CommandFactory;
    use crate::cli::Cli;

    let mut app = Cli::command();
    let app_name = app.get_name().to_string();
    generate(shell, &mut app, app_name, &mut std::io::stdout());
}
