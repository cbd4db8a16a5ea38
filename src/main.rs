//! # tasklist - In-memory task list TUI
//!
//! A small terminal task list: add tasks with a title and priority, move them
//! through their workflow status, edit and delete them.
//!
//! ## Key Features
//!
//! - **One screen**: header, an add/edit form that only appears while a draft
//!   is open, and the task table
//! - **Priorities**: High / Medium / Low, colour-coded danger / warning / success
//! - **Status**: To Do → In Progress → Done, cycled from the list
//! - **Nothing persisted**: tasks live for the session only (`--dump-state`
//!   prints them as JSON on exit)
//!
//! ## Quick Start
//!
//! ```bash
//! # Launch the task list
//! tasklist
//!
//! # With debug logging to a file
//! tasklist --log-file /tmp/tasklist.log --log-level debug
//!
//! # Print the final state when quitting
//! tasklist ui --dump-state
//! ```
//!
//! ## Key Bindings
//!
//! - `a` add, `e`/`Enter` edit, `d` delete, `←`/`→` change status, `q` quit
//! - In the form: `Tab` switches field, `Enter` submits, `Esc` cancels
//!
//! Display strings are in Indonesian ("Daftar Tugas").

use clap::Parser;

pub mod cli;
pub mod cmd;
pub mod error;
pub mod fields;
pub mod logging;
pub mod state;
pub mod task;
pub mod tui {
    pub mod app;
    pub mod colors;
    pub mod enums;
    pub mod input;
    pub mod run;
    pub mod task_form;
}

use cli::Cli;
use cmd::*;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let _log_guard = logging::init_logging(cli.log_file.as_deref(), &cli.log_level)?;

    match cli.command.unwrap_or_default() {
        Commands::Ui { tick_ms, dump_state } => cmd_ui(tick_ms, dump_state)?,
        Commands::Completions { shell } => cmd_completions(shell),
    }
    Ok(())
}
