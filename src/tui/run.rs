//! TUI entry point and terminal setup.

use std::io;
use std::panic::{self, AssertUnwindSafe};
use std::time::Duration;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::CrosstermBackend, Terminal};
use tracing::error;

use crate::error::AppError;
use crate::state::TaskListState;
use crate::tui::app::App;

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Initialise and run the terminal user interface.
///
/// The terminal is restored even if the event loop panics. Returns the final
/// task list state once the user quits.
pub fn run_tui(tick_rate: Duration) -> Result<TaskListState, AppError> {
    enable_raw_mode().map_err(AppError::Terminal)?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(AppError::Terminal(e));
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = match Terminal::new(backend) {
        Ok(terminal) => terminal,
        Err(e) => {
            let _ = restore_terminal();
            return Err(AppError::Terminal(e));
        }
    };

    let mut app = App::new(tick_rate);
    let result = panic::catch_unwind(AssertUnwindSafe(|| app.run(&mut terminal)));

    let restore_result = restore_terminal().and_then(|_| terminal.show_cursor());

    match result {
        Ok(inner) => {
            inner.map_err(AppError::Terminal)?;
            restore_result.map_err(AppError::Terminal)?;
            Ok(app.into_state())
        }
        Err(payload) => {
            let message = if let Some(s) = payload.downcast_ref::<&str>() {
                s.to_string()
            } else if let Some(s) = payload.downcast_ref::<String>() {
                s.clone()
            } else {
                "unknown panic".to_string()
            };
            error!(%message, "TUI panicked");
            Err(AppError::Panicked(message))
        }
    }
}
