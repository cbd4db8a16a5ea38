//! Enumerations for TUI state management.

use crate::state::DraftMode;

/// Which screen the TUI is showing, derived from the draft mode.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AppState {
    TaskList,
    AddTask,
    EditTask,
}

impl From<DraftMode> for AppState {
    fn from(mode: DraftMode) -> Self {
        match mode {
            DraftMode::Closed => AppState::TaskList,
            DraftMode::Creating => AppState::AddTask,
            DraftMode::Editing(_) => AppState::EditTask,
        }
    }
}

/// The three glyphs the view draws for its affordances.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Glyph {
    Add,
    Edit,
    Delete,
}

impl Glyph {
    pub fn symbol(self) -> &'static str {
        match self {
            Glyph::Add => "+",
            Glyph::Edit => "✎",
            Glyph::Delete => "✖",
        }
    }
}
