//! In-memory task list state and its transition function.
//!
//! All mutable state of the view lives in [`TaskListState`]. Every user
//! interaction becomes a [`Command`], and [`TaskListState::apply`] is the only
//! place the state changes. Invalid input (blank titles, unknown ids) is
//! silently ignored: the command is a no-op and `apply` returns `false`.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::fields::*;
use crate::task::{is_valid_title, Task};

/// Which form, if any, is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", content = "task_id", rename_all = "kebab-case")]
pub enum DraftMode {
    #[default]
    Closed,
    Creating,
    Editing(u64),
}

impl DraftMode {
    pub fn is_open(self) -> bool {
        !matches!(self, DraftMode::Closed)
    }
}

/// A discrete user intent, produced by the UI and consumed by `apply`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    OpenCreate,
    OpenEdit(u64),
    SetDraftTitle(String),
    SetDraftPriority(Priority),
    AddTask,
    SaveEdit,
    /// The form's primary button: add while creating, save while editing.
    Submit,
    UpdateStatus(u64, Status),
    DeleteTask(u64),
    Cancel,
}

/// The whole state of the task list view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskListState {
    pub tasks: Vec<Task>,
    pub mode: DraftMode,
    pub draft_title: String,
    pub draft_priority: Priority,
    /// Highest id handed out so far.
    #[serde(default)]
    last_id: u64,
}

impl TaskListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a task by ID.
    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Get a mutable reference to a task by ID.
    pub fn get_mut(&mut self, id: u64) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    /// Position of a task in display order.
    pub fn position(&self, id: u64) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    /// Generate the next task ID.
    ///
    /// Ids follow the wall clock in milliseconds but never repeat: if the
    /// clock has not moved past the last id, the last id plus one is used.
    fn next_id(&mut self) -> u64 {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        let id = now.max(self.last_id + 1);
        self.last_id = id;
        id
    }

    fn reset_draft(&mut self) {
        self.mode = DraftMode::Closed;
        self.draft_title.clear();
        self.draft_priority = Priority::Medium;
    }

    /// Apply a command, returning whether anything changed.
    pub fn apply(&mut self, command: Command) -> bool {
        trace!(?command, mode = ?self.mode, "apply");
        match command {
            Command::OpenCreate => {
                let before = (self.mode, self.draft_title.len(), self.draft_priority);
                self.mode = DraftMode::Creating;
                self.draft_title.clear();
                self.draft_priority = Priority::Medium;
                before != (self.mode, 0, self.draft_priority)
            }
            Command::OpenEdit(id) => self.open_edit(id),
            Command::SetDraftTitle(title) => {
                if !self.mode.is_open() || self.draft_title == title {
                    return false;
                }
                self.draft_title = title;
                true
            }
            Command::SetDraftPriority(priority) => {
                if !self.mode.is_open() || self.draft_priority == priority {
                    return false;
                }
                self.draft_priority = priority;
                true
            }
            Command::AddTask => self.add_task(),
            Command::SaveEdit => self.save_edit(),
            Command::Submit => match self.mode {
                DraftMode::Creating => self.add_task(),
                DraftMode::Editing(_) => self.save_edit(),
                DraftMode::Closed => false,
            },
            Command::UpdateStatus(id, status) => self.update_status(id, status),
            Command::DeleteTask(id) => self.delete_task(id),
            Command::Cancel => {
                let changed = self.mode.is_open()
                    || !self.draft_title.is_empty()
                    || self.draft_priority != Priority::Medium;
                self.reset_draft();
                changed
            }
        }
    }

    fn open_edit(&mut self, id: u64) -> bool {
        let Some(task) = self.get(id) else {
            return false;
        };
        let (title, priority) = (task.title.clone(), task.priority);
        self.mode = DraftMode::Editing(id);
        self.draft_title = title;
        self.draft_priority = priority;
        true
    }

    fn add_task(&mut self) -> bool {
        if self.mode != DraftMode::Creating || !is_valid_title(&self.draft_title) {
            return false;
        }
        let id = self.next_id();
        let title = std::mem::take(&mut self.draft_title);
        self.tasks.push(Task::new(id, title, self.draft_priority));
        self.reset_draft();
        debug!(id, count = self.tasks.len(), "task added");
        true
    }

    fn save_edit(&mut self) -> bool {
        let DraftMode::Editing(id) = self.mode else {
            return false;
        };
        if !is_valid_title(&self.draft_title) {
            return false;
        }
        let title = self.draft_title.clone();
        let priority = self.draft_priority;
        let Some(task) = self.get_mut(id) else {
            return false;
        };
        task.title = title;
        task.priority = priority;
        self.reset_draft();
        debug!(id, "task updated");
        true
    }

    fn update_status(&mut self, id: u64, status: Status) -> bool {
        match self.get_mut(id) {
            Some(task) if task.status != status => {
                task.status = status;
                debug!(id, ?status, "status updated");
                true
            }
            _ => false,
        }
    }

    fn delete_task(&mut self, id: u64) -> bool {
        let Some(idx) = self.position(id) else {
            return false;
        };
        self.tasks.remove(idx);
        if self.mode == DraftMode::Editing(id) {
            self.reset_draft();
        }
        debug!(id, count = self.tasks.len(), "task deleted");
        true
    }
}

/// By-value form of [`TaskListState::apply`].
pub fn reduce(mut state: TaskListState, command: Command) -> TaskListState {
    state.apply(command);
    state
}
