//! Task data structure.
//!
//! A `Task` is a single work item in the list: a title, a priority and a
//! workflow status, keyed by a session-unique id.

use serde::{Deserialize, Serialize};

use crate::fields::*;

/// A work item in the task list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub priority: Priority,
    pub status: Status,
}

impl Task {
    /// Create a new task. Fresh tasks always start in `ToDo`.
    pub fn new(id: u64, title: impl Into<String>, priority: Priority) -> Self {
        Self {
            id,
            title: title.into(),
            priority,
            status: Status::ToDo,
        }
    }
}

/// True when `title` has something other than whitespace in it.
pub fn is_valid_title(title: &str) -> bool {
    !title.trim().is_empty()
}
