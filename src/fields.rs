//! Enumerations and field types for tasks.
//!
//! Priority and status are closed sets. Each carries its fixed display label
//! (the UI ships in a single locale) and the order used by the selectors.

use serde::{Deserialize, Serialize};

/// Priority classification for task importance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    /// Selector order, as shown in the form.
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];
}

/// Task workflow stage.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    #[default]
    #[serde(alias = "ToDo")]
    ToDo,
    #[serde(alias = "InProgress")]
    InProgress,
    #[serde(alias = "Done")]
    Done,
}

impl Status {
    /// Cycle ToDo -> InProgress -> Done -> ToDo.
    pub fn next(self) -> Self {
        match self {
            Status::ToDo => Status::InProgress,
            Status::InProgress => Status::Done,
            Status::Done => Status::ToDo,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Status::ToDo => Status::Done,
            Status::InProgress => Status::ToDo,
            Status::Done => Status::InProgress,
        }
    }
}

/// Format a priority level for display.
pub fn format_priority(p: Priority) -> &'static str {
    match p {
        Priority::High => "Prioritas Tinggi",
        Priority::Medium => "Prioritas Sedang",
        Priority::Low => "Prioritas Rendah",
    }
}

/// Format a task status for display.
pub fn format_status(s: Status) -> &'static str {
    match s {
        Status::ToDo => "Belum Dikerjakan",
        Status::InProgress => "Sedang Dikerjakan",
        Status::Done => "Selesai",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_defaults_to_medium() {
        assert_eq!(Priority::default(), Priority::Medium);
    }

    #[test]
    fn priority_selector_order() {
        assert_eq!(Priority::ALL, [Priority::High, Priority::Medium, Priority::Low]);
    }

    #[test]
    fn status_cycles_through_all_three() {
        assert_eq!(Status::ToDo.next(), Status::InProgress);
        assert_eq!(Status::InProgress.next(), Status::Done);
        assert_eq!(Status::Done.next(), Status::ToDo);
        assert_eq!(Status::ToDo.prev(), Status::Done);
    }

    #[test]
    fn labels_are_localized() {
        assert_eq!(format_priority(Priority::High), "Prioritas Tinggi");
        assert_eq!(format_priority(Priority::Low), "Prioritas Rendah");
        assert_eq!(format_status(Status::ToDo), "Belum Dikerjakan");
        assert_eq!(format_status(Status::Done), "Selesai");
    }

    #[test]
    fn status_accepts_legacy_casing() {
        let s: Status = serde_json::from_str("\"InProgress\"").unwrap();
        assert_eq!(s, Status::InProgress);
        assert_eq!(serde_json::to_string(&Status::ToDo).unwrap(), "\"to-do\"");
    }
}
