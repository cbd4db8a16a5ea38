//! Task form handling for the terminal user interface.
//!
//! `TaskForm` is the widget-side mirror of the draft held in
//! [`TaskListState`]: it adds a text cursor and field focus, and is re-seeded
//! from the state whenever the form is opened or closed.

use crate::{fields::Priority, state::TaskListState, tui::input::InputField};

/// Global order constants for form fields.
pub const TITLE_GLOBAL_ORDER: usize = 0;
pub const PRIORITY_GLOBAL_ORDER: usize = 1;

/// Form for creating or editing a task.
#[derive(Clone, Debug)]
pub struct TaskForm {
    pub title: InputField,
    pub priority: usize,
    pub current_field: usize,
    pub priorities: Vec<Priority>,
}

impl Default for TaskForm {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskForm {
    /// Create an empty form with Medium priority and the title focused.
    pub fn new() -> Self {
        let priorities = Priority::ALL.to_vec();
        let priority = priorities
            .iter()
            .position(|&p| p == Priority::Medium)
            .unwrap_or(0);
        let mut form = Self {
            title: InputField::new(),
            priority,
            current_field: TITLE_GLOBAL_ORDER,
            priorities,
        };
        form.update_active_field();
        form
    }

    /// Create a form populated from the draft in `state`.
    pub fn from_state(state: &TaskListState) -> Self {
        let mut form = Self::new();
        form.title = InputField::with_value(&state.draft_title);
        form.priority = form
            .priorities
            .iter()
            .position(|&p| p == state.draft_priority)
            .unwrap_or(form.priority);
        form.update_active_field();
        form
    }

    /// Get the total number of fields (input fields + selectors).
    pub fn field_count(&self) -> usize {
        2
    }

    pub fn next_field(&mut self) {
        self.current_field = (self.current_field + 1) % self.field_count();
        self.update_active_field();
    }

    pub fn prev_field(&mut self) {
        self.current_field = if self.current_field == 0 {
            self.field_count() - 1
        } else {
            self.current_field - 1
        };
        self.update_active_field();
    }

    /// Update which field is currently active for editing.
    pub fn update_active_field(&mut self) {
        self.title.active = self.current_field == TITLE_GLOBAL_ORDER;
    }

    /// Handle character input. Only the title takes text.
    pub fn handle_char(&mut self, c: char) {
        if self.current_field == TITLE_GLOBAL_ORDER {
            self.title.handle_char(c);
        }
    }

    pub fn handle_backspace(&mut self) {
        if self.current_field == TITLE_GLOBAL_ORDER {
            self.title.handle_backspace();
        }
    }

    pub fn handle_delete(&mut self) {
        if self.current_field == TITLE_GLOBAL_ORDER {
            self.title.handle_delete();
        }
    }

    pub fn handle_home_end(&mut self, end: bool) {
        if self.current_field == TITLE_GLOBAL_ORDER {
            if end {
                self.title.move_cursor_end();
            } else {
                self.title.move_cursor_home();
            }
        }
    }

    /// Handle left/right arrow keys for cursor movement or selector changes.
    pub fn handle_left_right(&mut self, right: bool) {
        match self.current_field {
            TITLE_GLOBAL_ORDER => {
                if right {
                    self.title.move_cursor_right()
                } else {
                    self.title.move_cursor_left()
                }
            }
            PRIORITY_GLOBAL_ORDER => {
                if right {
                    self.priority = (self.priority + 1) % self.priorities.len();
                } else {
                    self.priority = if self.priority == 0 {
                        self.priorities.len() - 1
                    } else {
                        self.priority - 1
                    };
                }
            }
            _ => {}
        }
    }

    /// Get the currently selected priority.
    pub fn selected_priority(&self) -> Priority {
        self.priorities
            .get(self.priority)
            .copied()
            .unwrap_or_default()
    }
}
