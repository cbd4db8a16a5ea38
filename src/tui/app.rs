//! Main application logic for the terminal user interface.
//!
//! `App` owns the [`TaskListState`] plus purely visual state (selected row,
//! form focus and text cursor). Key presses are translated into [`Command`]s
//! and dispatched to the state; everything on screen is derived from it.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame, Terminal,
};
use tracing::{debug, info};

use crate::fields::*;
use crate::state::{Command, DraftMode, TaskListState};
use crate::tui::{
    colors::{priority_style, LIGHT_PANEL, PRIMARY},
    enums::{AppState, Glyph},
    task_form::{TaskForm, PRIORITY_GLOBAL_ORDER, TITLE_GLOBAL_ORDER},
};

const TITLE_LABEL: &str = "Judul    : ";
const PRIORITY_LABEL: &str = "Prioritas: ";

/// Main application state for the terminal user interface.
pub struct App {
    state: TaskListState,
    task_list_state: TableState,
    task_form: TaskForm,
    tick_rate: Duration,
}

impl App {
    /// Create an App with an empty task list.
    pub fn new(tick_rate: Duration) -> Self {
        Self {
            state: TaskListState::new(),
            task_list_state: TableState::default(),
            task_form: TaskForm::new(),
            tick_rate,
        }
    }

    pub fn state(&self) -> &TaskListState {
        &self.state
    }

    /// Consume the app, keeping only the task list state.
    pub fn into_state(self) -> TaskListState {
        self.state
    }

    fn app_state(&self) -> AppState {
        AppState::from(self.state.mode)
    }

    /// Id of the task under the list cursor.
    pub fn selected_task_id(&self) -> Option<u64> {
        self.task_list_state
            .selected()
            .and_then(|idx| self.state.tasks.get(idx))
            .map(|t| t.id)
    }

    /// Apply a command and bring the visual state back in line with it.
    fn dispatch(&mut self, command: Command) -> bool {
        let is_add = matches!(command, Command::AddTask)
            || (matches!(command, Command::Submit) && self.state.mode == DraftMode::Creating);
        let changed = self.state.apply(command);
        if !changed {
            return false;
        }

        self.task_form = TaskForm::from_state(&self.state);
        if is_add {
            self.task_list_state
                .select(self.state.tasks.len().checked_sub(1));
        } else {
            self.clamp_selection();
        }
        true
    }

    fn clamp_selection(&mut self) {
        let len = self.state.tasks.len();
        match self.task_list_state.selected() {
            _ if len == 0 => self.task_list_state.select(None),
            Some(idx) if idx >= len => self.task_list_state.select(Some(len - 1)),
            None => self.task_list_state.select(Some(0)),
            _ => {}
        }
    }

    /// Push the form's current values into the draft.
    fn sync_draft(&mut self) {
        let title = self.task_form.title.value.clone();
        let priority = self.task_form.selected_priority();
        self.state.apply(Command::SetDraftTitle(title));
        self.state.apply(Command::SetDraftPriority(priority));
    }

    /// Handle one key event. Returns true if the application should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }
        match self.app_state() {
            AppState::TaskList => self.handle_task_list_input(key.code),
            AppState::AddTask | AppState::EditTask => {
                self.handle_form_input(key.code);
                false
            }
        }
    }

    /// Handle keyboard input on the task list.
    fn handle_task_list_input(&mut self, key: KeyCode) -> bool {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Up => {
                if let Some(selected) = self.task_list_state.selected() {
                    if selected > 0 {
                        self.task_list_state.select(Some(selected - 1));
                    }
                } else if !self.state.tasks.is_empty() {
                    self.task_list_state.select(Some(0));
                }
            }
            KeyCode::Down => {
                if let Some(selected) = self.task_list_state.selected() {
                    if selected + 1 < self.state.tasks.len() {
                        self.task_list_state.select(Some(selected + 1));
                    }
                } else if !self.state.tasks.is_empty() {
                    self.task_list_state.select(Some(0));
                }
            }
            KeyCode::Char('a') => {
                self.dispatch(Command::OpenCreate);
            }
            KeyCode::Char('e') | KeyCode::Enter => {
                if let Some(id) = self.selected_task_id() {
                    self.dispatch(Command::OpenEdit(id));
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(id) = self.selected_task_id() {
                    self.dispatch(Command::DeleteTask(id));
                }
            }
            KeyCode::Left | KeyCode::Right | KeyCode::Char('s') => {
                if let Some(task) = self.selected_task_id().and_then(|id| self.state.get(id)) {
                    let status = if key == KeyCode::Left {
                        task.status.prev()
                    } else {
                        task.status.next()
                    };
                    let id = task.id;
                    self.dispatch(Command::UpdateStatus(id, status));
                }
            }
            _ => {}
        }
        false
    }

    /// Handle keyboard input while the add/edit form is open.
    fn handle_form_input(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => {
                self.dispatch(Command::Cancel);
            }
            KeyCode::Enter => {
                self.sync_draft();
                if !self.dispatch(Command::Submit) {
                    debug!("submit refused, draft title is blank");
                }
            }
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                if matches!(key, KeyCode::BackTab | KeyCode::Up) {
                    self.task_form.prev_field();
                } else {
                    self.task_form.next_field();
                }
            }
            KeyCode::Left => self.task_form.handle_left_right(false),
            KeyCode::Right => self.task_form.handle_left_right(true),
            KeyCode::Home => self.task_form.handle_home_end(false),
            KeyCode::End => self.task_form.handle_home_end(true),
            KeyCode::Backspace => self.task_form.handle_backspace(),
            KeyCode::Delete => self.task_form.handle_delete(),
            KeyCode::Char(c) => self.task_form.handle_char(c),
            _ => return,
        }
        if self.state.mode.is_open() {
            self.sync_draft();
        }
    }

    /// Render the header with the view title and the add affordance.
    fn render_header(&self, f: &mut Frame, area: Rect) {
        let header = Line::from(vec![
            Span::styled("Daftar Tugas", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("    "),
            Span::styled(
                format!("[{}] Tambah Tugas", Glyph::Add.symbol()),
                Style::default().fg(Color::White).bg(PRIMARY),
            ),
        ]);
        let block = Paragraph::new(header)
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center);
        f.render_widget(block, area);
    }

    /// Render the add/edit form.
    fn render_task_form(&self, f: &mut Frame, area: Rect) {
        let is_edit = self.app_state() == AppState::EditTask;
        let focused = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
        let label_style = |field: usize| {
            if self.task_form.current_field == field {
                focused
            } else {
                Style::default()
            }
        };

        let title_value = if self.task_form.title.value.is_empty() {
            Span::styled(
                "Masukkan judul tugas",
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            )
        } else {
            Span::raw(self.task_form.title.value.as_str())
        };

        let priority = self.task_form.selected_priority();
        let submit_label = if is_edit { "Simpan Perubahan" } else { "Tambah Tugas" };

        let text = vec![
            Line::from(vec![
                Span::styled(TITLE_LABEL, label_style(TITLE_GLOBAL_ORDER)),
                title_value,
            ]),
            Line::from(vec![
                Span::styled(PRIORITY_LABEL, label_style(PRIORITY_GLOBAL_ORDER)),
                Span::raw("◀ "),
                Span::styled(format_priority(priority), priority_style(priority)),
                Span::raw(" ▶"),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    format!("[Enter] {}", submit_label),
                    Style::default().fg(Color::Black).bg(Color::Green),
                ),
                Span::raw("  "),
                Span::styled("[Esc] Batal", Style::default().fg(Color::Black).bg(Color::Gray)),
            ]),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .style(Style::default().bg(LIGHT_PANEL));
        let inner = block.inner(area);
        f.render_widget(Paragraph::new(text).block(block), area);

        if self.task_form.current_field == TITLE_GLOBAL_ORDER && inner.width > 0 {
            let offset = (TITLE_LABEL.chars().count() + self.task_form.title.cursor) as u16;
            let x = (inner.x + offset).min(inner.x + inner.width - 1);
            f.set_cursor_position((x, inner.y));
        }
    }

    /// Render the task table.
    fn render_task_list(&mut self, f: &mut Frame, area: Rect) {
        let header_cells = ["Judul", "Prioritas", "Status", "Aksi"]
            .iter()
            .map(|h| Cell::from(*h).style(Style::default().add_modifier(Modifier::BOLD)));
        let header = Row::new(header_cells)
            .style(Style::default().bg(PRIMARY).fg(Color::White))
            .height(1);

        let editing = match self.state.mode {
            DraftMode::Editing(id) => Some(id),
            _ => None,
        };

        let rows: Vec<Row> = self
            .state
            .tasks
            .iter()
            .map(|task| {
                let style = if editing == Some(task.id) {
                    Style::default().add_modifier(Modifier::ITALIC)
                } else {
                    Style::default()
                };
                Row::new(vec![
                    Cell::from(task.title.as_str()),
                    Cell::from(Span::styled(
                        format_priority(task.priority),
                        priority_style(task.priority),
                    )),
                    Cell::from(format!("◀ {} ▶", format_status(task.status))),
                    Cell::from(format!("{} {}", Glyph::Edit.symbol(), Glyph::Delete.symbol())),
                ])
                .style(style)
            })
            .collect();

        let widths = [
            Constraint::Min(20),    // Title
            Constraint::Length(17), // Priority
            Constraint::Length(21), // Status
            Constraint::Length(4),  // Actions
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!("Tugas ({})", self.state.tasks.len())),
            )
            .row_highlight_style(Style::default().bg(Color::Gray).fg(Color::Black))
            .highlight_symbol(">> ");

        f.render_stateful_widget(table, area, &mut self.task_list_state);
    }

    /// Render the key hint bar at the bottom of the screen.
    fn render_status_bar(&self, f: &mut Frame, area: Rect) {
        let hints = match self.app_state() {
            AppState::TaskList => {
                "a: Tambah Tugas | e: Edit | d: Hapus | ←/→: Status | q: Keluar".to_string()
            }
            AppState::AddTask => "Enter: Tambah Tugas | Tab: Pindah | Esc: Batal".to_string(),
            AppState::EditTask => "Enter: Simpan Perubahan | Tab: Pindah | Esc: Batal".to_string(),
        };
        let status = Paragraph::new(hints)
            .style(Style::default().bg(PRIMARY).fg(Color::White))
            .alignment(Alignment::Left);
        f.render_widget(status, area);
    }

    /// Main render function; the form panel only exists while a draft is open.
    pub fn render(&mut self, f: &mut Frame) {
        let form_height = if self.state.mode.is_open() { 6 } else { 0 };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(form_height),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(f.area());

        self.render_header(f, chunks[0]);
        if self.state.mode.is_open() {
            self.render_task_form(f, chunks[1]);
        }
        self.render_task_list(f, chunks[2]);
        self.render_status_bar(f, chunks[3]);
    }

    /// Main event loop for the TUI application.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        info!(tick_ms = self.tick_rate.as_millis() as u64, "task list view started");
        loop {
            terminal.draw(|f| self.render(f))?;

            if event::poll(self.tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    if self.handle_key(key) {
                        break;
                    }
                }
            }
        }
        info!(tasks = self.state.tasks.len(), "task list view closed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    fn press(app: &mut App, code: KeyCode) -> bool {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn add(app: &mut App, title: &str) {
        press(app, KeyCode::Char('a'));
        type_str(app, title);
        press(app, KeyCode::Enter);
    }

    fn screen(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        let buf = terminal.backend().buffer().clone();
        let mut out = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn add_via_keys_then_form_closes() {
        let mut app = App::new(Duration::from_millis(250));
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.state().mode, DraftMode::Creating);
        type_str(&mut app, "Buy milk");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Enter);

        let state = app.state();
        assert_eq!(state.mode, DraftMode::Closed);
        assert_eq!(state.tasks.len(), 1);
        assert_eq!(state.tasks[0].title, "Buy milk");
        assert_eq!(state.tasks[0].priority, Priority::Low);
        assert_eq!(state.tasks[0].status, Status::ToDo);
        assert_eq!(app.selected_task_id(), Some(state.tasks[0].id));
    }

    #[test]
    fn enter_with_blank_title_keeps_form_open() {
        let mut app = App::new(Duration::from_millis(250));
        press(&mut app, KeyCode::Char('a'));
        type_str(&mut app, "   ");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.state().mode, DraftMode::Creating);
        assert!(app.state().tasks.is_empty());
    }

    #[test]
    fn q_inside_form_is_text_not_quit() {
        let mut app = App::new(Duration::from_millis(250));
        press(&mut app, KeyCode::Char('a'));
        assert!(!press(&mut app, KeyCode::Char('q')));
        assert_eq!(app.state().draft_title, "q");
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.state().mode, DraftMode::Closed);
        assert!(press(&mut app, KeyCode::Char('q')));
    }

    #[test]
    fn ctrl_c_quits_everywhere() {
        let mut app = App::new(Duration::from_millis(250));
        press(&mut app, KeyCode::Char('a'));
        assert!(app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    }

    #[test]
    fn edit_selected_row() {
        let mut app = App::new(Duration::from_millis(250));
        add(&mut app, "A");
        add(&mut app, "B");
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Char('e'));
        let a = app.state().tasks[0].id;
        assert_eq!(app.state().mode, DraftMode::Editing(a));
        assert_eq!(app.state().draft_title, "A");

        press(&mut app, KeyCode::Backspace);
        type_str(&mut app, "New title");
        press(&mut app, KeyCode::Enter);

        let state = app.state();
        assert_eq!(state.tasks[0].title, "New title");
        assert_eq!(state.tasks[0].id, a);
        assert_eq!(state.tasks[1].title, "B");
        assert_eq!(state.mode, DraftMode::Closed);
    }

    #[test]
    fn status_cycles_on_selected_row() {
        let mut app = App::new(Duration::from_millis(250));
        add(&mut app, "A");
        press(&mut app, KeyCode::Right);
        assert_eq!(app.state().tasks[0].status, Status::InProgress);
        press(&mut app, KeyCode::Char('s'));
        assert_eq!(app.state().tasks[0].status, Status::Done);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.state().tasks[0].status, Status::InProgress);
    }

    #[test]
    fn delete_clamps_selection() {
        let mut app = App::new(Duration::from_millis(250));
        add(&mut app, "A");
        add(&mut app, "B");
        assert_eq!(app.task_list_state.selected(), Some(1));
        press(&mut app, KeyCode::Char('d'));
        assert_eq!(app.state().tasks.len(), 1);
        assert_eq!(app.task_list_state.selected(), Some(0));
        press(&mut app, KeyCode::Char('d'));
        assert!(app.state().tasks.is_empty());
        assert_eq!(app.task_list_state.selected(), None);
        press(&mut app, KeyCode::Char('d'));
        assert!(app.state().tasks.is_empty());
    }

    #[test]
    fn renders_list_and_hides_form_when_closed() {
        let mut app = App::new(Duration::from_millis(250));
        add(&mut app, "Buy milk");
        let text = screen(&mut app);
        assert!(text.contains("Daftar Tugas"));
        assert!(text.contains("Buy milk"));
        assert!(text.contains("Prioritas Sedang"));
        assert!(text.contains("Belum Dikerjakan"));
        assert!(!text.contains("Batal"));
    }

    #[test]
    fn form_shows_placeholder_and_submit_label() {
        let mut app = App::new(Duration::from_millis(250));
        press(&mut app, KeyCode::Char('a'));
        let text = screen(&mut app);
        assert!(text.contains("Masukkan judul tugas"));
        assert!(text.contains("[Enter] Tambah Tugas"));
        assert!(text.contains("Batal"));

        type_str(&mut app, "A");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('e'));
        let text = screen(&mut app);
        assert!(text.contains("[Enter] Simpan Perubahan"));
        assert!(!text.contains("Masukkan judul tugas"));
    }
}
