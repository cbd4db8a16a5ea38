//! Input field handling for the terminal user interface.

/// A single-line text input with a cursor and active state.
///
/// The cursor counts characters, not bytes, so multi-byte input edits cleanly.
#[derive(Clone, Debug, Default)]
pub struct InputField {
    pub value: String,
    pub cursor: usize,
    pub active: bool,
}

impl InputField {
    /// Create a new empty input field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an input field with initial text value, cursor at the end.
    pub fn with_value(value: &str) -> Self {
        Self {
            value: value.to_string(),
            cursor: value.chars().count(),
            active: false,
        }
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_offset(&self, char_idx: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    /// Insert a character at the current cursor position.
    pub fn handle_char(&mut self, c: char) {
        let at = self.byte_offset(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor.
    pub fn handle_backspace(&mut self) {
        if self.cursor > 0 {
            let at = self.byte_offset(self.cursor - 1);
            self.value.remove(at);
            self.cursor -= 1;
        }
    }

    /// Delete the character at the cursor position.
    pub fn handle_delete(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_offset(self.cursor);
            self.value.remove(at);
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor = self.char_count();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_appends_at_cursor() {
        let mut f = InputField::new();
        for c in "milk".chars() {
            f.handle_char(c);
        }
        f.move_cursor_home();
        for c in "Buy ".chars() {
            f.handle_char(c);
        }
        assert_eq!(f.value, "Buy milk");
        assert_eq!(f.cursor, 4);
    }

    #[test]
    fn backspace_and_delete() {
        let mut f = InputField::with_value("abc");
        f.handle_backspace();
        assert_eq!(f.value, "ab");
        f.move_cursor_home();
        f.handle_delete();
        assert_eq!(f.value, "b");
        f.move_cursor_end();
        f.handle_delete();
        assert_eq!(f.value, "b");
    }

    #[test]
    fn multibyte_characters_edit_by_char() {
        let mut f = InputField::with_value("café");
        assert_eq!(f.cursor, 4);
        f.handle_backspace();
        assert_eq!(f.value, "caf");
        f.handle_char('é');
        f.move_cursor_left();
        f.handle_char('ñ');
        assert_eq!(f.value, "cafñé");
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let mut f = InputField::with_value("a");
        f.move_cursor_right();
        f.move_cursor_right();
        assert_eq!(f.cursor, 1);
        f.move_cursor_left();
        f.move_cursor_left();
        assert_eq!(f.cursor, 0);
        f.handle_backspace();
        assert_eq!(f.value, "a");
    }
}
