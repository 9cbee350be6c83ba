//! Single-line text input with a byte-indexed cursor.
//!
//! Backs the search bar and the option picker's query line.

use ratatui::{
    style::Style,
    text::{Line, Span},
};

/// Text input buffer. The cursor always sits on a char boundary.
#[derive(Debug, Default, Clone)]
pub struct InputBuffer {
    content: String,
    cursor: usize,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_char(&mut self, c: char) {
        self.content.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.content.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete(&mut self) {
        if let Some(next) = self.next_boundary() {
            self.content.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = self.next_boundary() {
            self.cursor = next;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.content.len();
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn text(&self) -> &str {
        &self.content
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor
    }

    /// Render as spans with a block cursor; `placeholder` shows when empty.
    pub fn to_line(
        &self,
        prompt: Span<'static>,
        placeholder: &'static str,
        text_style: Style,
        cursor_style: Style,
        placeholder_style: Style,
    ) -> Line<'static> {
        if self.content.is_empty() {
            return Line::from(vec![
                prompt,
                Span::styled(" ", cursor_style),
                Span::styled(placeholder, placeholder_style),
            ]);
        }

        let before = &self.content[..self.cursor];
        let at_cursor = self.content[self.cursor..]
            .chars()
            .next()
            .map(|c| c.to_string())
            .unwrap_or_else(|| " ".to_string());
        let after = self.next_boundary().map_or("", |next| &self.content[next..]);

        Line::from(vec![
            prompt,
            Span::styled(before.to_string(), text_style),
            Span::styled(at_cursor, cursor_style),
            Span::styled(after.to_string(), text_style),
        ])
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.content[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
    }

    fn next_boundary(&self) -> Option<usize> {
        self.content[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
    }
}
