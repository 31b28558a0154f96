//! Single-line text input with a cursor, shared by the listing search box
//! and the listing form fields.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    style::{Modifier, Style},
    text::Span,
};

use crate::tui::theme;

#[derive(Debug, Clone, Default)]
pub struct InputBuffer {
    content: String,
    /// Byte offset into `content`, always on a char boundary.
    cursor: usize,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer prefilled with `text`, cursor at the end.
    pub fn with_text(text: impl Into<String>) -> Self {
        let content = text.into();
        let cursor = content.len();
        Self { content, cursor }
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

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    pub fn text(&self) -> &str {
        &self.content
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor
    }

    /// Apply an editing key. Returns true if the key was an edit or cursor move.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        match (key.modifiers, key.code) {
            (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => {
                self.insert_char(c);
                true
            }
            (_, KeyCode::Backspace) => {
                self.backspace();
                true
            }
            (_, KeyCode::Delete) => {
                self.delete();
                true
            }
            (_, KeyCode::Left) => {
                self.move_left();
                true
            }
            (_, KeyCode::Right) => {
                self.move_right();
                true
            }
            (_, KeyCode::Home) => {
                self.cursor = 0;
                true
            }
            (_, KeyCode::End) => {
                self.cursor = self.content.len();
                true
            }
            _ => false,
        }
    }

    /// Spans for one line: placeholder when empty, block cursor when focused.
    pub fn spans(&self, placeholder: &str, focused: bool) -> Vec<Span<'static>> {
        let cursor_style = Style::default().add_modifier(Modifier::REVERSED);

        if self.content.is_empty() {
            let mut spans = Vec::new();
            if focused {
                spans.push(Span::styled(" ", cursor_style));
            }
            spans.push(Span::styled(placeholder.to_string(), theme::dim()));
            return spans;
        }

        if !focused {
            return vec![Span::styled(self.content.clone(), Style::default().fg(theme::TEXT))];
        }

        let (before, rest) = self.content.split_at(self.cursor);
        let mut chars = rest.chars();
        let at_cursor = chars.next().map(String::from).unwrap_or_else(|| " ".to_string());
        vec![
            Span::styled(before.to_string(), Style::default().fg(theme::TEXT)),
            Span::styled(at_cursor, cursor_style),
            Span::styled(chars.as_str().to_string(), Style::default().fg(theme::TEXT)),
        ]
    }

    fn prev_boundary(&self) -> Option<usize> {
        if self.cursor == 0 {
            return None;
        }
        self.content[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
    }

    fn next_boundary(&self) -> Option<usize> {
        if self.cursor >= self.content.len() {
            return None;
        }
        Some(
            self.content[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.content.len()),
        )
    }
}
