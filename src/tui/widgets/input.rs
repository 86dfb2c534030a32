//! Text input widget
//!
//! A single-line text field with a character-indexed cursor and placeholder

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

/// A simple text input widget
#[derive(Debug, Clone)]
pub struct TextInput {
    /// Current text content
    pub content: String,
    /// Cursor position, in characters
    pub cursor: usize,
    /// Whether the input is focused
    pub focused: bool,
    /// Placeholder text shown while empty
    pub placeholder: String,
}

impl TextInput {
    /// Create a new text input
    pub fn new() -> Self {
        Self {
            content: String::new(),
            cursor: 0,
            focused: false,
            placeholder: String::new(),
        }
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set focused state
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        let index = self.byte_index(self.cursor);
        self.content.insert(index, c);
        self.cursor += 1;
    }

    /// Delete character before cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let index = self.byte_index(self.cursor);
            self.content.remove(index);
        }
    }

    /// Delete character at cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let index = self.byte_index(self.cursor);
            self.content.remove(index);
        }
    }

    /// Move cursor left
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move cursor right
    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    /// Move cursor to start
    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to end
    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Clear the content
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Get the current content
    pub fn value(&self) -> &str {
        &self.content
    }

    /// Whether nothing has been typed
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

impl Default for TextInput {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for TextInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let (display_text, text_style) = if self.content.is_empty() {
            (self.placeholder.as_str(), Style::default().fg(Color::DarkGray))
        } else {
            (self.content.as_str(), Style::default().fg(Color::White))
        };

        buf.set_stringn(area.x, area.y, display_text, area.width as usize, text_style);

        if self.focused {
            let cursor_x = area.x + self.cursor as u16;
            if cursor_x < area.x + area.width {
                let cursor_char = self.content.chars().nth(self.cursor).unwrap_or(' ');
                buf.set_string(
                    cursor_x,
                    area.y,
                    cursor_char.to_string(),
                    Style::default().fg(Color::Black).bg(Color::Cyan),
                );
            }
        }
    }
}
