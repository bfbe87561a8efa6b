//! Text Input Widget: Single-line text input with cursor.
//!
//! Holds the raw text of one form field plus a cursor, and renders itself
//! as a single styled [`Line`].

use crate::render::{Line, Span, Theme};
use unicode_width::UnicodeWidthStr;

/// An editing operation on a text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    /// Insert a character at the cursor.
    Insert(char),
    /// Delete the character before the cursor.
    Backspace,
    /// Delete the character at the cursor.
    Delete,
    /// Move cursor left.
    Left,
    /// Move cursor right.
    Right,
    /// Move cursor to start.
    Home,
    /// Move cursor to end.
    End,
}

/// A single-line text input with cursor and editing support.
#[derive(Debug, Clone)]
pub struct TextInput {
    /// Current text content.
    content: String,
    /// Cursor position (byte offset, always on a char boundary).
    cursor: usize,
    /// Whether this widget has focus.
    focused: bool,
    /// Placeholder text shown when empty.
    placeholder: String,
}

impl TextInput {
    /// Create an unfocused, empty input.
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            content: String::new(),
            cursor: 0,
            focused: false,
            placeholder: placeholder.into(),
        }
    }

    /// Get the current text content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Set the content, moving cursor to end.
    pub fn set_content(&mut self, content: &str) {
        self.content = content.to_string();
        self.cursor = self.content.len();
    }

    /// Clear the content.
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Check if the input is empty.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Placeholder text.
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Cursor position as a byte offset.
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Set focus state.
    pub const fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Check if focused.
    pub const fn is_focused(&self) -> bool {
        self.focused
    }

    /// Apply an edit. Returns `true` if the text changed.
    pub fn apply(&mut self, edit: Edit) -> bool {
        let before = self.content.len();
        match edit {
            Edit::Insert(c) => {
                self.insert_char(c);
                return true;
            }
            Edit::Backspace => self.backspace(),
            Edit::Delete => self.delete(),
            Edit::Left => self.cursor_left(),
            Edit::Right => self.cursor_right(),
            Edit::Home => self.cursor = 0,
            Edit::End => self.cursor = self.content.len(),
        }
        self.content.len() != before
    }

    /// Insert a character at the cursor position.
    fn insert_char(&mut self, c: char) {
        self.content.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Byte offset of the char boundary before the cursor.
    fn prev_boundary(&self) -> usize {
        self.content[..self.cursor]
            .char_indices()
            .last()
            .map_or(0, |(i, _)| i)
    }

    /// Delete the character before the cursor.
    fn backspace(&mut self) {
        if self.cursor > 0 {
            let prev = self.prev_boundary();
            self.content.remove(prev);
            self.cursor = prev;
        }
    }

    /// Delete the character at the cursor.
    fn delete(&mut self) {
        if self.cursor < self.content.len() {
            self.content.remove(self.cursor);
        }
    }

    /// Move cursor left.
    fn cursor_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.prev_boundary();
        }
    }

    /// Move cursor right.
    fn cursor_right(&mut self) {
        if let Some(c) = self.content[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    /// Render into a line at most `width` columns wide.
    ///
    /// The focused input shows its cursor as a reversed cell and scrolls
    /// horizontally to keep it visible.
    pub fn view(&self, theme: &Theme, width: usize) -> Line {
        if self.content.is_empty() {
            let mut spans = Vec::new();
            let mut rest = self.placeholder.as_str();
            if self.focused {
                let mut chars = rest.chars();
                let first = chars.next().map_or_else(|| " ".to_string(), String::from);
                spans.push(Span::styled(first, theme.cursor));
                rest = chars.as_str();
            }
            spans.push(Span::styled(rest, theme.placeholder));
            return Line::from_spans(spans).truncated(width);
        }

        if !self.focused {
            return Line::styled(self.content.clone(), theme.input_text).truncated(width);
        }

        let before = &self.content[..self.cursor];
        let (at, after) = match self.content[self.cursor..].chars().next() {
            Some(c) => (c.to_string(), &self.content[self.cursor + c.len_utf8()..]),
            None => (" ".to_string(), ""),
        };

        // Drop leading characters until the cursor fits.
        let mut visible_before = before;
        while !visible_before.is_empty() && visible_before.width() + at.width() > width {
            let mut chars = visible_before.chars();
            chars.next();
            visible_before = chars.as_str();
        }

        Line::from_spans(vec![
            Span::styled(visible_before, theme.input_text),
            Span::styled(at, theme.cursor),
            Span::styled(after, theme.input_text),
        ])
        .truncated(width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_input_basic() {
        let mut input = TextInput::new("");
        assert!(input.apply(Edit::Insert('4')));
        assert!(input.apply(Edit::Insert('2')));
        assert_eq!(input.content(), "42");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn test_text_input_backspace() {
        let mut input = TextInput::new("");
        input.set_content("1000");

        assert!(input.apply(Edit::Backspace));
        assert_eq!(input.content(), "100");

        input.apply(Edit::Home);
        assert!(!input.apply(Edit::Backspace));
        assert!(input.apply(Edit::Delete));
        assert_eq!(input.content(), "00");
    }

    #[test]
    fn test_text_input_cursor_movement() {
        let mut input = TextInput::new("");
        input.set_content("Hello");

        assert!(!input.apply(Edit::Left));
        assert_eq!(input.cursor(), 4);

        input.apply(Edit::Home);
        assert_eq!(input.cursor(), 0);

        input.apply(Edit::Right);
        assert_eq!(input.cursor(), 1);

        input.apply(Edit::End);
        assert_eq!(input.cursor(), 5);
        input.apply(Edit::Right);
        assert_eq!(input.cursor(), 5);
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = TextInput::new("");
        input.set_content("1€5");
        input.apply(Edit::Left);
        input.apply(Edit::Backspace);
        assert_eq!(input.content(), "15");
        assert_eq!(input.cursor(), 1);
    }

    #[test]
    fn test_view_placeholder() {
        let theme = Theme::default();
        let mut input = TextInput::new("25_000_000");
        assert_eq!(input.view(&theme, 30).text(), "25_000_000");

        input.set_focused(true);
        let line = input.view(&theme, 30);
        assert_eq!(line.text(), "25_000_000");
        assert_eq!(line.spans[0].style, theme.cursor);
        assert_eq!(line.spans[0].content, "2");
    }

    #[test]
    fn test_view_cursor_at_end() {
        let theme = Theme::default();
        let mut input = TextInput::new("0.5");
        input.set_focused(true);
        input.set_content("1.25");

        let line = input.view(&theme, 30);
        assert_eq!(line.text(), "1.25 ");
        assert_eq!(line.spans[1].style, theme.cursor);
    }

    #[test]
    fn test_view_unfocused_has_no_cursor() {
        let theme = Theme::default();
        let mut input = TextInput::new("0.5");
        input.set_content("1.25");
        input.apply(Edit::Home);

        let line = input.view(&theme, 30);
        assert_eq!(line.text(), "1.25");
        assert!(line.spans.iter().all(|s| s.style == theme.input_text));
    }

    #[test]
    fn test_view_scrolls_to_cursor() {
        let theme = Theme::default();
        let mut input = TextInput::new("");
        input.set_focused(true);
        input.set_content("123456789");

        let line = input.view(&theme, 5);
        assert_eq!(line.text(), "6789 ");
    }
}
