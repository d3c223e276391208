//! Single-line text input
//!
//! [`TextEntry`] is the narrow interface the state machine uses to drive
//! the commit subject editor. [`TextInput`] is the terminal implementation.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthChar;

use super::Styles;

/// An editable text buffer driven by key events
pub trait TextEntry {
    /// Apply a key event. Returns true if the buffer or cursor changed.
    fn handle_key(&mut self, key: KeyEvent) -> bool;

    /// Current buffer contents
    fn value(&self) -> &str;

    /// Render the buffer with its cursor
    fn view(&self, styles: &Styles) -> Line<'static>;
}

/// Text input with a cursor, placeholder and character limit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextInput {
    text: String,
    /// Cursor position in chars
    cursor: usize,
    placeholder: String,
    char_limit: usize,
    width: usize,
}

impl TextInput {
    /// Create an empty input
    pub fn new(placeholder: impl Into<String>, char_limit: usize, width: usize) -> Self {
        Self {
            text: String::new(),
            cursor: 0,
            placeholder: placeholder.into(),
            char_limit,
            width: width.max(1),
        }
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    /// Insert a character at the cursor, respecting the limit
    pub fn insert_char(&mut self, c: char) -> bool {
        if c.is_control() || self.char_count() >= self.char_limit {
            return false;
        }
        let at = self.byte_index(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
        true
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let at = self.byte_index(self.cursor - 1);
        self.text.remove(at);
        self.cursor -= 1;
        true
    }

    /// Delete the character under the cursor
    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.char_count() {
            return false;
        }
        let at = self.byte_index(self.cursor);
        self.text.remove(at);
        true
    }

    /// Delete everything before the cursor
    pub fn clear_to_start(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let at = self.byte_index(self.cursor);
        self.text.replace_range(..at, "");
        self.cursor = 0;
        true
    }

    fn move_cursor(&mut self, to: usize) -> bool {
        let to = to.min(self.char_count());
        let moved = to != self.cursor;
        self.cursor = to;
        moved
    }

    /// First char index shown so the cursor cell fits in the width
    fn scroll_offset(&self) -> usize {
        let chars: Vec<char> = self.text.chars().collect();
        let mut offset = 0;
        let mut used: usize = chars[..self.cursor].iter().map(|c| c.width().unwrap_or(0)).sum();
        // Past the end the cursor is a single blank cell
        let cursor_width = chars.get(self.cursor).and_then(|c| c.width()).unwrap_or(1).max(1);

        while used + cursor_width > self.width && offset < self.cursor {
            used -= chars[offset].width().unwrap_or(0);
            offset += 1;
        }
        offset
    }
}

impl TextEntry for TextInput {
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match (key.code, key.modifiers) {
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => self.clear_to_start(),
            (KeyCode::Char('a'), KeyModifiers::CONTROL) => self.move_cursor(0),
            (KeyCode::Char('e'), KeyModifiers::CONTROL) => self.move_cursor(usize::MAX),
            (KeyCode::Char(c), modifiers) if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                self.insert_char(c)
            }
            (KeyCode::Backspace, _) => self.backspace(),
            (KeyCode::Delete, _) => self.delete(),
            (KeyCode::Left, _) => self.move_cursor(self.cursor.saturating_sub(1)),
            (KeyCode::Right, _) => self.move_cursor(self.cursor + 1),
            (KeyCode::Home, _) => self.move_cursor(0),
            (KeyCode::End, _) => self.move_cursor(usize::MAX),
            _ => false,
        }
    }

    fn value(&self) -> &str {
        &self.text
    }

    fn view(&self, styles: &Styles) -> Line<'static> {
        let mut spans = vec![Span::styled("> ", styles.prompt)];

        if self.text.is_empty() {
            let mut placeholder = self.placeholder.chars();
            let first = placeholder.next().map(String::from).unwrap_or_else(|| " ".to_string());
            spans.push(Span::styled(first, styles.cursor.patch(styles.placeholder)));
            spans.push(Span::styled(placeholder.collect::<String>(), styles.placeholder));
            return Line::from(spans);
        }

        let offset = self.scroll_offset();
        let mut before = String::new();
        let mut under = String::from(" ");
        let mut after = String::new();
        let mut used = 0;

        for (i, c) in self.text.chars().enumerate().skip(offset) {
            let w = c.width().unwrap_or(0);
            if used + w > self.width && i != self.cursor {
                break;
            }
            used += w;
            match i.cmp(&self.cursor) {
                std::cmp::Ordering::Less => before.push(c),
                std::cmp::Ordering::Equal => under = c.to_string(),
                std::cmp::Ordering::Greater => after.push(c),
            }
        }

        spans.push(Span::styled(before, styles.input));
        spans.push(Span::styled(under, styles.cursor));
        spans.push(Span::styled(after, styles.input));
        Line::from(spans)
    }
}
