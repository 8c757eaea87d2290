//! Text-edit surfaces.
//!
//! The sync engine talks to whatever widget holds the markup through
//! [`TextSurface`]. [`TextBuffer`] is the in-memory implementation used
//! headless and in tests; it supports the caret editing a source pane needs.

use crate::event::input::{Key, KeyEvent};

/// A text widget as seen by the sync engine.
///
/// Cursor positions are byte offsets into [`text`](TextSurface::text) and
/// always lie on a char boundary.
pub trait TextSurface {
    fn text(&self) -> &str;

    /// Replace the whole text. The cursor is clamped to the new length.
    fn set_text(&mut self, text: String);

    fn cursor(&self) -> usize;

    /// Move the cursor. Out-of-range values are clamped.
    fn set_cursor(&mut self, cursor: usize);

    /// Insert `s` at byte offset `at`, leaving the cursor where it was.
    fn insert_at(&mut self, at: usize, s: &str) {
        let cursor = self.cursor();
        let mut text = self.text().to_string();
        let at = floor_char_boundary(&text, at);
        text.insert_str(at, s);
        self.set_text(text);
        self.set_cursor(cursor);
    }
}

/// Largest char boundary `<= index`, clamped to the text length.
pub(crate) fn floor_char_boundary(text: &str, index: usize) -> usize {
    let mut index = index.min(text.len());
    while index > 0 && !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}

// ---------------------------------------------------------------------------
// TextBuffer
// ---------------------------------------------------------------------------

/// Multi-line text with a caret.
///
/// All cursor operations are char-boundary safe.
///
/// # Examples
///
/// ```
/// use plinth::editor::{TextBuffer, TextSurface};
///
/// let mut buffer = TextBuffer::new().with_text("<Grid>");
/// buffer.insert_str("</Grid>");
/// assert_eq!(buffer.text(), "<Grid></Grid>");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
    cursor: usize,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial text with the cursor at the end (builder).
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self.cursor = self.text.len();
        self
    }

    /// Set the cursor (builder).
    pub fn with_cursor(mut self, cursor: usize) -> Self {
        self.set_cursor(cursor);
        self
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Insert a character at the cursor and move past it.
    pub fn insert_char(&mut self, ch: char) {
        self.text.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    /// Insert a string at the cursor and move past it.
    pub fn insert_str(&mut self, s: &str) {
        self.text.insert_str(self.cursor, s);
        self.cursor += s.len();
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let prev = self.prev_char_boundary();
        self.text.drain(prev..self.cursor);
        self.cursor = prev;
        true
    }

    /// Delete the character after the cursor.
    pub fn delete_forward(&mut self) -> bool {
        if self.cursor >= self.text.len() {
            return false;
        }
        let next = self.next_char_boundary();
        self.text.drain(self.cursor..next);
        true
    }

    pub fn move_left(&mut self) {
        self.cursor = self.prev_char_boundary();
    }

    pub fn move_right(&mut self) {
        self.cursor = self.next_char_boundary();
    }

    /// Move to the start of the current line.
    pub fn move_line_start(&mut self) {
        self.cursor = self.line_start(self.cursor);
    }

    /// Move to the end of the current line (before its `\n`).
    pub fn move_line_end(&mut self) {
        self.cursor = self.line_end(self.cursor);
    }

    /// Move one line up, keeping the column where the line is long enough.
    pub fn move_up(&mut self) {
        let start = self.line_start(self.cursor);
        if start == 0 {
            self.cursor = 0;
            return;
        }
        let column = self.text[start..self.cursor].chars().count();
        let prev_start = self.line_start(start - 1);
        self.cursor = self.offset_in_line(prev_start, column);
    }

    /// Move one line down, keeping the column where the line is long enough.
    pub fn move_down(&mut self) {
        let end = self.line_end(self.cursor);
        if end == self.text.len() {
            self.cursor = end;
            return;
        }
        let column = self.text[self.line_start(self.cursor)..self.cursor].chars().count();
        self.cursor = self.offset_in_line(end + 1, column);
    }

    /// Apply a key press. Returns `true` if the text changed.
    pub fn apply_key(&mut self, key: &KeyEvent) -> bool {
        if let Some(ch) = key.typed_char() {
            self.insert_char(ch);
            return true;
        }
        match key.code {
            Key::Enter => {
                self.insert_char('\n');
                true
            }
            Key::Tab => {
                self.insert_char('\t');
                true
            }
            Key::Backspace => self.backspace(),
            Key::Delete => self.delete_forward(),
            Key::Left => {
                self.move_left();
                false
            }
            Key::Right => {
                self.move_right();
                false
            }
            Key::Up => {
                self.move_up();
                false
            }
            Key::Down => {
                self.move_down();
                false
            }
            Key::Home => {
                self.move_line_start();
                false
            }
            Key::End => {
                self.move_line_end();
                false
            }
            Key::Char(_) | Key::Escape | Key::Other => false,
        }
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    fn prev_char_boundary(&self) -> usize {
        floor_char_boundary(&self.text, self.cursor.saturating_sub(1))
    }

    fn next_char_boundary(&self) -> usize {
        let mut pos = (self.cursor + 1).min(self.text.len());
        while pos < self.text.len() && !self.text.is_char_boundary(pos) {
            pos += 1;
        }
        pos
    }

    fn line_start(&self, at: usize) -> usize {
        self.text[..at].rfind('\n').map_or(0, |i| i + 1)
    }

    fn line_end(&self, at: usize) -> usize {
        self.text[at..].find('\n').map_or(self.text.len(), |i| at + i)
    }

    fn offset_in_line(&self, line_start: usize, column: usize) -> usize {
        let line = &self.text[line_start..self.line_end(line_start)];
        line.char_indices()
            .nth(column)
            .map_or(line_start + line.len(), |(i, _)| line_start + i)
    }
}

impl TextSurface for TextBuffer {
    fn text(&self) -> &str {
        &self.text
    }

    fn set_text(&mut self, text: String) {
        self.text = text;
        self.cursor = floor_char_boundary(&self.text, self.cursor);
    }

    fn cursor(&self) -> usize {
        self.cursor
    }

    fn set_cursor(&mut self, cursor: usize) {
        self.cursor = floor_char_boundary(&self.text, cursor);
    }
}
