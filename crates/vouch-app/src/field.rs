//! Single-line text input.
//!
//! Owns a text buffer and a cursor, and handles character-level editing keys.
//! The cursor counts characters, not bytes, so multi-byte input edits cleanly.

use crate::KeyInput;

/// Text buffer with cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    /// Current text.
    buffer: String,
    /// Cursor position in characters, `0..=char_count`.
    cursor: usize,
    /// Render as bullets (passwords).
    masked: bool,
}

impl TextInput {
    /// Create an empty input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty input whose contents are hidden when displayed.
    pub fn masked() -> Self {
        Self { masked: true, ..Self::default() }
    }

    /// Current text.
    pub fn value(&self) -> &str {
        &self.buffer
    }

    /// Cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Whether the contents are hidden when displayed.
    pub fn is_masked(&self) -> bool {
        self.masked
    }

    /// Text as it should be shown: bullets when masked.
    pub fn display(&self) -> String {
        if self.masked {
            "•".repeat(self.char_count())
        } else {
            self.buffer.clone()
        }
    }

    /// Replace the contents and move the cursor to the end.
    pub fn set(&mut self, value: impl Into<String>) {
        self.buffer = value.into();
        self.cursor = self.char_count();
    }

    /// Remove all text.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    /// Apply an editing key.
    ///
    /// Returns `true` if the key is an editing key (consumed by the field),
    /// `false` for keys the field does not handle (focus, submit, quit).
    pub fn handle_key(&mut self, key: KeyInput) -> bool {
        match key {
            KeyInput::Char(c) => {
                let at = self.byte_index(self.cursor);
                self.buffer.insert(at, c);
                self.cursor = self.cursor.saturating_add(1);
            },
            KeyInput::Backspace => {
                if self.cursor > 0 {
                    self.cursor = self.cursor.saturating_sub(1);
                    let at = self.byte_index(self.cursor);
                    self.buffer.remove(at);
                }
            },
            KeyInput::Delete => {
                if self.cursor < self.char_count() {
                    let at = self.byte_index(self.cursor);
                    self.buffer.remove(at);
                }
            },
            KeyInput::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyInput::Right => {
                if self.cursor < self.char_count() {
                    self.cursor = self.cursor.saturating_add(1);
                }
            },
            KeyInput::Home => self.cursor = 0,
            KeyInput::End => self.cursor = self.char_count(),
            KeyInput::Enter
            | KeyInput::Tab
            | KeyInput::BackTab
            | KeyInput::Esc
            | KeyInput::Up
            | KeyInput::Down => return false,
        }
        true
    }

    fn char_count(&self) -> usize {
        self.buffer.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.buffer.char_indices().nth(char_index).map_or(self.buffer.len(), |(i, _)| i)
    }
}
