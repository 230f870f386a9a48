//! Single-line text input
//!
//! Backs the topic, perspective and server URL fields. Keeps a byte-offset
//! cursor that always sits on a UTF-8 character boundary.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Outcome of draining a burst of typed or pasted characters
#[derive(Debug, Clone, PartialEq)]
pub struct PasteBatch {
    pub inserted: usize,
    /// First non-character key of the burst, still to be handled
    pub leftover: Option<KeyEvent>,
}

/// An editable line of text with a cursor
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextInput {
    /// The content being edited
    content: String,

    /// Cursor position (byte offset in content)
    cursor: usize,
}

impl TextInput {
    /// Create an input with initial content and the cursor at the end
    pub fn with_content(content: impl Into<String>) -> Self {
        let content = content.into();
        let cursor = content.len();
        Self { content, cursor }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Content with surrounding whitespace removed
    pub fn trimmed(&self) -> &str {
        self.content.trim()
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Insert a character at the cursor
    pub fn insert_char(&mut self, c: char) {
        // newlines would break the single-line rendering
        let c = if c == '\n' || c == '\r' { ' ' } else { c };
        self.content.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Insert a string at the cursor, normalizing smart quotes and line breaks
    pub fn insert_str(&mut self, s: &str) {
        let normalized: String = s
            .chars()
            .map(|c| match c {
                '\u{201C}' | '\u{201D}' => '"',
                '\u{2018}' | '\u{2019}' => '\'',
                '\n' | '\r' => ' ',
                other => other,
            })
            .collect();

        self.content.insert_str(self.cursor, &normalized);
        self.cursor += normalized.len();
    }

    /// Delete the character before the cursor (backspace)
    pub fn delete_char_before_cursor(&mut self) -> bool {
        match self.content[..self.cursor].char_indices().next_back() {
            Some((idx, _)) => {
                self.content.remove(idx);
                self.cursor = idx;
                true
            }
            None => false,
        }
    }

    /// Delete the character under the cursor (delete key)
    pub fn delete_char_after_cursor(&mut self) -> bool {
        if self.cursor >= self.content.len() {
            return false;
        }
        self.content.remove(self.cursor);
        true
    }

    /// Delete the word before the cursor, along with trailing spaces (Ctrl+W)
    pub fn delete_word_before_cursor(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }

        let before = &self.content[..self.cursor];
        let without_spaces = before.trim_end_matches(' ');
        let start = without_spaces
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_whitespace())
            .map(|(idx, c)| idx + c.len_utf8())
            .unwrap_or(0);

        self.content.replace_range(start..self.cursor, "");
        self.cursor = start;
        true
    }

    pub fn move_cursor_left(&mut self) -> bool {
        match self.content[..self.cursor].char_indices().next_back() {
            Some((idx, _)) => {
                self.cursor = idx;
                true
            }
            None => false,
        }
    }

    pub fn move_cursor_right(&mut self) -> bool {
        match self.content[self.cursor..].chars().next() {
            Some(c) => {
                self.cursor += c.len_utf8();
                true
            }
            None => false,
        }
    }

    pub fn move_cursor_to_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_cursor_to_end(&mut self) {
        self.cursor = self.content.len();
    }

    /// Number of characters before the cursor, for placing the terminal cursor
    pub fn cursor_column(&self) -> usize {
        self.content[..self.cursor].chars().count()
    }

    /// Handle a key event - returns true if the event was handled
    pub fn handle_key_event(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Backspace => self.delete_char_before_cursor(),
            KeyCode::Delete => self.delete_char_after_cursor(),
            KeyCode::Left => self.move_cursor_left(),
            KeyCode::Right => self.move_cursor_right(),
            KeyCode::Home => {
                self.move_cursor_to_start();
                true
            }
            KeyCode::End => {
                self.move_cursor_to_end();
                true
            }
            KeyCode::Char('a') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.move_cursor_to_start();
                true
            }
            KeyCode::Char('e') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.move_cursor_to_end();
                true
            }
            KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.delete_word_before_cursor()
            }
            KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.clear();
                true
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.insert_char(c);
                true
            }
            _ => false,
        }
    }

    /// Handle paste batching - collects character events arriving in quick succession
    ///
    /// Terminal pastes arrive as a burst of key events. Draining them here
    /// keeps one redraw per paste instead of one per character.
    pub fn handle_paste_batch(&mut self, initial_char: char) -> PasteBatch {
        let pending = std::iter::from_fn(|| {
            match crossterm::event::poll(std::time::Duration::from_millis(0)) {
                Ok(true) => crossterm::event::read().ok(),
                _ => None,
            }
        });
        self.insert_batch(initial_char, pending)
    }

    /// Insert `initial_char` plus the character presses that follow it in
    /// `events`, stopping at the first other key, which is handed back
    pub fn insert_batch(
        &mut self,
        initial_char: char,
        events: impl IntoIterator<Item = Event>,
    ) -> PasteBatch {
        let mut chars = vec![initial_char];
        let mut leftover = None;

        for event in events {
            match event {
                // Windows also reports releases
                Event::Key(key) if key.kind != KeyEventKind::Press => continue,
                Event::Key(key) => match key.code {
                    KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                        chars.push(c);
                    }
                    _ => {
                        leftover = Some(key);
                        break;
                    }
                },
                _ => break,
            }
        }

        let inserted = chars.len();
        let batch: String = chars.into_iter().collect();
        self.insert_str(&batch);

        PasteBatch { inserted, leftover }
    }
}
