//! Input Collector
//!
//! Line editor driven one key at a time. The terminal surface maps raw
//! key events to [`InputKey`] and feeds them here; completed lines come
//! back as [`InputOutcome::Submitted`] and are handed to the command
//! queue. Nothing here blocks or touches the terminal.
//!
//! Only printable ASCII is accepted, so the buffer is always ASCII and
//! byte offsets equal character offsets.

use crate::history::CommandHistory;

/// Editing keys understood by the collector
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKey {
    /// A typed character
    Char(char),
    Backspace,
    Delete,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    Tab,
    Enter,
    /// Escape, Ctrl-C or Ctrl-Z
    Cancel,
}

/// What a key press did to the line
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputOutcome {
    /// Nothing changed
    Unchanged,
    /// Buffer or cursor changed
    Edited,
    /// A non-empty line was confirmed; the buffer is now empty
    Submitted(String),
    /// The pending line was discarded
    Cancelled,
    /// Several commands match the typed prefix
    Completions(Vec<String>),
}

/// Editable input line with history and completion
#[derive(Clone, Debug)]
pub struct InputLine {
    buffer: String,
    cursor: usize,
    history: CommandHistory,
    /// Names offered by tab completion
    vocabulary: Vec<String>,
}

impl InputLine {
    /// Create an empty line with a bounded history and completion vocabulary
    pub fn new<S: AsRef<str>>(history_limit: usize, vocabulary: &[S]) -> Self {
        Self {
            buffer: String::new(),
            cursor: 0,
            history: CommandHistory::new(history_limit),
            vocabulary: vocabulary.iter().map(|s| s.as_ref().to_string()).collect(),
        }
    }

    /// Current text
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Cursor position in characters, within `0..=len`
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Submitted lines
    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    /// Apply one key
    pub fn handle_key(&mut self, key: InputKey) -> InputOutcome {
        match key {
            InputKey::Char(c) => self.insert(c),
            InputKey::Backspace => self.backspace(),
            InputKey::Delete => self.delete(),
            InputKey::Left => self.move_to(self.cursor.saturating_sub(1)),
            InputKey::Right => self.move_to((self.cursor + 1).min(self.buffer.len())),
            InputKey::Home => self.move_to(0),
            InputKey::End => self.move_to(self.buffer.len()),
            InputKey::Up => {
                let recalled = self.history.previous().map(str::to_string);
                self.recall(recalled)
            }
            InputKey::Down => {
                let recalled = self.history.next().map(str::to_string);
                self.recall(recalled)
            }
            InputKey::Tab => self.complete(),
            InputKey::Enter => self.submit(),
            InputKey::Cancel => self.cancel(),
        }
    }

    fn insert(&mut self, c: char) -> InputOutcome {
        if !(' '..='~').contains(&c) {
            return InputOutcome::Unchanged;
        }
        self.buffer.insert(self.cursor, c);
        self.cursor += 1;
        InputOutcome::Edited
    }

    fn backspace(&mut self) -> InputOutcome {
        if self.cursor == 0 {
            return InputOutcome::Unchanged;
        }
        self.cursor -= 1;
        self.buffer.remove(self.cursor);
        InputOutcome::Edited
    }

    fn delete(&mut self) -> InputOutcome {
        if self.cursor >= self.buffer.len() {
            return InputOutcome::Unchanged;
        }
        self.buffer.remove(self.cursor);
        InputOutcome::Edited
    }

    fn move_to(&mut self, position: usize) -> InputOutcome {
        if position == self.cursor {
            return InputOutcome::Unchanged;
        }
        self.cursor = position;
        InputOutcome::Edited
    }

    fn recall(&mut self, line: Option<String>) -> InputOutcome {
        match line {
            Some(line) => {
                self.buffer = line;
                self.cursor = self.buffer.len();
                InputOutcome::Edited
            }
            None => InputOutcome::Unchanged,
        }
    }

    fn complete(&mut self) -> InputOutcome {
        let matches: Vec<&String> = self
            .vocabulary
            .iter()
            .filter(|name| name.starts_with(self.buffer.as_str()))
            .collect();

        match matches.as_slice() {
            [] => InputOutcome::Unchanged,
            [only] => {
                if **only == self.buffer && self.cursor == self.buffer.len() {
                    return InputOutcome::Unchanged;
                }
                self.buffer = (*only).clone();
                self.cursor = self.buffer.len();
                InputOutcome::Edited
            }
            many => InputOutcome::Completions(many.iter().map(|s| (*s).clone()).collect()),
        }
    }

    fn submit(&mut self) -> InputOutcome {
        if self.buffer.is_empty() {
            self.history.reset_cursor();
            return InputOutcome::Unchanged;
        }
        let line = std::mem::take(&mut self.buffer);
        self.cursor = 0;
        self.history.push(&line);
        InputOutcome::Submitted(line)
    }

    fn cancel(&mut self) -> InputOutcome {
        self.history.reset_cursor();
        if self.buffer.is_empty() {
            return InputOutcome::Unchanged;
        }
        self.buffer.clear();
        self.cursor = 0;
        InputOutcome::Cancelled
    }
}
