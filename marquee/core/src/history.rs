//! Command history with recall cursor.
//!
//! Entries are kept oldest first. Consecutive duplicates are skipped and
//! the oldest entry is evicted once the limit is reached. The recall
//! cursor walks backward from the newest entry and stops at both ends;
//! stepping forward past the newest entry leaves recall mode.

use std::collections::VecDeque;

/// Default number of remembered lines
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// Bounded list of submitted lines
#[derive(Clone, Debug)]
pub struct CommandHistory {
    entries: VecDeque<String>,
    limit: usize,
    /// Index into `entries` while recalling, `None` when editing a fresh line
    cursor: Option<usize>,
}

impl CommandHistory {
    /// Create an empty history holding at most `limit` entries
    pub fn new(limit: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            limit: limit.max(1),
            cursor: None,
        }
    }

    /// Record a submitted line and leave recall mode
    pub fn push(&mut self, line: &str) {
        self.cursor = None;
        if line.is_empty() || self.entries.back().is_some_and(|last| last == line) {
            return;
        }
        if self.entries.len() == self.limit {
            self.entries.pop_front();
        }
        self.entries.push_back(line.to_string());
    }

    /// Step toward older entries; returns the recalled line
    pub fn previous(&mut self) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        let index = match self.cursor {
            None => self.entries.len() - 1,
            Some(i) => i.saturating_sub(1),
        };
        self.cursor = Some(index);
        self.entries.get(index).map(String::as_str)
    }

    /// Step toward newer entries.
    ///
    /// Returns `Some(line)` for a recalled entry, `Some("")` when stepping
    /// past the newest entry, and `None` when not recalling at all.
    pub fn next(&mut self) -> Option<&str> {
        let index = self.cursor? + 1;
        if index >= self.entries.len() {
            self.cursor = None;
            return Some("");
        }
        self.cursor = Some(index);
        self.entries.get(index).map(String::as_str)
    }

    /// Leave recall mode without touching entries
    pub fn reset_cursor(&mut self) {
        self.cursor = None;
    }

    /// Whether a recalled entry is currently selected
    pub fn is_recalling(&self) -> bool {
        self.cursor.is_some()
    }

    /// Entries, oldest first
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Number of stored entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been stored yet
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CommandHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}
