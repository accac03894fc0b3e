//! ConsoleLog Widget
//!
//! Scrolling output of the console: echoed input, command responses and
//! notices. Shows the most recent lines that fit the log region. A short
//! backlog is kept beyond that, so a region that shrinks to nothing and
//! grows back still has its lines.

use std::collections::VecDeque;

use ratatui::style::Style;
use ratatui::text::Line;

use crate::theme;

use super::clip;

/// What produced a log line; selects its style
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogKind {
    /// `prompt + line` as typed
    Echo,
    /// Interpreter output
    Response,
    /// Cancellations, completion lists, welcome text
    Notice,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct LogLine {
    text: String,
    kind: LogKind,
}

/// Lines retained even when the region is shorter than this
pub const LOG_BACKLOG: usize = 64;

/// Bounded list of console output lines
#[derive(Debug)]
pub struct ConsoleLog {
    lines: VecDeque<LogLine>,
    /// Visible rows, following the region height
    capacity: usize,
}

impl ConsoleLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity.max(LOG_BACKLOG)),
            capacity,
        }
    }

    pub fn push(&mut self, text: impl Into<String>, kind: LogKind) {
        while self.lines.len() >= self.retained() {
            self.lines.pop_front();
        }
        self.lines.push_back(LogLine {
            text: text.into(),
            kind,
        });
    }

    pub fn push_all<I, S>(&mut self, lines: I, kind: LogKind)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for line in lines {
            self.push(line, kind);
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Follow the region height; lines past the backlog are evicted oldest first
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
        while self.lines.len() > self.retained() {
            self.lines.pop_front();
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn retained(&self) -> usize {
        self.capacity.max(LOG_BACKLOG)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Plain text of every retained line, oldest first
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|l| l.text.as_str())
    }

    /// Styled rows for the most recent `capacity` lines, clipped to `width`
    pub fn rows(&self, width: usize) -> Vec<Line<'static>> {
        let skip = self.lines.len().saturating_sub(self.capacity);
        self.lines
            .iter()
            .skip(skip)
            .map(|line| Line::styled(clip(&line.text, width), style_for(line)))
            .collect()
    }
}

fn style_for(line: &LogLine) -> Style {
    match line.kind {
        LogKind::Echo => theme::echo(),
        LogKind::Notice => theme::dim(),
        LogKind::Response if line.text.starts_with("Error:") => theme::error(),
        LogKind::Response => theme::log_text(),
    }
}
