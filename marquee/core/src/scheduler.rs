//! Animation Scheduler
//!
//! Two independent timers driven by the application loop:
//!
//! - marquee: one scroll step every `speed_ms` while animating
//! - frames: one frame every `frame_interval`, always looping
//!
//! Ticks only move counters and report what changed. They never draw and
//! never sleep; the caller passes the current [`Instant`].

use std::time::{Duration, Instant};

use crate::state::SharedState;

/// Horizontal extent of one marquee cycle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MarqueeExtent {
    /// Columns of banner content (characters, or art columns)
    pub content_len: usize,
    /// Columns visible in the banner region
    pub viewport_width: usize,
}

impl MarqueeExtent {
    pub fn new(content_len: usize, viewport_width: usize) -> Self {
        Self {
            content_len,
            viewport_width,
        }
    }

    /// Positions before the scroll wraps
    pub fn cycle(&self) -> usize {
        self.content_len + self.viewport_width
    }
}

/// Which counters moved during a tick
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// Banner needs a repaint
    pub marquee: bool,
    /// Side animation needs a repaint
    pub frame: bool,
}

impl TickOutcome {
    pub fn any(&self) -> bool {
        self.marquee || self.frame
    }
}

/// Marquee scroll position and frame index with their timers
#[derive(Clone, Debug)]
pub struct AnimationScheduler {
    marquee_position: usize,
    frame_index: usize,
    frame_interval: Duration,
    last_marquee_step: Instant,
    last_frame_step: Instant,
    /// Banner content the position belongs to
    content_key: Option<(String, bool)>,
}

impl AnimationScheduler {
    /// Create a scheduler whose timers start at `now`
    pub fn new(frame_interval: Duration, now: Instant) -> Self {
        Self {
            marquee_position: 0,
            frame_index: 0,
            frame_interval,
            last_marquee_step: now,
            last_frame_step: now,
            content_key: None,
        }
    }

    /// Advance whichever timers are due
    pub fn tick_at(
        &mut self,
        now: Instant,
        state: &SharedState,
        extent: MarqueeExtent,
        frame_count: usize,
    ) -> TickOutcome {
        let mut outcome = TickOutcome::default();

        let key = (state.marquee_text.clone(), state.ascii_art);
        if self.content_key.as_ref() != Some(&key) {
            if self.content_key.is_some() {
                self.reset_marquee(now);
                outcome.marquee = true;
            }
            self.content_key = Some(key);
        }

        if state.animating && extent.content_len > 0 {
            let speed = Duration::from_millis(state.speed_ms());
            if now.saturating_duration_since(self.last_marquee_step) >= speed {
                self.advance_marquee(extent);
                self.last_marquee_step = now;
                outcome.marquee = true;
            }
        } else {
            // Restarting must not fire a backlog of steps
            self.last_marquee_step = now;
        }

        if self.frame_index >= frame_count && self.frame_index != 0 {
            self.frame_index = 0;
            outcome.frame = true;
        }
        if frame_count > 0
            && now.saturating_duration_since(self.last_frame_step) >= self.frame_interval
        {
            self.advance_frame(frame_count);
            self.last_frame_step = now;
            outcome.frame = true;
        }

        outcome
    }

    /// One scroll step, wrapping at the cycle length
    pub fn advance_marquee(&mut self, extent: MarqueeExtent) {
        let cycle = extent.cycle();
        self.marquee_position = if cycle == 0 {
            0
        } else {
            (self.marquee_position + 1) % cycle
        };
    }

    /// One frame step, wrapping at `frame_count`
    pub fn advance_frame(&mut self, frame_count: usize) {
        self.frame_index = if frame_count == 0 {
            0
        } else {
            (self.frame_index + 1) % frame_count
        };
    }

    /// Scroll back to the start and restart the marquee timer
    pub fn reset_marquee(&mut self, now: Instant) {
        self.marquee_position = 0;
        self.last_marquee_step = now;
    }

    pub fn marquee_position(&self) -> usize {
        self.marquee_position
    }

    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }
}
