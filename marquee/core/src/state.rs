//! Shared Console State
//!
//! The single mutable state object of the console. The application loop
//! owns it and lends it out: the command interpreter mutates it, the
//! scheduler and the compositor only read it.

/// Lowest accepted marquee speed. Anything faster would busy-spin the loop.
pub const MIN_SPEED_MS: u64 = 10;

/// Default marquee speed in milliseconds between scroll steps
pub const DEFAULT_SPEED_MS: u64 = 100;

/// Default banner text
pub const DEFAULT_MARQUEE_TEXT: &str = "Welcome to the Marquee Console";

/// State shared by every component of the console
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SharedState {
    /// Cleared by `exit`; the loop stops at the top of the next cycle
    pub running: bool,
    /// Whether the banner scrolls
    pub animating: bool,
    /// Milliseconds between marquee scroll steps (never below [`MIN_SPEED_MS`])
    speed_ms: u64,
    /// Banner text
    pub marquee_text: String,
    /// Render the banner with ASCII-art glyphs instead of plain text
    pub ascii_art: bool,
}

impl SharedState {
    /// Create a running, non-animating state with the given banner text
    pub fn new(marquee_text: impl Into<String>) -> Self {
        Self {
            running: true,
            animating: false,
            speed_ms: DEFAULT_SPEED_MS,
            marquee_text: marquee_text.into(),
            ascii_art: false,
        }
    }

    /// Current marquee speed in milliseconds
    pub fn speed_ms(&self) -> u64 {
        self.speed_ms
    }

    /// Set the marquee speed, clamped to [`MIN_SPEED_MS`].
    ///
    /// Returns the value actually stored.
    pub fn set_speed_ms(&mut self, speed_ms: u64) -> u64 {
        self.speed_ms = speed_ms.max(MIN_SPEED_MS);
        self.speed_ms
    }

    /// One-line dump used by the `status` command
    pub fn describe(&self) -> String {
        format!(
            "running: {}, animating: {}, speed: {}ms, ascii_art: {}, text: \"{}\"",
            self.running, self.animating, self.speed_ms, self.ascii_art, self.marquee_text
        )
    }
}

impl Default for SharedState {
    fn default() -> Self {
        Self::new(DEFAULT_MARQUEE_TEXT)
    }
}
