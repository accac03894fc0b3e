//! Marquee Core - Headless Engine for the Marquee Console
//!
//! Everything the console does that is not drawing: the shared state, the
//! command interpreter and its queue, the input line editor, animation
//! timing, the glyph and frame stores, banner text layout and
//! configuration loading.
//!
//! # Architecture
//!
//! ```text
//!   keys ──▶ InputLine ──▶ CommandSender ─┐
//!                                          ▼
//!                                    CommandQueue ──▶ CommandInterpreter
//!                                                          │
//!                                                          ▼
//!   AnimationScheduler ◀──────────────────────────── SharedState
//!          │                                               │
//!          └──────────────▶ terminal surface ◀─────────────┘
//! ```
//!
//! The application loop owns [`SharedState`] and lends it to each component
//! in turn. Nothing here blocks, sleeps or touches the terminal.
//!
//! # Module Overview
//!
//! - [`state`]: shared console state
//! - [`command`]: tokenizer and dispatch table
//! - [`queue`]: non-blocking line handoff
//! - [`input`] / [`history`]: line editor with recall and completion
//! - [`scheduler`]: marquee and frame timers
//! - [`marquee`]: centered and scrolling banner layout
//! - [`store`]: glyph and frame files
//! - [`config`]: TOML, environment and CLI settings
//!
//! # No TUI Dependencies
//!
//! This crate has no dependency on ratatui, crossterm or any other terminal
//! library.

pub mod command;
pub mod config;
pub mod history;
pub mod input;
pub mod marquee;
pub mod queue;
pub mod scheduler;
pub mod state;
pub mod store;

pub use command::{Command, CommandError, CommandInterpreter, CommandResponse};
pub use history::{CommandHistory, DEFAULT_HISTORY_LIMIT};
pub use input::{InputKey, InputLine, InputOutcome};
pub use queue::{command_queue, CommandQueue, CommandSender, Dispatched};
pub use scheduler::{AnimationScheduler, MarqueeExtent, TickOutcome};
pub use state::{SharedState, DEFAULT_MARQUEE_TEXT, DEFAULT_SPEED_MS, MIN_SPEED_MS};
pub use store::{
    FrameBlock, FrameStore, GlyphBlock, GlyphStore, StoreError, FRAME_ROWS, GLYPH_HEIGHT,
    GLYPH_WIDTH,
};

// Config exports
pub use config::{
    default_config_path, load_config, load_config_from_path, ConfigError, ConfigOverrides,
    ConfigSource, MarqueeConfig, MarqueeConfigToml,
};
