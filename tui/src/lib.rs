//! Marquee Console TUI - Terminal surface for the marquee console
//!
//! Draws the console state owned by `marquee-core` onto a full-screen
//! terminal.
//!
//! # Architecture
//!
//! - **Compositor**: Fixed screen regions, redrawn only when their rows change
//! - **Widgets**: Banner, console log, animation panel and input bar rows
//! - **Events**: Crossterm keys mapped onto the core input line
//! - **App**: The cooperative loop tying input, dispatch and animation together

pub mod app;
pub mod compositor;
pub mod events;
pub mod screens;
pub mod theme;
pub mod widgets;

pub use app::App;
