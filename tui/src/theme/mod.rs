//! Theme and Colors
//!
//! Palette for the console regions. Plain terminal colors where the
//! original look is a bare console, RGB accents for feedback lines.

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// Banner
// ============================================================================

/// Banner border (`+====+`)
pub const BANNER_BORDER: Color = Color::Rgb(120, 120, 140);

/// Banner text, plain and ASCII-art
pub const BANNER_TEXT: Color = Color::Rgb(255, 223, 128);

// ============================================================================
// Console Log
// ============================================================================

/// Echoed input lines
pub const ECHO_GREEN: Color = Color::Rgb(130, 220, 130);

/// Ordinary responses
pub const LOG_TEXT: Color = Color::Reset;

/// `Error:` lines
pub const ERROR_RED: Color = Color::Rgb(255, 80, 80);

/// Hints, cancellations, completion lists
pub const DIM_GRAY: Color = Color::Rgb(100, 100, 100);

// ============================================================================
// Side Animation
// ============================================================================

/// Region separator
pub const SEPARATOR: Color = Color::Rgb(80, 80, 80);

/// Animation frames
pub const FRAME_TEXT: Color = Color::Rgb(100, 180, 255);

// ============================================================================
// Input
// ============================================================================

/// Prompt in front of the buffer
pub const PROMPT: Color = Color::Magenta;

// ============================================================================
// Styles
// ============================================================================

pub fn banner_border() -> Style {
    Style::default().fg(BANNER_BORDER)
}

pub fn banner_text() -> Style {
    Style::default().fg(BANNER_TEXT).add_modifier(Modifier::BOLD)
}

pub fn error() -> Style {
    Style::default().fg(ERROR_RED)
}

pub fn echo() -> Style {
    Style::default().fg(ECHO_GREEN)
}

pub fn dim() -> Style {
    Style::default().fg(DIM_GRAY)
}

pub fn log_text() -> Style {
    Style::default().fg(LOG_TEXT)
}

pub fn separator() -> Style {
    Style::default().fg(SEPARATOR)
}

pub fn frame() -> Style {
    Style::default().fg(FRAME_TEXT)
}

pub fn prompt() -> Style {
    Style::default().fg(PROMPT)
}
