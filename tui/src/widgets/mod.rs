//! Region content builders
//!
//! Each widget turns console state into the rows of one region. They are
//! pure: the compositor decides whether the rows reach the screen.

pub mod animation_panel;
pub mod banner;
pub mod console_log;
pub mod input_bar;

use unicode_width::UnicodeWidthChar;

pub use animation_panel::animation_rows;
pub use banner::banner_rows;
pub use console_log::ConsoleLog;
pub use input_bar::{input_row, InputView};

/// Clip `text` to `width` display columns
pub fn clip(text: &str, width: usize) -> String {
    let mut used = 0;
    text.chars()
        .take_while(|ch| {
            used += ch.width().unwrap_or(0);
            used <= width
        })
        .collect()
}

/// Clip, then right-pad with spaces to exactly `width` columns
pub fn fit(text: &str, width: usize) -> String {
    let clipped = clip(text, width);
    let used: usize = clipped.chars().map(|ch| ch.width().unwrap_or(0)).sum();
    format!("{clipped}{}", " ".repeat(width.saturating_sub(used)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip() {
        assert_eq!(clip("hello", 3), "hel");
        assert_eq!(clip("hi", 10), "hi");
        assert_eq!(clip("日本語", 5), "日本");
    }

    #[test]
    fn test_fit_pads() {
        assert_eq!(fit("ab", 4), "ab  ");
        assert_eq!(fit("abcdef", 4), "abcd");
        assert_eq!(fit("日本語", 5), "日本 ");
    }
}
