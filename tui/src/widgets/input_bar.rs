//! Input Bar Widget
//!
//! `prompt + buffer` on one row, scrolled horizontally so the edit point
//! stays visible.

use ratatui::text::{Line, Span};

use crate::theme;

/// Rendered input row and where the cursor belongs within it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputView {
    pub row: Line<'static>,
    /// Column of the edit point relative to the region's left edge
    pub cursor_x: u16,
}

/// Lay out the prompt and buffer for a row `width` columns wide.
///
/// `cursor` is a character offset into `buffer`.
pub fn input_row(prompt: &str, buffer: &str, cursor: usize, width: u16) -> InputView {
    let width = usize::from(width);
    let prompt_len = prompt.chars().count();
    let cursor_col = prompt_len + cursor;

    // Keep one column free for the cursor at the end of the line
    let offset = (cursor_col + 1).saturating_sub(width);

    let visible_prompt: String = prompt.chars().skip(offset).take(width).collect();
    let buffer_skip = offset.saturating_sub(prompt_len);
    let buffer_room = width.saturating_sub(visible_prompt.chars().count());
    let visible_buffer: String = buffer.chars().skip(buffer_skip).take(buffer_room).collect();

    let mut spans = Vec::with_capacity(2);
    if !visible_prompt.is_empty() {
        spans.push(Span::styled(visible_prompt, theme::prompt()));
    }
    spans.push(Span::raw(visible_buffer));

    InputView {
        row: Line::from(spans),
        cursor_x: cursor_col.saturating_sub(offset).min(width.saturating_sub(1)) as u16,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_short_line_unscrolled() {
        let view = input_row("> ", "help", 4, 20);
        assert_eq!(view.row.to_string(), "> help");
        assert_eq!(view.cursor_x, 6);
    }

    #[test]
    fn test_cursor_in_middle() {
        let view = input_row("> ", "help", 1, 20);
        assert_eq!(view.cursor_x, 3);
    }

    #[test]
    fn test_long_line_scrolls_to_cursor() {
        let view = input_row("> ", "abcdefghij", 10, 8);
        assert_eq!(view.cursor_x, 7);
        assert_eq!(view.row.to_string(), "defghij");
    }

    #[test]
    fn test_scroll_back_to_start() {
        let view = input_row("> ", "abcdefghij", 0, 8);
        assert_eq!(view.cursor_x, 2);
        assert_eq!(view.row.to_string(), "> abcdef");
    }
}
