//! Marquee Layout
//!
//! Pure text layout for the banner. A stopped banner is centered; a
//! running one is a circular window over the text followed by a gap as
//! wide as the viewport, so the text scrolls fully out before it comes
//! back and the cycle length is `content + width`.

use crate::state::SharedState;
use crate::store::GlyphStore;

/// Center `text` in `width` columns; the odd column goes to the right.
/// Text wider than `width` is truncated.
pub fn centered(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.chars().take(width).collect();
    }
    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{text}{}", " ".repeat(left), " ".repeat(right))
}

/// `width` columns of the looped sequence `text + width spaces`, starting
/// at `position`
pub fn scroll_window(text: &str, position: usize, width: usize) -> String {
    let looped: Vec<char> = text.chars().chain(std::iter::repeat(' ').take(width)).collect();
    if looped.is_empty() {
        return String::new();
    }
    (0..width)
        .map(|offset| looped[(position + offset) % looped.len()])
        .collect()
}

/// [`scroll_window`] applied to every row of an ASCII-art block
pub fn ascii_window(art: &[String], position: usize, width: usize) -> Vec<String> {
    art.iter()
        .map(|row| scroll_window(row, position, width))
        .collect()
}

/// Columns scrolled through by one full marquee cycle, excluding the gap
pub fn content_len(state: &SharedState, glyphs: &GlyphStore) -> usize {
    if state.ascii_art {
        glyphs
            .render(&state.marquee_text)
            .first()
            .map_or(0, |row| row.chars().count())
    } else {
        state.marquee_text.chars().count()
    }
}

/// Banner rows for the current state: one row of plain text, or one row
/// per glyph line in ASCII-art mode
pub fn banner_rows(
    state: &SharedState,
    glyphs: &GlyphStore,
    position: usize,
    width: usize,
) -> Vec<String> {
    if state.ascii_art {
        let art = glyphs.render(&state.marquee_text);
        if state.animating {
            ascii_window(&art, position, width)
        } else {
            art.iter().map(|row| centered(row, width)).collect()
        }
    } else if state.animating {
        vec![scroll_window(&state.marquee_text, position, width)]
    } else {
        vec![centered(&state.marquee_text, width)]
    }
}
