//! Banner Widget
//!
//! Frames the marquee rows between `+===+` borders and `|` sides.

use ratatui::text::{Line, Span};

use marquee_core::{marquee, GlyphStore, SharedState};

use crate::theme;

use super::{clip, fit};

/// Rows for a banner `width` columns wide
pub fn banner_rows(
    state: &SharedState,
    glyphs: &GlyphStore,
    position: usize,
    width: u16,
) -> Vec<Line<'static>> {
    let width = usize::from(width);
    let inner = width.saturating_sub(2);

    let border = if width >= 2 {
        format!("+{}+", "=".repeat(inner))
    } else {
        "+".repeat(width)
    };
    let border = Line::styled(border, theme::banner_border());

    let mut rows = vec![border.clone()];
    for content in marquee::banner_rows(state, glyphs, position, inner) {
        if width < 2 {
            rows.push(Line::styled(clip(&content, width), theme::banner_text()));
            continue;
        }
        rows.push(Line::from(vec![
            Span::styled("|", theme::banner_border()),
            Span::styled(fit(&content, inner), theme::banner_text()),
            Span::styled("|", theme::banner_border()),
        ]));
    }
    rows.push(border);
    rows
}
