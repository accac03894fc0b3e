//! Animation Panel Widget
//!
//! Side region: a one-column separator followed by the current frame, or
//! a centered placeholder when no frames were found.

use ratatui::text::{Line, Span};

use marquee_core::{marquee, FrameBlock};

use crate::theme;

use super::fit;

const PLACEHOLDER_TITLE: &str = "ANIMATION";
const PLACEHOLDER_BODY: &str = "No animation loaded";

/// Rows for a side region of `width` x `height`
pub fn animation_rows(frame: Option<&FrameBlock>, width: u16, height: u16) -> Vec<Line<'static>> {
    let inner = usize::from(width.saturating_sub(1));
    let height = usize::from(height);

    let mut body: Vec<String> = match frame {
        Some(frame) => frame
            .rows()
            .iter()
            .take(height)
            .map(|row| fit(row, inner))
            .collect(),
        None => placeholder(inner, height),
    };
    body.resize(height, " ".repeat(inner));

    let style = if frame.is_some() {
        theme::frame()
    } else {
        theme::dim()
    };

    body.into_iter()
        .map(|row| {
            Line::from(vec![
                Span::styled("|", theme::separator()),
                Span::styled(row, style),
            ])
        })
        .collect()
}

fn placeholder(width: usize, height: usize) -> Vec<String> {
    let mut rows = vec![" ".repeat(width); height];
    let middle = height / 2;
    if height >= 3 {
        rows[middle - 1] = fit(&marquee::centered(PLACEHOLDER_TITLE, width), width);
        rows[middle + 1] = fit(&marquee::centered(PLACEHOLDER_BODY, width), width);
    } else if height > 0 {
        rows[middle] = fit(&marquee::centered(PLACEHOLDER_BODY, width), width);
    }
    rows
}
