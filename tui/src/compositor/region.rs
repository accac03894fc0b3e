//! Region - one fixed area of the screen

use ratatui::layout::Rect;
use ratatui::text::Line;

use super::layout::RegionId;

/// A fixed screen area and the rows last written into it
#[derive(Debug)]
pub struct Region {
    pub id: RegionId,
    /// Absolute position and size
    pub bounds: Rect,
    /// `None` until the first write after creation or a layout change
    last_rows: Option<Vec<Line<'static>>>,
}

impl Region {
    pub fn new(id: RegionId, bounds: Rect) -> Self {
        Self {
            id,
            bounds,
            last_rows: None,
        }
    }

    /// Whether `rows` differ from what is on screen
    pub fn differs(&self, rows: &[Line<'static>]) -> bool {
        self.last_rows.as_deref() != Some(rows)
    }

    pub(super) fn remember(&mut self, rows: Vec<Line<'static>>) {
        self.last_rows = Some(rows);
    }

    pub(super) fn forget(&mut self) {
        self.last_rows = None;
    }

    pub fn last_rows(&self) -> Option<&[Line<'static>]> {
        self.last_rows.as_deref()
    }
}
