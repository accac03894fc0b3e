//! Region Compositor
//!
//! Owns the fixed screen regions and a full-screen output buffer. Each
//! region is rewritten only when its rows differ from the last write, and
//! the caller only draws when something was rewritten. All writes address
//! absolute screen positions.

mod dirty;
mod layout;
mod region;

use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::text::Line;

pub use dirty::DirtyRegions;
pub use layout::{
    RegionId, ScreenLayout, ASCII_BANNER_HEIGHT, LOG_WIDTH_PERCENT, PLAIN_BANNER_HEIGHT,
};
pub use region::Region;

/// The compositor writes region rows into one output buffer
pub struct Compositor {
    /// Regions in paint order
    regions: Vec<Region>,
    /// Composited screen
    output: Buffer,
    layout: ScreenLayout,
    /// Output changed since the last draw
    pending_draw: bool,
    /// Where the terminal cursor rests after a draw
    cursor: Option<Position>,
}

impl Compositor {
    /// Create a compositor for the given layout
    pub fn new(layout: ScreenLayout) -> Self {
        Self {
            regions: RegionId::ALL
                .into_iter()
                .map(|id| Region::new(id, layout.rect(id)))
                .collect(),
            output: Buffer::empty(layout.area),
            layout,
            pending_draw: true,
            cursor: None,
        }
    }

    /// Move every region; the next write to each one repaints it
    pub fn apply_layout(&mut self, layout: ScreenLayout) {
        if layout.area != self.layout.area {
            self.output = Buffer::empty(layout.area);
        }
        for region in &mut self.regions {
            let bounds = layout.rect(region.id);
            if bounds != region.bounds {
                Self::clear_rect(&mut self.output, region.bounds);
            }
            region.bounds = bounds;
            region.forget();
        }
        self.layout = layout;
        self.pending_draw = true;
    }

    pub fn layout(&self) -> &ScreenLayout {
        &self.layout
    }

    pub fn region(&self, id: RegionId) -> Option<&Region> {
        self.regions.iter().find(|r| r.id == id)
    }

    /// Replace a region's rows. Returns whether any cell was rewritten.
    ///
    /// Rows beyond the region height are dropped and each row is clipped
    /// to the region width.
    pub fn update(&mut self, id: RegionId, rows: Vec<Line<'static>>) -> bool {
        let Some(region) = self.regions.iter_mut().find(|r| r.id == id) else {
            return false;
        };
        if !region.differs(&rows) {
            return false;
        }

        let bounds = region.bounds;
        Self::clear_rect(&mut self.output, bounds);
        for (offset, row) in rows.iter().take(usize::from(bounds.height)).enumerate() {
            self.output
                .set_line(bounds.x, bounds.y + offset as u16, row, bounds.width);
        }

        region.remember(rows);
        self.pending_draw = true;
        true
    }

    /// Park the terminal cursor after the next draw
    pub fn set_cursor(&mut self, cursor: Option<Position>) {
        if self.cursor != cursor {
            self.cursor = cursor;
            self.pending_draw = true;
        }
    }

    pub fn cursor(&self) -> Option<Position> {
        self.cursor
    }

    /// Whether the output changed since the last [`mark_drawn`](Self::mark_drawn)
    pub fn needs_draw(&self) -> bool {
        self.pending_draw
    }

    pub fn mark_drawn(&mut self) {
        self.pending_draw = false;
    }

    pub fn output(&self) -> &Buffer {
        &self.output
    }

    /// Copy the output into a frame buffer of possibly different size
    pub fn blit(&self, target: &mut Buffer) {
        let area = target.area;
        let out = self.output.area;
        for y in 0..area.height.min(out.height) {
            for x in 0..area.width.min(out.width) {
                target[(area.x + x, area.y + y)] = self.output[(out.x + x, out.y + y)].clone();
            }
        }
    }

    fn clear_rect(output: &mut Buffer, rect: Rect) {
        let rect = rect.intersection(output.area);
        for y in rect.top()..rect.bottom() {
            for x in rect.left()..rect.right() {
                output[(x, y)].reset();
            }
        }
    }
}
