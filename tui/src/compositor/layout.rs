//! Screen Layout
//!
//! Fixed split of the terminal into the four console regions:
//!
//! ```text
//! +==============================================+
//! | banner (3 rows, or 8 in ASCII-art mode)      |
//! +==============================================+
//! log (60%)                    |side animation
//!                              |
//! prompt> input
//! ```

use ratatui::layout::Rect;

use marquee_core::GLYPH_HEIGHT;

/// Banner rows in plain mode: border, text, border
pub const PLAIN_BANNER_HEIGHT: u16 = 3;

/// Banner rows in ASCII-art mode: border, glyph rows, border
pub const ASCII_BANNER_HEIGHT: u16 = GLYPH_HEIGHT as u16 + 2;

/// Share of the body width given to the console log
pub const LOG_WIDTH_PERCENT: u16 = 60;

/// Identifies one fixed region of the screen
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegionId {
    Banner,
    Log,
    Side,
    Input,
}

impl RegionId {
    /// Every region, in paint order
    pub const ALL: [RegionId; 4] = [
        RegionId::Banner,
        RegionId::Log,
        RegionId::Side,
        RegionId::Input,
    ];
}

/// Absolute rectangles of every region
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenLayout {
    pub area: Rect,
    pub banner: Rect,
    pub log: Rect,
    /// Includes the one-column separator on its left edge
    pub side: Rect,
    pub input: Rect,
}

impl ScreenLayout {
    /// Split `area` for the given banner mode
    pub fn compute(area: Rect, ascii_art: bool) -> Self {
        let wanted = if ascii_art {
            ASCII_BANNER_HEIGHT
        } else {
            PLAIN_BANNER_HEIGHT
        };
        let banner_height = wanted.min(area.height);
        let input_height = u16::from(area.height > banner_height);
        let body_height = area.height - banner_height - input_height;
        let body_y = area.y + banner_height;

        let log_width = (u32::from(area.width) * u32::from(LOG_WIDTH_PERCENT) / 100) as u16;

        Self {
            area,
            banner: Rect::new(area.x, area.y, area.width, banner_height),
            log: Rect::new(area.x, body_y, log_width, body_height),
            side: Rect::new(area.x + log_width, body_y, area.width - log_width, body_height),
            input: Rect::new(
                area.x,
                body_y + body_height,
                area.width,
                input_height,
            ),
        }
    }

    pub fn rect(&self, id: RegionId) -> Rect {
        match id {
            RegionId::Banner => self.banner,
            RegionId::Log => self.log,
            RegionId::Side => self.side,
            RegionId::Input => self.input,
        }
    }

    /// Columns between the banner's side borders
    pub fn banner_inner_width(&self) -> usize {
        usize::from(self.banner.width.saturating_sub(2))
    }
}
