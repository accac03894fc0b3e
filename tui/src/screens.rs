//! Welcome and Farewell Screens

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use crate::theme;

/// Written into the console log before the first frame
pub const WELCOME_LINES: &[&str] = &[
    "Welcome to the Marquee Console",
    "Type 'help' for available commands",
];

pub const FAREWELL_TITLE: &str = "Thank you for using the Marquee Console!";
pub const FAREWELL_HINT: &str = "Press any key to exit...";

/// Clear `area` and center the farewell message in it
pub fn render_farewell(buf: &mut Buffer, area: Rect) {
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            buf[(x, y)].reset();
        }
    }
    if area.height == 0 {
        return;
    }

    let middle = area.y + area.height / 2;
    centered_line(buf, area, middle, FAREWELL_TITLE, theme::banner_text());
    if middle + 2 < area.bottom() {
        centered_line(buf, area, middle + 2, FAREWELL_HINT, theme::dim());
    }
}

fn centered_line(buf: &mut Buffer, area: Rect, y: u16, text: &str, style: ratatui::style::Style) {
    let len = text.chars().count() as u16;
    let x = area.x + area.width.saturating_sub(len) / 2;
    buf.set_stringn(x, y, text, usize::from(area.width), style);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_farewell_is_centered() {
        let area = Rect::new(0, 0, 60, 11);
        let mut buf = Buffer::empty(area);
        buf.set_string(0, 0, "leftover", ratatui::style::Style::default());
        render_farewell(&mut buf, area);

        assert_eq!(buf[(0, 0)].symbol(), " ");
        let row: String = (0..60).map(|x| buf[(x, 5)].symbol()).collect();
        assert_eq!(row.trim(), FAREWELL_TITLE);
        let hint: String = (0..60).map(|x| buf[(x, 7)].symbol()).collect();
        assert_eq!(hint.trim(), FAREWELL_HINT);
    }

    #[test]
    fn test_farewell_in_tiny_area() {
        let area = Rect::new(0, 0, 10, 1);
        let mut buf = Buffer::empty(area);
        render_farewell(&mut buf, area);
        let row: String = (0..10).map(|x| buf[(x, 0)].symbol()).collect();
        assert_eq!(row, "Thank you ");
    }
}
