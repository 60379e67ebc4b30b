//! Transient notice banner
//!
//! Renders live notices as full-width lines overlaid at the top of the
//! screen, below the header. Notices expire on their own; this widget only
//! draws whatever the state still holds.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::Widget,
};

use fakewatch_app::Notice;

use crate::theme;

/// Banner stack for transient transport notices
pub struct NoticeBanner<'a> {
    notices: &'a [Notice],
}

impl<'a> NoticeBanner<'a> {
    pub fn new(notices: &'a [Notice]) -> Self {
        Self { notices }
    }

    /// Rows this banner needs, capped at the available height.
    pub fn height(&self, available: u16) -> u16 {
        (self.notices.len() as u16).min(available)
    }
}

impl Widget for NoticeBanner<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.notices.is_empty() || area.height == 0 {
            return;
        }

        for (row, notice) in self.notices.iter().take(area.height as usize).enumerate() {
            let y = area.y + row as u16;
            // Paint the full row so the banner reads as a solid strip.
            for x in area.x..area.x + area.width {
                buf[(x, y)].set_style(theme::notice_style());
            }
            let line = Line::styled(format!(" ⚠ {}", notice.message), theme::notice_style());
            buf.set_line(area.x, y, &line, area.width);
        }
    }
}
