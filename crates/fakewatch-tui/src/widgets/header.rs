//! Header bar widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme;

/// Main header showing app title, feed URL, and keybindings
pub struct MainHeader<'a> {
    url: &'a str,
}

impl<'a> MainHeader<'a> {
    pub fn new(url: &'a str) -> Self {
        Self { url }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = theme::panel_block("");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let line = Line::from(vec![
            Span::styled(
                " fakewatch ",
                Style::default()
                    .fg(theme::TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("· {} ", self.url), theme::text_muted()),
            Span::styled("  [q] quit  [↑↓] history", theme::text_muted()),
        ]);
        buf.set_line(inner.x, inner.y, &line, inner.width);
    }
}
