//! Status bar widget
//!
//! One-line bar with connection state, accepted count, and scroll position.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use fakewatch_app::AppState;
use fakewatch_client::ConnectionState;

use crate::theme;

/// Status bar showing connection and feed stats
pub struct StatusBar<'a> {
    state: &'a AppState,
}

impl<'a> StatusBar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn connection_indicator(&self) -> Span<'static> {
        match self.state.connection {
            ConnectionState::Connecting => Span::styled(
                "○ Connecting",
                Style::default().fg(theme::STATUS_YELLOW),
            ),
            ConnectionState::Open => Span::styled(
                "● Live",
                Style::default()
                    .fg(theme::STATUS_GREEN)
                    .add_modifier(Modifier::BOLD),
            ),
            ConnectionState::Closed => Span::styled(
                "✗ Disconnected",
                Style::default()
                    .fg(theme::STATUS_RED)
                    .add_modifier(Modifier::BOLD),
            ),
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![
            Span::raw(" "),
            self.connection_indicator(),
            Span::styled(
                format!("  {} verdicts", self.state.accepted_count),
                theme::text_secondary(),
            ),
        ];

        if self.state.history_scroll > 0 {
            spans.push(Span::styled(
                format!("  ⬆ scrolled +{}", self.state.history_scroll),
                Style::default().fg(theme::STATUS_YELLOW),
            ));
        }

        let line = Line::from(spans);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}
