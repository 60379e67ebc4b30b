//! History list widget
//!
//! Demoted former featured verdicts, newest first. Two rows per entry:
//! score + title, then the reason, dimmed.

use std::collections::VecDeque;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use fakewatch_core::Verdict;

use crate::theme;

/// Rows consumed by one history entry.
const ENTRY_HEIGHT: u16 = 2;

/// Scrollable list of past verdicts
pub struct HistoryList<'a> {
    history: &'a VecDeque<Verdict>,
    scroll: usize,
}

impl<'a> HistoryList<'a> {
    pub fn new(history: &'a VecDeque<Verdict>, scroll: usize) -> Self {
        Self { history, scroll }
    }
}

impl Widget for HistoryList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!("Stream ({})", self.history.len());
        let block = theme::panel_block(&title);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if self.history.is_empty() {
            let line = Line::from(Span::styled(
                "No demoted items yet",
                theme::text_muted(),
            ));
            buf.set_line(inner.x, inner.y, &line, inner.width);
            return;
        }

        let visible = (inner.height / ENTRY_HEIGHT) as usize;
        let mut y = inner.y;
        for verdict in self.history.iter().skip(self.scroll).take(visible.max(1)) {
            let head = Line::from(vec![
                Span::styled(
                    format!("▌{:>4} ", verdict.score_display()),
                    theme::score_style(verdict.score),
                ),
                Span::styled(
                    verdict.title.clone(),
                    Style::default()
                        .fg(theme::TEXT_PRIMARY)
                        .add_modifier(Modifier::BOLD),
                ),
            ]);
            buf.set_line(inner.x, y, &head, inner.width);

            if y + 1 < inner.y + inner.height {
                let detail = Line::from(vec![
                    Span::raw("      "),
                    Span::styled(verdict.reason.clone(), theme::text_muted()),
                ]);
                buf.set_line(inner.x, y + 1, &detail, inner.width);
            }

            y += ENTRY_HEIGHT;
            if y >= inner.y + inner.height {
                break;
            }
        }
    }
}
