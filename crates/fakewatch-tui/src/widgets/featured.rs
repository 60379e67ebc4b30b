//! Featured verdict panel
//!
//! The single most recently accepted verdict, rendered prominently. Until
//! the first verdict arrives this panel doubles as the loading placeholder.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use fakewatch_core::Verdict;

use crate::theme;

/// Featured verdict card
pub struct FeaturedCard<'a> {
    verdict: Option<&'a Verdict>,
}

impl<'a> FeaturedCard<'a> {
    pub fn new(verdict: Option<&'a Verdict>) -> Self {
        Self { verdict }
    }
}

impl Widget for FeaturedCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(verdict) = self.verdict else {
            // Loading placeholder; replaced the moment data arrives.
            let block = theme::panel_block("Latest");
            Paragraph::new(Line::from(Span::styled(
                "Waiting for data…",
                theme::text_muted(),
            )))
            .block(block)
            .render(area, buf);
            return;
        };

        // Border takes the severity color, like the original's red card edge.
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Thick)
            .border_style(Style::default().fg(theme::score_color(verdict.score)))
            .title(" Latest ");

        let lines = vec![
            Line::from(Span::styled(
                verdict.title.clone(),
                Style::default()
                    .fg(theme::TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::styled("Fake Score: ", theme::text_secondary()),
                Span::styled(verdict.score_display(), theme::score_style(verdict.score)),
            ]),
            Line::from(vec![
                Span::styled("URL: ", theme::text_secondary()),
                Span::styled(verdict.url.clone(), Style::default().fg(theme::TEXT_PRIMARY)),
            ]),
            Line::from(vec![
                Span::styled("Reason: ", theme::text_secondary()),
                Span::styled(verdict.reason.clone(), theme::text_secondary()),
            ]),
        ];

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
