//! Rolling score chart
//!
//! Sparkline over the retained score window, oldest → newest. The series is
//! capped upstream; this widget just draws whatever the buffer holds.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Sparkline, Widget},
};

use fakewatch_core::ScoreSeries;

use crate::theme;

/// Live sparkline over the rolling score series
pub struct ScoreChart<'a> {
    series: &'a ScoreSeries,
}

impl<'a> ScoreChart<'a> {
    pub fn new(series: &'a ScoreSeries) -> Self {
        Self { series }
    }

    fn title(&self) -> String {
        match (self.series.oldest_label(), self.series.latest_label()) {
            (Some(oldest), Some(latest)) if oldest != latest => {
                format!("Scores {oldest} → {latest}")
            }
            (Some(latest), _) => format!("Scores since {latest}"),
            _ => "Scores".to_string(),
        }
    }
}

impl Widget for ScoreChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = self.title();
        let block = theme::panel_block(&title);

        let color = self
            .series
            .latest_score()
            .map(theme::score_color)
            .unwrap_or(theme::TEXT_MUTED);

        // Sparkline wants unsigned integers; scores are small non-negative
        // values, so a straight cast keeps relative bar heights intact.
        let values: Vec<u64> = self
            .series
            .values()
            .into_iter()
            .map(|v| v.max(0.0).round() as u64)
            .collect();

        Sparkline::default()
            .block(block)
            .style(Style::default().fg(color))
            .data(values)
            .render(area, buf);
    }
}
