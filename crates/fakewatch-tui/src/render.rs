//! Top-level view function (View in TEA pattern)
//!
//! Pure projection of [`AppState`] onto the frame; no state mutation here.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use fakewatch_app::AppState;

use crate::layout;
use crate::theme;
use crate::widgets::{FeaturedCard, HistoryList, MainHeader, NoticeBanner, ScoreChart, StatusBar};

/// Render one complete frame from the current state.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(theme::DEEPEST_BG)),
        area,
    );

    let areas = layout::create(area, state.settings.ui.show_chart);

    frame.render_widget(MainHeader::new(&state.settings.server.url), areas.header);
    frame.render_widget(FeaturedCard::new(state.featured.as_ref()), areas.featured);
    frame.render_widget(
        HistoryList::new(&state.history, state.history_scroll),
        areas.history,
    );
    if let Some(chart) = areas.chart {
        frame.render_widget(ScoreChart::new(&state.scores), chart);
    }
    frame.render_widget(StatusBar::new(state), areas.status);

    // Notices overlay everything else, pinned just below the header.
    if !state.notices.is_empty() {
        let banner = NoticeBanner::new(&state.notices);
        let height = banner.height(area.height.saturating_sub(areas.header.height));
        let overlay = Rect::new(area.x, areas.header.bottom(), area.width, height);
        frame.render_widget(banner, overlay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fakewatch_core::Verdict;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::time::Instant;

    fn draw(state: &AppState) -> ratatui::buffer::Buffer {
        let backend = TestBackend::new(80, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| view(f, state)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn buffer_text(buf: &ratatui::buffer::Buffer) -> String {
        let mut out = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_empty_state_shows_placeholder() {
        let state = AppState::new();
        let text = buffer_text(&draw(&state));
        assert!(text.contains("Waiting for data"));
        assert!(text.contains("fakewatch"));
    }

    #[test]
    fn test_featured_verdict_rendered() {
        let mut state = AppState::new();
        state.accept_verdict(
            Verdict {
                title: "Moon landing faked, insists local parrot".into(),
                score: 8.5,
                url: "http://example.com/parrot".into(),
                reason: "Primary source is a parrot".into(),
            },
            "10:00:00".into(),
        );
        let text = buffer_text(&draw(&state));
        assert!(text.contains("Moon landing faked"));
        assert!(text.contains("8.5"));
    }

    #[test]
    fn test_demoted_verdict_appears_in_history() {
        let mut state = AppState::new();
        for n in 1..=3 {
            state.accept_verdict(
                Verdict {
                    title: format!("story {n}"),
                    score: n as f64,
                    url: format!("http://example.com/{n}"),
                    reason: format!("reason {n}"),
                },
                format!("t{n}"),
            );
        }
        let text = buffer_text(&draw(&state));
        // Newest is featured; the two older ones sit in the stream list.
        assert!(text.contains("story 3"));
        assert!(text.contains("story 2"));
        assert!(text.contains("story 1"));
        assert!(text.contains("Stream (2)"));
    }

    #[test]
    fn test_notice_banner_overlays() {
        let mut state = AppState::new();
        state.push_notice("WebSocket error.", Instant::now());
        let text = buffer_text(&draw(&state));
        assert!(text.contains("WebSocket error."));
    }

    #[test]
    fn test_chart_hidden_when_disabled() {
        let mut state = AppState::new();
        state.settings.ui.show_chart = false;
        state.accept_verdict(
            Verdict {
                title: "t".into(),
                score: 5.0,
                url: "u".into(),
                reason: "r".into(),
            },
            "10:00:00".into(),
        );
        let text = buffer_text(&draw(&state));
        assert!(!text.contains("Scores"));
    }
}
