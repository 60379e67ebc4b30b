//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Fixed height of the featured verdict panel (4 content rows + borders).
const FEATURED_HEIGHT: u16 = 6;

/// Fixed height of the score chart panel when enabled.
const CHART_HEIGHT: u16 = 8;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title bar
    pub header: Rect,

    /// Featured (most recent) verdict panel
    pub featured: Rect,

    /// History list (demoted verdicts, newest first)
    pub history: Rect,

    /// Rolling score chart; `None` when disabled in settings
    pub chart: Option<Rect>,

    /// One-line status bar
    pub status: Rect,
}

/// Create the main screen layout.
///
/// Vertical stack: header, featured card, history list (takes the
/// remainder), optional chart, status bar.
pub fn create(area: Rect, show_chart: bool) -> ScreenAreas {
    let mut constraints = vec![
        Constraint::Length(3),               // Header
        Constraint::Length(FEATURED_HEIGHT), // Featured verdict
        Constraint::Min(3),                  // History
    ];
    if show_chart {
        constraints.push(Constraint::Length(CHART_HEIGHT));
    }
    constraints.push(Constraint::Length(1)); // Status bar

    let chunks = Layout::vertical(constraints).split(area);

    ScreenAreas {
        header: chunks[0],
        featured: chunks[1],
        history: chunks[2],
        chart: show_chart.then(|| chunks[3]),
        status: *chunks.last().expect("status chunk"),
    }
}
