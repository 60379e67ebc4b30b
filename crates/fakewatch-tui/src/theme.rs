//! Colors and semantic styles for the feed UI

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black;
pub const CARD_BG: Color = Color::Black;

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_FEATURED: Color = Color::Red;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

// --- Status ---
pub const STATUS_GREEN: Color = Color::Green;
pub const STATUS_RED: Color = Color::Red;
pub const STATUS_YELLOW: Color = Color::Yellow;

/// Score thresholds for severity coloring. Scores run 0-10 from the
/// analyzer; anything at or above `SCORE_HIGH` is flagged red.
pub const SCORE_HIGH: f64 = 7.0;
pub const SCORE_MEDIUM: f64 = 4.0;

/// Color for a fakeness score: green → yellow → red with severity.
pub fn score_color(score: f64) -> Color {
    if score >= SCORE_HIGH {
        STATUS_RED
    } else if score >= SCORE_MEDIUM {
        STATUS_YELLOW
    } else {
        STATUS_GREEN
    }
}

pub fn score_style(score: f64) -> Style {
    Style::default()
        .fg(score_color(score))
        .add_modifier(Modifier::BOLD)
}

pub fn text_secondary() -> Style {
    Style::default().fg(TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(TEXT_MUTED)
}

/// Standard bordered panel block.
pub fn panel_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(BORDER_DIM))
        .title(format!(" {title} "))
}

/// Styling for the transient notice banner.
pub fn notice_style() -> Style {
    Style::default()
        .fg(Color::White)
        .bg(STATUS_RED)
        .add_modifier(Modifier::BOLD)
}
