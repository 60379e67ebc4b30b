//! Application state (Model in TEA pattern)

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use fakewatch_client::ConnectionState;
use fakewatch_core::{ScoreSeries, Verdict};

use crate::config::Settings;

/// How long a transient notice stays visible.
pub const NOTICE_LIFETIME: Duration = Duration::from_secs(5);

/// A transient user-visible notice (transport error, connection closed).
///
/// Each notice carries its own deadline, so multiple notices coexist and
/// expire independently. There is no cancellation; a new notice never cuts
/// an older one short.
#[derive(Debug, Clone)]
pub struct Notice {
    pub message: String,
    expires_at: Instant,
}

impl Notice {
    pub fn new(message: impl Into<String>, now: Instant) -> Self {
        Self {
            message: message.into(),
            expires_at: now + NOTICE_LIFETIME,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Complete application state.
///
/// The featured slot, history list, and score series are only ever mutated
/// from `update` on the UI loop, one message at a time; no synchronization
/// is needed.
#[derive(Debug)]
pub struct AppState {
    pub settings: Settings,

    /// Connection lifecycle as last reported by the transport.
    pub connection: ConnectionState,

    /// The single most recently accepted verdict. Replaced in place on each
    /// accepted frame; the previous occupant demotes into `history`.
    pub featured: Option<Verdict>,

    /// Demoted former featured verdicts, newest first. Capped at
    /// `settings.feed.history_limit`; the oldest entry is evicted.
    pub history: VecDeque<Verdict>,

    /// Rolling (timestamp, score) pairs feeding the chart.
    pub scores: ScoreSeries,

    /// Live transient notices, unexpired only.
    pub notices: Vec<Notice>,

    /// Scroll offset into the history list (0 = newest at top).
    pub history_scroll: usize,

    /// Total verdicts accepted this session (for the status bar).
    pub accepted_count: u64,

    should_quit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings,
            connection: ConnectionState::Connecting,
            featured: None,
            history: VecDeque::new(),
            scores: ScoreSeries::default(),
            notices: Vec::new(),
            history_scroll: 0,
            accepted_count: 0,
            should_quit: false,
        }
    }

    /// Whether any verdict has arrived yet (controls the loading placeholder).
    pub fn has_data(&self) -> bool {
        self.featured.is_some()
    }

    /// Accept a validated verdict, in order:
    /// overwrite the featured slot, demote the previous occupant to the
    /// front of history (skipped on the very first verdict), enforce the
    /// history cap, and append the score to the rolling series.
    pub fn accept_verdict(&mut self, verdict: Verdict, time_label: String) {
        let score = verdict.score;
        if let Some(previous) = self.featured.replace(verdict) {
            self.history.push_front(previous);
            self.history.truncate(self.settings.feed.history_limit);
        }
        self.scores.push(time_label, score);
        self.accepted_count += 1;
    }

    /// Add a transient notice with its own expiry deadline.
    pub fn push_notice(&mut self, message: impl Into<String>, now: Instant) {
        self.notices.push(Notice::new(message, now));
    }

    /// Drop every notice whose deadline has passed.
    pub fn prune_notices(&mut self, now: Instant) {
        self.notices.retain(|n| !n.is_expired(now));
    }

    // ── History scrolling ────────────────────────────────────────────────

    pub fn scroll_up(&mut self, lines: usize) {
        self.history_scroll = self
            .history_scroll
            .saturating_add(lines)
            .min(self.history.len().saturating_sub(1));
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.history_scroll = self.history_scroll.saturating_sub(lines);
    }

    pub fn scroll_to_oldest(&mut self) {
        self.history_scroll = self.history.len().saturating_sub(1);
    }

    pub fn scroll_to_newest(&mut self) {
        self.history_scroll = 0;
    }

    // ── Quit handling ────────────────────────────────────────────────────

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verdict(n: u32) -> Verdict {
        Verdict {
            title: format!("title {n}"),
            score: n as f64,
            url: format!("http://example.com/{n}"),
            reason: format!("reason {n}"),
        }
    }

    #[test]
    fn test_first_verdict_demotes_nothing() {
        let mut state = AppState::new();
        state.accept_verdict(verdict(1), "10:00:00".into());
        assert_eq!(state.featured.as_ref().unwrap().title, "title 1");
        assert!(state.history.is_empty());
        assert_eq!(state.scores.len(), 1);
    }

    #[test]
    fn test_featured_is_newest_and_history_front_is_previous() {
        let mut state = AppState::new();
        for n in 1..=5 {
            state.accept_verdict(verdict(n), format!("t{n}"));
            assert_eq!(state.featured.as_ref().unwrap().title, format!("title {n}"));
            if n >= 2 {
                assert_eq!(
                    state.history.front().unwrap().title,
                    format!("title {}", n - 1)
                );
            }
        }
        // Never duplicated, never lost: 5 accepted = 1 featured + 4 history.
        assert_eq!(state.history.len(), 4);
        assert_eq!(state.accepted_count, 5);
    }

    #[test]
    fn test_history_cap_evicts_oldest() {
        let mut state = AppState::new();
        state.settings.feed.history_limit = 3;
        for n in 1..=6 {
            state.accept_verdict(verdict(n), format!("t{n}"));
        }
        assert_eq!(state.history.len(), 3);
        // Newest-first: 5, 4, 3 (1 and 2 evicted; 6 is featured).
        let titles: Vec<_> = state.history.iter().map(|v| v.title.as_str()).collect();
        assert_eq!(titles, vec!["title 5", "title 4", "title 3"]);
    }

    #[test]
    fn test_notices_expire_independently() {
        let mut state = AppState::new();
        let t0 = Instant::now();
        state.push_notice("WebSocket error.", t0);
        state.push_notice("WebSocket connection closed.", t0 + Duration::from_secs(2));
        assert_eq!(state.notices.len(), 2);

        // Just before the first deadline: both live.
        state.prune_notices(t0 + Duration::from_millis(4999));
        assert_eq!(state.notices.len(), 2);

        // First expires at t0+5s; second lives until t0+7s.
        state.prune_notices(t0 + Duration::from_secs(5));
        assert_eq!(state.notices.len(), 1);
        assert_eq!(state.notices[0].message, "WebSocket connection closed.");

        state.prune_notices(t0 + Duration::from_secs(7));
        assert!(state.notices.is_empty());
    }

    #[test]
    fn test_scroll_clamps_to_history() {
        let mut state = AppState::new();
        for n in 1..=4 {
            state.accept_verdict(verdict(n), format!("t{n}"));
        }
        // 3 history entries; offset can reach at most 2.
        state.scroll_up(10);
        assert_eq!(state.history_scroll, 2);
        state.scroll_down(1);
        assert_eq!(state.history_scroll, 1);
        state.scroll_to_newest();
        assert_eq!(state.history_scroll, 0);
        state.scroll_to_oldest();
        assert_eq!(state.history_scroll, 2);
    }
}
