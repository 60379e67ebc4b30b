//! Main update function - handles state transitions (TEA pattern)

use std::time::Instant;

use tracing::{debug, info};

use fakewatch_client::{protocol, ConnectionState, FeedEvent};

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;

/// Lines moved by a PageUp/PageDown in the history list.
const PAGE_SIZE: usize = 10;

/// Process a message and update state.
///
/// One message at a time, run-to-completion; the only caller is the UI loop.
pub fn update(state: &mut AppState, message: Message) {
    update_at(state, message, Instant::now());
}

/// Inner step with an injected clock for testable notice expiry.
///
/// Expired notices are pruned after every message, so expiry does not
/// depend on an idle poll producing a `Tick`; `Tick` still guarantees it
/// happens while no input or frames arrive.
fn update_at(state: &mut AppState, message: Message, now: Instant) {
    match message {
        Message::Quit => state.request_quit(),

        Message::Key(key) => handle_key(state, key),

        Message::Feed(event) => handle_feed_event(state, event, now),

        Message::Tick => {}
    }
    state.prune_notices(now);
}

fn handle_key(state: &mut AppState, key: InputKey) {
    match key {
        InputKey::Char('q') | InputKey::CharCtrl('c') | InputKey::Esc => state.request_quit(),
        InputKey::Up => state.scroll_up(1),
        InputKey::Down => state.scroll_down(1),
        InputKey::PageUp => state.scroll_up(PAGE_SIZE),
        InputKey::PageDown => state.scroll_down(PAGE_SIZE),
        InputKey::Home => state.scroll_to_newest(),
        InputKey::End => state.scroll_to_oldest(),
        _ => {}
    }
}

/// Apply one transport event. `now` is injected for testable notice expiry.
fn handle_feed_event(state: &mut AppState, event: FeedEvent, now: Instant) {
    match event {
        FeedEvent::Connected => {
            info!("Connected to the feed server");
            state.connection = ConnectionState::Open;
        }

        FeedEvent::Frame(raw) => {
            // Decode failures are silent: no notice, no state change.
            match protocol::decode_frame(&raw) {
                Some(verdict) => {
                    debug!("New verdict received: {}", verdict.title);
                    let label = chrono::Local::now().format("%H:%M:%S").to_string();
                    state.accept_verdict(verdict, label);
                }
                None => {
                    debug!("Dropping undecodable frame ({} bytes)", raw.len());
                }
            }
        }

        FeedEvent::TransportError { message } => {
            debug!("Feed transport error: {}", message);
            state.push_notice("WebSocket error.", now);
        }

        FeedEvent::Closed => {
            info!("Feed connection closed");
            state.connection = ConnectionState::Closed;
            state.push_notice("WebSocket connection closed.", now);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn frame(title: &str, score: f64) -> String {
        format!(
            "{{\"result\": {{\"title\":\"{title}\",\"score\":{score},\"url\":\"http://x\",\"reason\":\"r\"}}}}"
        )
    }

    #[test]
    fn test_valid_frame_updates_featured() {
        let mut state = AppState::new();
        update(&mut state, Message::Feed(FeedEvent::Frame(frame("a", 1.0))));
        assert_eq!(state.featured.as_ref().unwrap().title, "a");
        assert!(state.history.is_empty());
    }

    #[test]
    fn test_frame_without_result_is_a_noop() {
        let mut state = AppState::new();
        update(&mut state, Message::Feed(FeedEvent::Frame("{}".into())));
        assert!(state.featured.is_none());
        assert!(state.scores.is_empty());
        assert!(state.notices.is_empty());
    }

    #[test]
    fn test_garbage_frame_is_a_noop() {
        let mut state = AppState::new();
        update(&mut state, Message::Feed(FeedEvent::Frame("no json".into())));
        update(&mut state, Message::Feed(FeedEvent::Frame("{broken".into())));
        assert!(state.featured.is_none());
        assert!(state.notices.is_empty());
    }

    #[test]
    fn test_sequential_frames_demote_in_order() {
        let mut state = AppState::new();
        for n in 1..=3 {
            update(
                &mut state,
                Message::Feed(FeedEvent::Frame(frame(&format!("v{n}"), n as f64))),
            );
        }
        assert_eq!(state.featured.as_ref().unwrap().title, "v3");
        assert_eq!(state.history.front().unwrap().title, "v2");
        assert_eq!(state.history.back().unwrap().title, "v1");
        assert_eq!(state.scores.values(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_transport_error_and_close_each_produce_one_notice() {
        let mut state = AppState::new();
        let t0 = Instant::now();
        handle_feed_event(
            &mut state,
            FeedEvent::TransportError {
                message: "reset".into(),
            },
            t0,
        );
        handle_feed_event(&mut state, FeedEvent::Closed, t0 + Duration::from_secs(1));

        assert_eq!(state.notices.len(), 2);
        assert_eq!(state.notices[0].message, "WebSocket error.");
        assert_eq!(state.notices[1].message, "WebSocket connection closed.");
        assert_eq!(state.connection, ConnectionState::Closed);

        // Each expires after its own 5s lifetime.
        state.prune_notices(t0 + Duration::from_secs(5));
        assert_eq!(state.notices.len(), 1);
        state.prune_notices(t0 + Duration::from_secs(6));
        assert!(state.notices.is_empty());
    }

    #[test]
    fn test_notices_expire_under_continuous_key_input() {
        let mut state = AppState::new();
        let t0 = Instant::now();
        update_at(&mut state, Message::Feed(FeedEvent::Closed), t0);
        assert_eq!(state.notices.len(), 1);

        // Key messages keep arriving instead of idle ticks; the notice
        // still dies at its deadline.
        update_at(
            &mut state,
            Message::Key(InputKey::Down),
            t0 + Duration::from_millis(4999),
        );
        assert_eq!(state.notices.len(), 1);
        update_at(
            &mut state,
            Message::Key(InputKey::Down),
            t0 + Duration::from_secs(5),
        );
        assert!(state.notices.is_empty());
    }

    #[test]
    fn test_connected_flips_state_open() {
        let mut state = AppState::new();
        assert_eq!(state.connection, ConnectionState::Connecting);
        update(&mut state, Message::Feed(FeedEvent::Connected));
        assert_eq!(state.connection, ConnectionState::Open);
    }

    #[test]
    fn test_quit_keys() {
        for key in [InputKey::Char('q'), InputKey::CharCtrl('c'), InputKey::Esc] {
            let mut state = AppState::new();
            update(&mut state, Message::Key(key));
            assert!(state.should_quit());
        }
    }
}
