//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use fakewatch_client::FeedEvent;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Event from the feed transport (connection lifecycle + raw frames)
    Feed(FeedEvent),

    /// Tick emitted when input polling times out; keeps notice expiry
    /// running while the session is idle
    Tick,

    /// Quit the application (q, Esc, Ctrl+C, signal handler)
    Quit,
}
