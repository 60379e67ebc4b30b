//! Async WebSocket client for the scoring feed.
//!
//! [`FeedClient`] opens the single persistent connection to the feed server
//! and spawns a background Tokio task that owns the socket. The task forwards
//! every server-to-client text frame (plus lifecycle transitions) through an
//! mpsc channel as [`FeedEvent`]s, in arrival order.
//!
//! The connection is strictly one-way after establishment: nothing is ever
//! written to the server except the protocol-level Close frame on shutdown.
//! There is no reconnection in any state: once the feed closes, [`Closed`]
//! is terminal for the process lifetime.
//!
//! [`Closed`]: ConnectionState::Closed

use std::sync::Arc;

use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::protocol::Message as WsMessage;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream};
use tracing::{debug, info, warn};

use fakewatch_core::prelude::*;

/// Capacity of the event channel (bounded, frames can be bursty on connect
/// when the server replays its cache).
const EVENT_CHANNEL_CAPACITY: usize = 256;

type WsStream = WebSocketStream<MaybeTlsStream<tokio::net::TcpStream>>;

/// Connection lifecycle of a [`FeedClient`].
///
/// `Connecting → Open → Closed`, with transport errors surfaced as events
/// while `Open`. `Closed` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    /// Initial connection attempt in progress.
    Connecting,
    /// Connected; frames are flowing.
    Open,
    /// Connection ended. No further events will arrive.
    Closed,
}

/// One event from the feed transport, in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedEvent {
    /// The connection is established. Log-only; no UI change.
    Connected,
    /// A raw text frame from the server. May contain noise around the payload.
    Frame(String),
    /// A transport-level error. Followed by [`FeedEvent::Closed`].
    TransportError { message: String },
    /// The connection ended. Terminal.
    Closed,
}

/// Handle to the feed connection.
///
/// Create with [`FeedClient::connect`], then drain [`event_receiver`] from
/// the application event loop. Dropping the client closes the connection
/// (the channel closes, which signals the background task to exit).
///
/// [`event_receiver`]: FeedClient::event_receiver
pub struct FeedClient {
    event_rx: mpsc::Receiver<FeedEvent>,
    state: Arc<std::sync::RwLock<ConnectionState>>,
}

impl FeedClient {
    /// Connect to the feed at `url` and spawn the background read task.
    ///
    /// The initial connection is attempted before returning so callers know
    /// whether the endpoint is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Connect`] if the WebSocket handshake fails.
    pub async fn connect(url: &str) -> Result<Self> {
        let state = Arc::new(std::sync::RwLock::new(ConnectionState::Connecting));

        info!("Connecting to feed at {}", url);
        let (ws_stream, _response) = connect_async(url)
            .await
            .map_err(|err| Error::connect(url, err.to_string()))?;

        {
            let mut guard = state.write().unwrap_or_else(|e| e.into_inner());
            *guard = ConnectionState::Open;
        }

        let (event_tx, event_rx) = mpsc::channel::<FeedEvent>(EVENT_CHANNEL_CAPACITY);
        tokio::spawn(run_read_task(ws_stream, event_tx, Arc::clone(&state)));

        Ok(Self { event_rx, state })
    }

    /// Return a mutable reference to the event receiver.
    ///
    /// The application loop `recv()`s or `try_recv()`s on this to consume
    /// feed events one at a time, run-to-completion per event.
    pub fn event_receiver(&mut self) -> &mut mpsc::Receiver<FeedEvent> {
        &mut self.event_rx
    }

    /// Return the current connection state.
    pub fn connection_state(&self) -> ConnectionState {
        *self.state.read().unwrap_or_else(|e| e.into_inner())
    }

    /// Return `true` while the connection is open.
    pub fn is_open(&self) -> bool {
        self.connection_state() == ConnectionState::Open
    }
}

/// Background read loop. Owns the socket until the connection ends.
///
/// Terminal conditions (server Close frame, read error, stream end) emit
/// their event, flip the shared state to `Closed`, and end the task. A send
/// failure on the event channel means the client was dropped; the task sends
/// a Close frame and exits quietly.
async fn run_read_task(
    ws_stream: WsStream,
    event_tx: mpsc::Sender<FeedEvent>,
    state: Arc<std::sync::RwLock<ConnectionState>>,
) {
    let (mut ws_sink, mut ws_read) = ws_stream.split();

    if event_tx.send(FeedEvent::Connected).await.is_err() {
        let _ = ws_sink.send(WsMessage::Close(None)).await;
        return;
    }

    loop {
        match ws_read.next().await {
            Some(Ok(WsMessage::Text(text))) => {
                if event_tx
                    .send(FeedEvent::Frame(text.as_str().to_owned()))
                    .await
                    .is_err()
                {
                    // Receiver dropped; close the socket and bail out.
                    let _ = ws_sink.send(WsMessage::Close(None)).await;
                    break;
                }
            }
            Some(Ok(WsMessage::Close(_))) => {
                debug!("Feed: received Close frame");
                break;
            }
            Some(Ok(_)) => {
                // Ping/Pong/Binary: ignore
            }
            Some(Err(err)) => {
                warn!("Feed: WebSocket read error: {}", err);
                let _ = event_tx
                    .send(FeedEvent::TransportError {
                        message: err.to_string(),
                    })
                    .await;
                break;
            }
            None => {
                debug!("Feed: WebSocket stream ended");
                break;
            }
        }
    }

    {
        let mut guard = state.write().unwrap_or_else(|e| e.into_inner());
        *guard = ConnectionState::Closed;
    }
    let _ = event_tx.send(FeedEvent::Closed).await;
    debug!("Feed read task exiting");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_state_transitions_are_ordered() {
        // Closed is terminal; there is no state after it.
        assert_ne!(ConnectionState::Connecting, ConnectionState::Open);
        assert_ne!(ConnectionState::Open, ConnectionState::Closed);
    }

    #[tokio::test]
    async fn test_connect_refused_is_fatal_error() {
        // Port 1 is never listening.
        let result = FeedClient::connect("ws://127.0.0.1:1/ws").await;
        let err = result.err().expect("connect should fail");
        assert!(err.is_fatal());
        assert!(err.to_string().contains("127.0.0.1:1"));
    }
}
