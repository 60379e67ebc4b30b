//! # fakewatch-client - Feed Transport
//!
//! Owns the single persistent WebSocket connection to the scoring stream and
//! the lenient frame decode step.
//!
//! - [`connection`] - [`FeedClient`] background task, [`ConnectionState`] FSM,
//!   and the [`FeedEvent`] stream it forwards
//! - [`protocol`] - frame cleanup and payload extraction

pub mod connection;
pub mod protocol;

pub use connection::{ConnectionState, FeedClient, FeedEvent};
pub use protocol::{decode_frame, extract_payload};
