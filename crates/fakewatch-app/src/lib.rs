//! fakewatch-app - Application state and orchestration for fakewatch
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: a [`Message`] enum, an [`AppState`] model, and an [`update`]
//! function that applies one message at a time, run-to-completion.

pub mod config;
pub mod input_key;
pub mod message;
pub mod state;
pub mod update;

// Re-export primary types
pub use config::Settings;
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppState, Notice, NOTICE_LIFETIME};
pub use update::update;
