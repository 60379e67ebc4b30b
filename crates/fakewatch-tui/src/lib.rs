//! fakewatch-tui - Terminal UI for fakewatch
//!
//! This crate provides the ratatui-based terminal interface: event polling,
//! layout, widget rendering, and the main runner loop that bridges the feed
//! client to the app state.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod theme;
pub mod widgets;

// Re-export main entry point
pub use runner::run;
