//! Configuration loading for fakewatch
//!
//! Settings live in `<config_dir>/fakewatch/config.toml`. Everything has a
//! default; a missing or unreadable file is not an error.

mod settings;
mod types;

pub use settings::{config_file_path, load_settings, load_settings_from};
pub use types::{FeedSettings, ServerSettings, Settings, UiSettings};
