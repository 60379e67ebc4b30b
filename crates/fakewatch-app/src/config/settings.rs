//! Settings loader for `<config_dir>/fakewatch/config.toml`

use std::path::{Path, PathBuf};

use tracing::warn;

use super::types::Settings;

const CONFIG_FILENAME: &str = "config.toml";
const CONFIG_DIR: &str = "fakewatch";

/// Path of the user config file, if a config dir exists on this platform.
pub fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(CONFIG_DIR).join(CONFIG_FILENAME))
}

/// Load settings from the default location.
///
/// A missing file yields defaults silently; an unreadable or malformed file
/// logs a warning and yields defaults. Configuration never aborts startup.
pub fn load_settings() -> Settings {
    match config_file_path() {
        Some(path) => load_settings_from(&path),
        None => Settings::default(),
    }
}

/// Load settings from an explicit path (missing file → defaults).
pub fn load_settings_from(path: &Path) -> Settings {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Settings::default(),
        Err(err) => {
            warn!("Failed to read {}: {}", path.display(), err);
            return Settings::default();
        }
    };

    match toml::from_str(&text) {
        Ok(settings) => settings,
        Err(err) => {
            warn!("Invalid config {}: {}", path.display(), err);
            Settings::default()
        }
    }
}
