//! Configuration types for fakewatch

use serde::{Deserialize, Serialize};

/// Global application settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub feed: FeedSettings,
    pub ui: UiSettings,
}

/// Feed server connection settings
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerSettings {
    /// WebSocket endpoint of the scoring stream.
    pub url: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            url: default_url(),
        }
    }
}

fn default_url() -> String {
    "ws://localhost:8080/ws".to_string()
}

/// Feed retention settings
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FeedSettings {
    /// Maximum number of demoted verdicts kept in the history list.
    /// The reference behavior grew without bound; a long-running terminal
    /// session needs a cap.
    pub history_limit: usize,
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self { history_limit: 200 }
    }
}

/// UI settings
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UiSettings {
    /// Show the rolling score chart panel.
    pub show_chart: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self { show_chart: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.server.url, "ws://localhost:8080/ws");
        assert_eq!(settings.feed.history_limit, 200);
        assert!(settings.ui.show_chart);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let settings: Settings = toml::from_str("[server]\nurl = \"ws://feed:9000/ws\"\n").unwrap();
        assert_eq!(settings.server.url, "ws://feed:9000/ws");
        assert_eq!(settings.feed.history_limit, 200);
    }

    #[test]
    fn test_full_toml() {
        let text = r#"
[server]
url = "ws://example:1234/ws"

[feed]
history_limit = 25

[ui]
show_chart = false
"#;
        let settings: Settings = toml::from_str(text).unwrap();
        assert_eq!(settings.server.url, "ws://example:1234/ws");
        assert_eq!(settings.feed.history_limit, 25);
        assert!(!settings.ui.show_chart);
    }
}
