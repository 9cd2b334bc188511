//! Application configuration. Service location, timeouts, UI behaviour.

use serde::Deserialize;

/// LoanVista server used when nothing is configured (the Flask development default).
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Server root, e.g. `http://127.0.0.1:5000`. Read from LOANVISTA_BASE_URL.
    #[serde(default)]
    pub base_url: Option<String>,

    /// Per-request timeout in seconds. Read from LOANVISTA_REQUEST_TIMEOUT_SECS.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// Where downloaded reports are written. Read from LOANVISTA_REPORTS_DIR.
    #[serde(default)]
    pub reports_dir: Option<String>,

    /// Delay before the chat widget pops up on its own. Read from LOANVISTA_CHAT_POPUP_SECS.
    #[serde(default)]
    pub chat_popup_secs: Option<u64>,

    /// Play the confetti animation on approval. Read from LOANVISTA_CONFETTI.
    #[serde(default)]
    pub confetti: Option<bool>,

    /// Use the offline mock API instead of a server. Read from LOANVISTA_MOCK.
    #[serde(default)]
    pub mock: Option<bool>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("LOANVISTA").try_parsing(true));
        if let Ok(path) = std::env::var("LOANVISTA_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c.build()?.try_deserialize()
    }

    /// Returns the server root without a trailing slash. Defaults to DEFAULT_BASE_URL.
    pub fn base_url_or_default(&self) -> String {
        self.base_url
            .as_deref()
            .map(|u| u.trim_end_matches('/'))
            .filter(|u| !u.is_empty())
            .unwrap_or(DEFAULT_BASE_URL)
            .to_string()
    }

    /// Returns the request timeout in seconds. Defaults to 30.
    pub fn request_timeout_secs_or_default(&self) -> u64 {
        self.request_timeout_secs.unwrap_or(30)
    }

    /// Returns the reports directory. Defaults to "./reports".
    pub fn reports_dir_or_default(&self) -> String {
        self.reports_dir
            .clone()
            .unwrap_or_else(|| "./reports".to_string())
    }

    /// Returns the chat auto-popup delay in seconds. Defaults to 10.
    pub fn chat_popup_secs_or_default(&self) -> u64 {
        self.chat_popup_secs.unwrap_or(10)
    }

    pub fn confetti_enabled(&self) -> bool {
        self.confetti.unwrap_or(true)
    }

    pub fn use_mock(&self) -> bool {
        self.mock.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.base_url_or_default(), "http://127.0.0.1:5000");
        assert_eq!(cfg.request_timeout_secs_or_default(), 30);
        assert_eq!(cfg.reports_dir_or_default(), "./reports");
        assert_eq!(cfg.chat_popup_secs_or_default(), 10);
        assert!(cfg.confetti_enabled());
        assert!(!cfg.use_mock());
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let cfg = AppConfig {
            base_url: Some("https://loans.example.com/".to_string()),
            ..Default::default()
        };
        assert_eq!(cfg.base_url_or_default(), "https://loans.example.com");
    }
}
