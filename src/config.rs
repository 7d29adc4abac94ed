//! Process configuration
//!
//! Read once at startup from the environment.

use reqwest::Url;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_QUERY_PATH: &str = "/query/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid CHATBOT_TIMEOUT_SECS {value:?}: expected a positive number of seconds")]
    InvalidTimeout { value: String },
    #[error("Invalid query endpoint {url}: {reason}")]
    InvalidEndpoint { url: String, reason: String },
    #[error("Failed to create HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Where and how to reach the query service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Scheme, host and port of the service (e.g. `http://127.0.0.1:8000`)
    pub base_url: String,
    pub query_path: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            query_path: DEFAULT_QUERY_PATH.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup, falling back to defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let timeout = match lookup("CHATBOT_TIMEOUT_SECS") {
            Some(value) => match value.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => return Err(ConfigError::InvalidTimeout { value }),
            },
            None => defaults.timeout,
        };

        let config = Self {
            base_url: lookup("CHATBOT_BASE_URL").unwrap_or(defaults.base_url),
            query_path: lookup("CHATBOT_QUERY_PATH").unwrap_or(defaults.query_path),
            timeout,
        };

        // Fail at startup rather than on the first submission
        config.endpoint()?;
        Ok(config)
    }

    /// Full URL the query is posted to
    pub fn endpoint(&self) -> Result<Url, ConfigError> {
        let path = self.query_path.trim_start_matches('/');
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), path);

        let parsed = Url::parse(&url).map_err(|e| ConfigError::InvalidEndpoint {
            url: url.clone(),
            reason: e.to_string(),
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidEndpoint {
                url,
                reason: format!("unsupported scheme {}", parsed.scheme()),
            });
        }

        Ok(parsed)
    }
}

/// Output format for the operational log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl LogFormat {
    pub fn from_env() -> Self {
        match std::env::var("CHATBOT_LOG_FORMAT") {
            Ok(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }
}
