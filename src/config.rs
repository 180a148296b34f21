//! Runtime configuration for the dashboard scripts.
//!
//! Defaults match the routes served by the IOC Monitor web GUI. A host page
//! can override any key by embedding a JSON block:
//!
//! ```html
//! <script type="application/json" id="ioc-monitor-config">
//!   { "poll_interval_ms": 10000 }
//! </script>
//! ```
//!
//! Keys:
//! - `stats_endpoint`: default `/api/stats`
//! - `search_endpoint`: default `/api/iocs`
//! - `poll_interval_ms`: default 30000, must be non-zero
//! - `dashboard_path`: default `/`
//! - `toast_container_id`: default `toastContainer`
//! - `default_search_limit`: default 100, must be non-zero
//! - `log_level`: default `info`

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::num::NonZeroU32;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

pub const CONFIG_ELEMENT_ID: &str = "ioc-monitor-config";
pub const DEFAULT_STATS_ENDPOINT: &str = "/api/stats";
pub const DEFAULT_SEARCH_ENDPOINT: &str = "/api/iocs";
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 30_000;
pub const DEFAULT_DASHBOARD_PATH: &str = "/";
pub const DEFAULT_TOAST_CONTAINER_ID: &str = "toastContainer";
pub const DEFAULT_SEARCH_LIMIT: NonZeroU32 = match NonZeroU32::new(100) {
    Some(limit) => limit,
    None => NonZeroU32::MIN,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid runtime config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("poll_interval_ms must be greater than zero")]
    ZeroInterval,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub stats_endpoint: String,
    pub search_endpoint: String,
    pub poll_interval_ms: u64,
    pub dashboard_path: String,
    pub toast_container_id: String,
    pub default_search_limit: NonZeroU32,
    pub log_level: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            stats_endpoint: DEFAULT_STATS_ENDPOINT.to_owned(),
            search_endpoint: DEFAULT_SEARCH_ENDPOINT.to_owned(),
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            dashboard_path: DEFAULT_DASHBOARD_PATH.to_owned(),
            toast_container_id: DEFAULT_TOAST_CONTAINER_ID.to_owned(),
            default_search_limit: DEFAULT_SEARCH_LIMIT,
            log_level: "info".to_owned(),
        }
    }
}

impl RuntimeConfig {
    /// Parse a config override block. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for malformed JSON or a zero poll interval.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        if config.poll_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        Ok(config)
    }

    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// Whether `path` is the route that shows the statistics cards.
    #[must_use]
    pub fn is_dashboard(&self, path: &str) -> bool {
        path == self.dashboard_path
    }

    /// Configured log level, falling back to `Info` for unknown names.
    #[must_use]
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}
