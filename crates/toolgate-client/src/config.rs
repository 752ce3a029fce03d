//! Client configuration.

use serde::{Deserialize, Serialize};

/// Configuration for a policy check client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolgateConfig {
    /// Base URL of the policy service. Trailing slashes are stripped before
    /// first use so endpoint paths compose predictably.
    #[serde(default = "default_url")]
    pub url: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: f64,
}

fn default_url() -> String {
    "http://127.0.0.1:8080".to_string()
}

fn default_timeout_secs() -> f64 {
    10.0
}

impl Default for ToolgateConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ToolgateConfig {
    /// Create config from environment variables.
    ///
    /// | Variable | Description |
    /// |----------|-------------|
    /// | `TOOLGATE_URL` | Policy service base URL (default: `http://127.0.0.1:8080`) |
    /// | `TOOLGATE_TIMEOUT` | Request timeout in seconds (default: 10) |
    pub fn from_env() -> Self {
        Self {
            url: std::env::var("TOOLGATE_URL").unwrap_or_else(|_| default_url()),
            timeout_secs: std::env::var("TOOLGATE_TIMEOUT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_else(default_timeout_secs),
        }
    }

    /// Set the base URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Set the request timeout in seconds.
    pub fn with_timeout(mut self, timeout_secs: f64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}
