//! Request-building and response-parsing shared by the sync and async duals.
//!
//! All status code knowledge lives here; the client modules never interpret
//! statuses themselves.

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::config::ToolgateConfig;
use crate::error::{TransportError, TransportResult};

pub(crate) const USER_AGENT_VALUE: &str = concat!("toolgate/", env!("CARGO_PKG_VERSION"));

/// Normalize the configured base URL and validate the timeout.
pub(crate) fn prepare(config: &ToolgateConfig) -> TransportResult<(String, Duration)> {
    if !config.timeout_secs.is_finite() || config.timeout_secs <= 0.0 {
        return Err(TransportError::Config {
            message: format!("timeout must be a positive number, got {}", config.timeout_secs),
        });
    }

    let base_url = config.url.trim_end_matches('/').to_string();
    Ok((base_url, Duration::from_secs_f64(config.timeout_secs)))
}

pub(crate) fn check_url(base_url: &str) -> String {
    format!("{base_url}/api/v1/check")
}

pub(crate) fn stats_url(base_url: &str) -> String {
    format!("{base_url}/api/v1/stats")
}

/// Map a status + body to a parsed value.
///
/// Non-2xx is always a transport error carrying the status and body, never
/// a verdict. A 2xx body that is not JSON is an invalid response; missing
/// fields inside valid JSON are handled by the serde defaults on the types.
pub(crate) fn parse_body<T: DeserializeOwned>(status: u16, body: &str) -> TransportResult<T> {
    if !(200..300).contains(&status) {
        return Err(TransportError::Status {
            status,
            body: body.to_string(),
        });
    }

    serde_json::from_str(body).map_err(|e| TransportError::InvalidResponse {
        message: format!("failed to parse response body: {e}"),
    })
}
