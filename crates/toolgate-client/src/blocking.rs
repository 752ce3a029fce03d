//! Blocking policy check client.
//!
//! The synchronous dual of [`crate::ToolgateClient`]: identical operations
//! and guarantees, but each call blocks the calling thread for the duration
//! of the network round trip. Do not use it from inside an async runtime;
//! use [`crate::ToolgateClient`] there instead.

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use tracing::debug;

use toolgate_core::{AuditStats, CheckResult, DecisionRequest};

use crate::config::ToolgateConfig;
use crate::error::{TransportError, TransportResult};
use crate::wire;

/// Blocking HTTP client for the policy check API.
///
/// ```no_run
/// use toolgate_client::blocking::BlockingToolgateClient;
/// use toolgate_client::ToolgateConfig;
/// use toolgate_core::{DecisionRequest, METHOD_TOOLS_CALL};
///
/// # fn example() -> Result<(), toolgate_client::TransportError> {
/// let client = BlockingToolgateClient::new(ToolgateConfig::default())?;
/// let result = client.check(&DecisionRequest::new(METHOD_TOOLS_CALL).with_tool("read_file"))?;
/// if result.denied() {
///     eprintln!("blocked by policy: {}", result.message);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct BlockingToolgateClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl BlockingToolgateClient {
    /// Build a client from the given configuration.
    pub fn new(config: ToolgateConfig) -> TransportResult<Self> {
        let (base_url, timeout) = wire::prepare(&config)?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(USER_AGENT, HeaderValue::from_static(wire::USER_AGENT_VALUE));

        let http = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .default_headers(default_headers)
            .build()
            .map_err(|e| TransportError::Config {
                message: format!("failed to create HTTP client: {e}"),
            })?;

        Ok(Self { http, base_url })
    }

    /// Build a client from `TOOLGATE_URL` / `TOOLGATE_TIMEOUT`.
    pub fn from_env() -> TransportResult<Self> {
        Self::new(ToolgateConfig::from_env())
    }

    /// Evaluate one attempted action against the policy service.
    pub fn check(&self, request: &DecisionRequest) -> TransportResult<CheckResult> {
        let url = wire::check_url(&self.base_url);
        debug!(url = %url, method = %request.method, tool = ?request.tool, "submitting policy check");

        let response = self.http.post(&url).json(request).send()?;
        let status = response.status().as_u16();
        let body = response.text()?;

        wire::parse_body(status, &body)
    }

    /// Fetch aggregate audit counters from the policy service.
    pub fn stats(&self) -> TransportResult<AuditStats> {
        let url = wire::stats_url(&self.base_url);
        debug!(url = %url, "fetching audit stats");

        let response = self.http.get(&url).send()?;
        let status = response.status().as_u16();
        let body = response.text()?;

        wire::parse_body(status, &body)
    }

    /// Normalized base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
