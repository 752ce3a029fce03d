//! Asynchronous policy check client.

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use tracing::debug;

use toolgate_core::{AuditStats, CheckResult, DecisionRequest};

use crate::config::ToolgateConfig;
use crate::error::{TransportError, TransportResult};
use crate::wire;

/// Asynchronous HTTP client for the policy check API.
///
/// `check` and `stats` suspend the calling task for the duration of the
/// network round trip; nothing is retried and no tasks are spawned.
/// Dropping an in-flight future aborts the request. The client owns its
/// connection pool, released when the last clone is dropped.
///
/// ```no_run
/// use toolgate_client::{ToolgateClient, ToolgateConfig};
/// use toolgate_core::{tool_args, DecisionRequest, METHOD_TOOLS_CALL};
///
/// # async fn example() -> Result<(), toolgate_client::TransportError> {
/// let client = ToolgateClient::new(ToolgateConfig::default())?;
/// let request = DecisionRequest::new(METHOD_TOOLS_CALL)
///     .with_tool("write_file")
///     .with_arguments(tool_args! { path: "/tmp/x" });
/// let result = client.check(&request).await?;
/// if result.denied() {
///     eprintln!("blocked by policy: {}", result.message);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ToolgateClient {
    http: reqwest::Client,
    base_url: String,
}

impl ToolgateClient {
    /// Build a client from the given configuration.
    pub fn new(config: ToolgateConfig) -> TransportResult<Self> {
        let (base_url, timeout) = wire::prepare(&config)?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(USER_AGENT, HeaderValue::from_static(wire::USER_AGENT_VALUE));

        let http = reqwest::Client::builder()
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
    pub async fn check(&self, request: &DecisionRequest) -> TransportResult<CheckResult> {
        let url = wire::check_url(&self.base_url);
        debug!(url = %url, method = %request.method, tool = ?request.tool, "submitting policy check");

        let response = self.http.post(&url).json(request).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        wire::parse_body(status, &body)
    }

    /// Fetch aggregate audit counters from the policy service.
    pub async fn stats(&self) -> TransportResult<AuditStats> {
        let url = wire::stats_url(&self.base_url);
        debug!(url = %url, "fetching audit stats");

        let response = self.http.get(&url).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        wire::parse_body(status, &body)
    }

    /// Normalized base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
