//! Transport error taxonomy for the policy check clients.

/// Failure to obtain a verdict from the policy service.
///
/// A transport error is never interpreted as a verdict and is never retried
/// by this crate: a policy check is not idempotent on the remote side (it
/// increments audit counters), so retrying risks double counting. Callers
/// see the failure immediately and the gated action must not execute.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The policy service could not be reached (connect, timeout, I/O).
    #[error("policy service unreachable: {message}")]
    Unreachable { message: String },

    /// The policy service answered with a non-2xx status.
    #[error("policy service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body could not be parsed as JSON.
    #[error("invalid response from policy service: {message}")]
    InvalidResponse { message: String },

    /// Client construction or configuration failed.
    #[error("configuration error: {message}")]
    Config { message: String },
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        Self::Unreachable {
            message: err.to_string(),
        }
    }
}

/// Result type for client operations.
pub type TransportResult<T> = Result<T, TransportError>;
