//! Enforcement error taxonomy.

use toolgate_client::TransportError;

/// Failure while enforcing policy on an attempted action.
#[derive(Debug, thiserror::Error)]
pub enum GuardError {
    /// The policy service explicitly denied the action and raise-on-deny is
    /// enabled. The gated action was never invoked.
    #[error("policy denied '{tool}': {message} (rule: {rule})")]
    PermissionDenied {
        tool: String,
        rule: String,
        message: String,
    },

    /// The policy check itself failed. Never swallowed: inability to reach
    /// the policy service must not become an implicit allow, so the gated
    /// action was never invoked.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Result type for enforcement operations.
pub type GuardResult<T> = Result<T, GuardError>;
