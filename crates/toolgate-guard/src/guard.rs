//! Enforcement wrappers around arbitrary actions.

use std::future::Future;
use std::sync::Arc;

use toolgate_client::blocking::BlockingToolgateClient;
use toolgate_client::{registry, ToolgateClient};
use toolgate_core::{DecisionRequest, ToolArguments, METHOD_TOOLS_CALL};

use crate::enforce::{apply_verdict, Enforcement};
use crate::error::GuardResult;

/// Result of running a gated action.
///
/// `Suppressed` is the deliberate "no result" return for a deny with
/// raise-on-deny disabled: the action never ran, and the caller asked for
/// silence instead of an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The action ran; here is its return value, unmodified.
    Completed(T),

    /// The action was denied and suppressed; it never ran.
    Suppressed,
}

impl<T> Outcome<T> {
    /// The action's return value, or `None` when suppressed.
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Completed(value) => Some(value),
            Self::Suppressed => None,
        }
    }

    /// Whether the action was suppressed by a deny verdict.
    pub fn is_suppressed(&self) -> bool {
        matches!(self, Self::Suppressed)
    }
}

/// Synchronous enforcement wrapper for one named tool.
///
/// On every [`Guard::run`], the policy check completes (or fails) before
/// the action is ever invoked. The guard does not own a client: it borrows
/// the explicitly supplied one, or the process-wide default.
///
/// ```no_run
/// use toolgate_core::tool_args;
/// use toolgate_guard::Guard;
///
/// # fn demo() -> Result<(), toolgate_guard::GuardError> {
/// let guard = Guard::new("write_file");
/// let outcome = guard.run(tool_args! { path: "/tmp/out.txt", content: "hello" }, || {
///     std::fs::write("/tmp/out.txt", "hello")
/// })?;
/// if outcome.is_suppressed() {
///     eprintln!("write suppressed by policy");
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Guard {
    tool: String,
    method: String,
    raise_on_deny: bool,
    client: Option<Arc<BlockingToolgateClient>>,
}

impl Guard {
    /// Guard actions performed by `tool`, checked as `tools/call`.
    pub fn new(tool: impl Into<String>) -> Self {
        Self {
            tool: tool.into(),
            method: METHOD_TOOLS_CALL.to_string(),
            raise_on_deny: true,
            client: None,
        }
    }

    /// Override the JSON-RPC method submitted with each check.
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    /// Whether a deny verdict raises [`crate::GuardError::PermissionDenied`]
    /// (default) or silently suppresses the action.
    pub fn raise_on_deny(mut self, raise: bool) -> Self {
        self.raise_on_deny = raise;
        self
    }

    /// Use an explicit client instead of the process-wide default.
    pub fn with_client(mut self, client: Arc<BlockingToolgateClient>) -> Self {
        self.client = Some(client);
        self
    }

    /// Check the policy for one invocation carrying `arguments`.
    pub fn check(&self, arguments: &ToolArguments) -> GuardResult<Enforcement> {
        let request = self.request(arguments);
        let client = match &self.client {
            Some(client) => Arc::clone(client),
            None => registry::default_blocking()?,
        };
        let result = client.check(&request)?;
        apply_verdict(&result, &self.tool, self.raise_on_deny)
    }

    /// Check the policy, then run `action` if it is permitted.
    ///
    /// The action is never started when the verdict is deny (raised or
    /// suppressed) or when the check itself fails.
    pub fn run<T>(
        &self,
        arguments: ToolArguments,
        action: impl FnOnce() -> T,
    ) -> GuardResult<Outcome<T>> {
        match self.check(&arguments)? {
            Enforcement::Proceed => Ok(Outcome::Completed(action())),
            Enforcement::Suppress => Ok(Outcome::Suppressed),
        }
    }

    fn request(&self, arguments: &ToolArguments) -> DecisionRequest {
        DecisionRequest::new(&self.method)
            .with_tool(&self.tool)
            .with_arguments(arguments.clone())
    }

    /// Tool name this guard submits with each check.
    pub fn tool(&self) -> &str {
        &self.tool
    }
}

/// Asynchronous dual of [`Guard`]: identical semantics, with the check and
/// the action awaited in sequence on the calling task.
#[derive(Debug, Clone)]
pub struct AsyncGuard {
    tool: String,
    method: String,
    raise_on_deny: bool,
    client: Option<Arc<ToolgateClient>>,
}

impl AsyncGuard {
    /// Guard actions performed by `tool`, checked as `tools/call`.
    pub fn new(tool: impl Into<String>) -> Self {
        Self {
            tool: tool.into(),
            method: METHOD_TOOLS_CALL.to_string(),
            raise_on_deny: true,
            client: None,
        }
    }

    /// Override the JSON-RPC method submitted with each check.
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    /// Whether a deny verdict raises [`crate::GuardError::PermissionDenied`]
    /// (default) or silently suppresses the action.
    pub fn raise_on_deny(mut self, raise: bool) -> Self {
        self.raise_on_deny = raise;
        self
    }

    /// Use an explicit client instead of the process-wide default.
    pub fn with_client(mut self, client: Arc<ToolgateClient>) -> Self {
        self.client = Some(client);
        self
    }

    /// Check the policy for one invocation carrying `arguments`.
    pub async fn check(&self, arguments: &ToolArguments) -> GuardResult<Enforcement> {
        let request = DecisionRequest::new(&self.method)
            .with_tool(&self.tool)
            .with_arguments(arguments.clone());
        let client = match &self.client {
            Some(client) => Arc::clone(client),
            None => registry::default_client()?,
        };
        let result = client.check(&request).await?;
        apply_verdict(&result, &self.tool, self.raise_on_deny)
    }

    /// Check the policy, then await `action` if it is permitted.
    ///
    /// The two awaits are strictly sequential: the check resolves before
    /// the action's future is even created.
    pub async fn run<T, F, Fut>(
        &self,
        arguments: ToolArguments,
        action: F,
    ) -> GuardResult<Outcome<T>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        match self.check(&arguments).await? {
            Enforcement::Proceed => Ok(Outcome::Completed(action().await)),
            Enforcement::Suppress => Ok(Outcome::Suppressed),
        }
    }

    /// Tool name this guard submits with each check.
    pub fn tool(&self) -> &str {
        &self.tool
    }
}
