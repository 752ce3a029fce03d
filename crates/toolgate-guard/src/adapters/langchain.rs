//! Adapter for LangChain-style tool-start callbacks.
//!
//! LangChain notifies a callback handler before each tool runs, passing the
//! serialized tool description and the tool's input. [`CallbackGuard`]
//! checks that event against policy before the framework executes the tool.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use toolgate_client::blocking::BlockingToolgateClient;
use toolgate_client::ToolgateConfig;
use toolgate_core::{CheckResult, DecisionRequest, ToolArguments, Verdict, METHOD_TOOLS_CALL};

use crate::adapters::{coerce_input, merge_into, UnmatchedBehavior};
use crate::enforce::{apply_verdict, Enforcement};
use crate::error::GuardResult;

/// One tool-start callback event, as surfaced by LangChain-style runtimes.
///
/// Extraction is best effort across framework versions: the tool name comes
/// from the serialized tool description, the raw input string wraps as
/// `{"input": ...}`, and a structured `tool_input` mapping (newer versions)
/// merges over it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ToolStartEvent {
    /// Tool name from the serialized tool description.
    #[serde(default)]
    pub name: Option<String>,

    /// Raw input string handed to the tool.
    #[serde(default)]
    pub input: Option<String>,

    /// Structured tool input, when the framework provides one.
    #[serde(default)]
    pub tool_input: Option<Map<String, Value>>,
}

impl ToolStartEvent {
    /// Event for `name` with a raw input string.
    pub fn new(name: impl Into<String>, input: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            input: Some(input.into()),
            tool_input: None,
        }
    }

    fn arguments(&self) -> ToolArguments {
        let mut arguments = match &self.input {
            Some(text) => coerce_input(&Value::String(text.clone())),
            None => ToolArguments::new(),
        };
        if let Some(structured) = &self.tool_input {
            arguments = merge_into(arguments, structured);
        }
        arguments
    }
}

/// Policy enforcement for LangChain-style callback handlers.
#[derive(Debug, Clone)]
pub struct CallbackGuard {
    client: Arc<BlockingToolgateClient>,
    raise_on_deny: bool,
    unmatched: UnmatchedBehavior,
}

impl CallbackGuard {
    /// Enforce policy with the given client.
    pub fn new(client: Arc<BlockingToolgateClient>) -> Self {
        Self {
            client,
            raise_on_deny: true,
            unmatched: UnmatchedBehavior::default(),
        }
    }

    /// Build the client from `config`.
    pub fn from_config(config: ToolgateConfig) -> GuardResult<Self> {
        Ok(Self::new(Arc::new(BlockingToolgateClient::new(config)?)))
    }

    /// Whether a deny verdict raises (default) or suppresses.
    pub fn raise_on_deny(mut self, raise: bool) -> Self {
        self.raise_on_deny = raise;
        self
    }

    /// What to do with events carrying no extractable tool name.
    pub fn unmatched(mut self, behavior: UnmatchedBehavior) -> Self {
        self.unmatched = behavior;
        self
    }

    /// Check one tool-start event against policy.
    ///
    /// Call this from the framework's tool-start hook and only let the tool
    /// execute on [`Enforcement::Proceed`].
    pub fn on_tool_start(&self, event: &ToolStartEvent) -> GuardResult<Enforcement> {
        let Some(tool) = event.name.as_deref().filter(|name| !name.is_empty()) else {
            return self.handle_unmatched();
        };

        let request = DecisionRequest::new(METHOD_TOOLS_CALL)
            .with_tool(tool)
            .with_arguments(event.arguments());
        let result = self.client.check(&request)?;
        apply_verdict(&result, tool, self.raise_on_deny)
    }

    fn handle_unmatched(&self) -> GuardResult<Enforcement> {
        match self.unmatched {
            UnmatchedBehavior::Allow => {
                debug!("no tool name in callback event, skipping policy check");
                Ok(Enforcement::Proceed)
            }
            UnmatchedBehavior::Deny => {
                let denied = CheckResult {
                    verdict: Verdict::Deny,
                    rule: String::new(),
                    message: "no tool name in callback payload".to_string(),
                };
                apply_verdict(&denied, "", self.raise_on_deny)
            }
        }
    }
}
