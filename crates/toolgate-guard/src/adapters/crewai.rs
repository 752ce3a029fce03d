//! Adapter for CrewAI-style step callbacks.
//!
//! CrewAI invokes a step callback after each agent step; steps that carry a
//! tool invocation expose `tool` and `tool_input` attributes. Steps without
//! a tool call (pure reasoning) pass through unexamined.

use std::sync::Arc;

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use toolgate_client::blocking::BlockingToolgateClient;
use toolgate_client::ToolgateConfig;
use toolgate_core::{CheckResult, DecisionRequest, ToolArguments, Verdict, METHOD_TOOLS_CALL};

use crate::adapters::{coerce_input, UnmatchedBehavior};
use crate::enforce::{apply_verdict, Enforcement};
use crate::error::GuardResult;

/// Tool input attached to a step, which varies by framework version.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum StepInput {
    /// Structured arguments.
    Structured(Map<String, Value>),

    /// Free-form input string.
    Text(String),
}

/// One agent step, as surfaced by CrewAI-style step callbacks.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StepOutput {
    /// Tool invoked by this step, if any.
    #[serde(default)]
    pub tool: Option<String>,

    /// Input handed to the tool.
    #[serde(default)]
    pub tool_input: Option<StepInput>,
}

impl StepOutput {
    /// Step invoking `tool` with a free-form input string.
    pub fn tool_call(tool: impl Into<String>, input: impl Into<String>) -> Self {
        Self {
            tool: Some(tool.into()),
            tool_input: Some(StepInput::Text(input.into())),
        }
    }

    fn arguments(&self) -> ToolArguments {
        match &self.tool_input {
            Some(StepInput::Structured(map)) => ToolArguments::from(map.clone()),
            Some(StepInput::Text(text)) => coerce_input(&Value::String(text.clone())),
            None => ToolArguments::new(),
        }
    }
}

/// Policy enforcement for CrewAI-style step callbacks.
#[derive(Debug, Clone)]
pub struct StepGuard {
    client: Arc<BlockingToolgateClient>,
    raise_on_deny: bool,
    unmatched: UnmatchedBehavior,
}

impl StepGuard {
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

    /// What to do with steps carrying no extractable tool name.
    pub fn unmatched(mut self, behavior: UnmatchedBehavior) -> Self {
        self.unmatched = behavior;
        self
    }

    /// Check one step against policy.
    pub fn on_step(&self, step: &StepOutput) -> GuardResult<Enforcement> {
        let Some(tool) = step.tool.as_deref().filter(|name| !name.is_empty()) else {
            return self.handle_unmatched();
        };

        let request = DecisionRequest::new(METHOD_TOOLS_CALL)
            .with_tool(tool)
            .with_arguments(step.arguments());
        let result = self.client.check(&request)?;
        apply_verdict(&result, tool, self.raise_on_deny)
    }

    fn handle_unmatched(&self) -> GuardResult<Enforcement> {
        match self.unmatched {
            UnmatchedBehavior::Allow => {
                debug!("step has no tool call, skipping policy check");
                Ok(Enforcement::Proceed)
            }
            UnmatchedBehavior::Deny => {
                let denied = CheckResult {
                    verdict: Verdict::Deny,
                    rule: String::new(),
                    message: "no tool name in step payload".to_string(),
                };
                apply_verdict(&denied, "", self.raise_on_deny)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_input_wraps_as_input_key() {
        let step = StepOutput::tool_call("read_file", "/etc/passwd");
        assert_eq!(step.arguments().as_map()["input"], "/etc/passwd");
    }

    #[test]
    fn structured_input_is_used_directly() {
        let step = StepOutput {
            tool: Some("write_file".to_string()),
            tool_input: Some(StepInput::Structured(
                json!({"path": "/tmp/x", "content": "hello"})
                    .as_object()
                    .cloned()
                    .expect("object literal"),
            )),
        };
        let arguments = step.arguments();
        assert_eq!(arguments.as_map()["path"], "/tmp/x");
        assert_eq!(arguments.as_map()["content"], "hello");
    }

    #[test]
    fn step_input_deserializes_both_shapes() {
        let text: StepInput = serde_json::from_str("\"query\"").unwrap();
        assert!(matches!(text, StepInput::Text(_)));

        let structured: StepInput = serde_json::from_str(r#"{"path": "/tmp"}"#).unwrap();
        assert!(matches!(structured, StepInput::Structured(_)));
    }

    #[test]
    fn step_without_tool_has_empty_arguments() {
        let step = StepOutput::default();
        assert!(step.arguments().is_empty());
    }
}
