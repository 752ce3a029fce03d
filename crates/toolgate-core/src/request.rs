//! The canonical decision request and its argument map.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Default method for tool invocations.
pub const METHOD_TOOLS_CALL: &str = "tools/call";

/// One attempted action, as submitted to `POST /api/v1/check`.
///
/// Immutable once built; construct a fresh request per call. The remote
/// service distinguishes "no tool" from "tool with empty name", so the
/// builder normalizes an empty tool or an empty argument map to `None` and
/// serialization omits absent fields entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionRequest {
    /// JSON-RPC method being invoked (e.g. `tools/call`). Required.
    pub method: String,

    /// Tool name, present only when the action targets a named tool.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool: Option<String>,

    /// Arguments of the attempted action, present only when non-empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arguments: Option<Map<String, Value>>,
}

impl DecisionRequest {
    /// Create a request for `method` with no tool and no arguments.
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            tool: None,
            arguments: None,
        }
    }

    /// Set the tool name. An empty name is treated as "no tool".
    pub fn with_tool(mut self, tool: impl Into<String>) -> Self {
        let tool = tool.into();
        self.tool = if tool.is_empty() { None } else { Some(tool) };
        self
    }

    /// Attach the argument map. An empty map is treated as "no arguments".
    pub fn with_arguments(mut self, arguments: ToolArguments) -> Self {
        self.arguments = if arguments.is_empty() {
            None
        } else {
            Some(arguments.into_map())
        };
        self
    }
}

/// Ordered name→value map describing the arguments of an attempted action.
///
/// This is the explicit-argument-map counterpart of binding a call against
/// a declared parameter list: the caller names each argument once, at the
/// call site, and the map travels unchanged into [`DecisionRequest`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToolArguments(Map<String, Value>);

impl ToolArguments {
    /// Empty argument map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one named argument.
    #[must_use]
    pub fn arg(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    /// Whether no arguments have been recorded.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of recorded arguments.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Borrow the underlying map.
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consume into the underlying map.
    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for ToolArguments {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for ToolArguments {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Build a [`ToolArguments`] map from `name: value` pairs.
///
/// ```
/// use toolgate_core::tool_args;
///
/// let args = tool_args! { path: "/tmp/out.txt", append: true };
/// assert_eq!(args.len(), 2);
/// ```
#[macro_export]
macro_rules! tool_args {
    () => { $crate::ToolArguments::new() };
    ($($name:ident : $value:expr),+ $(,)?) => {{
        let mut args = $crate::ToolArguments::new();
        $(args = args.arg(stringify!($name), $value);)+
        args
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_request_serializes_method_only() {
        let request = DecisionRequest::new("initialize");
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body, serde_json::json!({"method": "initialize"}));
    }

    #[test]
    fn empty_tool_and_arguments_are_omitted() {
        let request = DecisionRequest::new(METHOD_TOOLS_CALL)
            .with_tool("")
            .with_arguments(ToolArguments::new());
        let body = serde_json::to_string(&request).unwrap();
        assert!(!body.contains("tool"));
        assert!(!body.contains("arguments"));
    }

    #[test]
    fn populated_request_carries_all_fields() {
        let request = DecisionRequest::new(METHOD_TOOLS_CALL)
            .with_tool("write_file")
            .with_arguments(tool_args! { path: "/tmp/test.txt", content: "hello" });

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["method"], "tools/call");
        assert_eq!(body["tool"], "write_file");
        assert_eq!(body["arguments"]["path"], "/tmp/test.txt");
        assert_eq!(body["arguments"]["content"], "hello");
    }

    #[test]
    fn arguments_builder_keeps_insertion_values() {
        let args = ToolArguments::new()
            .arg("count", 3)
            .arg("dry_run", false)
            .arg("path", "/etc/hosts");
        assert_eq!(args.len(), 3);
        assert_eq!(args.as_map()["count"], 3);
        assert_eq!(args.as_map()["dry_run"], false);
    }

    #[test]
    fn tool_args_macro_matches_builder() {
        let from_macro = tool_args! { path: "/tmp/x", size: 42 };
        let from_builder = ToolArguments::new().arg("path", "/tmp/x").arg("size", 42);
        assert_eq!(from_macro, from_builder);
    }
}
