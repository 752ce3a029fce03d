//! Framework adapters.
//!
//! Each adapter translates one external framework's callback payload into
//! the canonical decision request and then reuses the exact enforcement
//! path from [`crate::enforce`]. Adapters are state-free translations over
//! explicit payload structs — never over an untyped bag — so a framework
//! version bump shows up as a struct change, not silent misextraction.

use serde_json::{Map, Value};

use toolgate_core::ToolArguments;

pub mod crewai;
pub mod langchain;

/// What to do when no tool name can be extracted from a callback payload.
///
/// The historical behavior is [`Allow`](Self::Allow): an unclassifiable
/// callback proceeds unexamined. That is default-open, unlike the
/// fail-closed handling of verdicts and transport failures — deployments
/// that want a uniform posture opt into [`Deny`](Self::Deny).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnmatchedBehavior {
    /// Skip the policy check and let the call proceed unexamined.
    #[default]
    Allow,

    /// Treat the call as denied, subject to the adapter's raise-on-deny
    /// setting.
    Deny,
}

/// Fold a framework's free-form tool input into an argument map: a plain
/// string wraps as `{"input": ...}`, a mapping is used directly.
pub(crate) fn coerce_input(input: &Value) -> ToolArguments {
    match input {
        Value::String(text) => ToolArguments::new().arg("input", text.clone()),
        Value::Object(map) => ToolArguments::from(map.clone()),
        _ => ToolArguments::new(),
    }
}

pub(crate) fn merge_into(arguments: ToolArguments, extra: &Map<String, Value>) -> ToolArguments {
    let mut map = arguments.into_map();
    for (key, value) in extra {
        map.insert(key.clone(), value.clone());
    }
    ToolArguments::from(map)
}
