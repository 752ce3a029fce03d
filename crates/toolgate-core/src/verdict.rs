//! Verdict semantics and the policy check response shape.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Outcome of a policy evaluation for one attempted action.
///
/// Deserialization is fail-closed: an unrecognized verdict string maps to
/// [`Verdict::Deny`], and response bodies that omit the field default to
/// `Deny` as well. A policy boundary must never widen on garbage input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// The action may proceed.
    Allow,

    /// The action must not proceed.
    #[default]
    Deny,

    /// The action requires external approval before proceeding.
    Ask,

    /// The action may proceed; the service records it for audit.
    Log,
}

impl<'de> Deserialize<'de> for Verdict {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(match raw.as_str() {
            "allow" => Self::Allow,
            "ask" => Self::Ask,
            "log" => Self::Log,
            // "deny" and anything unrecognized: fail closed.
            _ => Self::Deny,
        })
    }
}

impl Verdict {
    /// Whether this verdict permits the action to execute.
    ///
    /// `Ask` is deliberately *not* allowed: it signals that approval is
    /// required and must be handled explicitly by the caller.
    pub fn allowed(self) -> bool {
        matches!(self, Self::Allow | Self::Log)
    }

    /// Whether this verdict explicitly blocks the action.
    pub fn denied(self) -> bool {
        matches!(self, Self::Deny)
    }

    /// Wire representation (lowercase).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Allow => "allow",
            Self::Deny => "deny",
            Self::Ask => "ask",
            Self::Log => "log",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a policy check, as returned by `POST /api/v1/check`.
///
/// All fields are defaulted when absent from the response body: `verdict`
/// falls back to `deny` (fail-closed), `rule` and `message` to the empty
/// string. A partial body is therefore never a parse error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    /// The policy decision.
    #[serde(default)]
    pub verdict: Verdict,

    /// Identifier of the matched policy rule, empty if none matched.
    #[serde(default)]
    pub rule: String,

    /// Human-readable explanation, empty if the service provided none.
    #[serde(default)]
    pub message: String,
}

impl CheckResult {
    /// Whether the checked action may execute. See [`Verdict::allowed`].
    pub fn allowed(&self) -> bool {
        self.verdict.allowed()
    }

    /// Whether the checked action was explicitly denied.
    pub fn denied(&self) -> bool {
        self.verdict.denied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allow_and_log_are_allowed() {
        for verdict in [Verdict::Allow, Verdict::Log] {
            assert!(verdict.allowed(), "{verdict} should be allowed");
            assert!(!verdict.denied(), "{verdict} should not be denied");
        }
    }

    #[test]
    fn deny_is_denied() {
        assert!(Verdict::Deny.denied());
        assert!(!Verdict::Deny.allowed());
    }

    #[test]
    fn ask_is_neither_allowed_nor_denied() {
        assert!(!Verdict::Ask.allowed());
        assert!(!Verdict::Ask.denied());
    }

    #[test]
    fn verdict_round_trips_lowercase() {
        for (verdict, wire) in [
            (Verdict::Allow, "\"allow\""),
            (Verdict::Deny, "\"deny\""),
            (Verdict::Ask, "\"ask\""),
            (Verdict::Log, "\"log\""),
        ] {
            assert_eq!(serde_json::to_string(&verdict).unwrap(), wire);
            assert_eq!(serde_json::from_str::<Verdict>(wire).unwrap(), verdict);
        }
    }

    #[test]
    fn unrecognized_verdict_fails_closed() {
        let verdict: Verdict = serde_json::from_str("\"escalate\"").unwrap();
        assert_eq!(verdict, Verdict::Deny);
    }

    #[test]
    fn missing_fields_default() {
        let result: CheckResult = serde_json::from_str("{}").unwrap();
        assert_eq!(result.verdict, Verdict::Deny);
        assert_eq!(result.rule, "");
        assert_eq!(result.message, "");
    }

    #[test]
    fn missing_rule_and_message_default_to_empty() {
        let result: CheckResult = serde_json::from_str(r#"{"verdict":"allow"}"#).unwrap();
        assert!(result.allowed());
        assert_eq!(result.rule, "");
        assert_eq!(result.message, "");
    }

    #[test]
    fn full_body_is_preserved() {
        let result: CheckResult = serde_json::from_str(
            r#"{"verdict":"deny","rule":"block-ssh-keys","message":"SSH key access blocked"}"#,
        )
        .unwrap();
        assert!(result.denied());
        assert_eq!(result.rule, "block-ssh-keys");
        assert_eq!(result.message, "SSH key access blocked");
    }
}
