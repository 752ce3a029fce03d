//! Aggregate audit counters, as returned by `GET /api/v1/stats`.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Read-only snapshot of the policy service's audit counters.
///
/// Every counter defaults to 0 and every breakdown map to empty when the
/// field is absent from (or null in) the response body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStats {
    /// Total checks the service has evaluated.
    #[serde(default)]
    pub total_requests: u64,

    /// Checks that resulted in `allow`.
    #[serde(default)]
    pub allow_count: u64,

    /// Checks that resulted in `deny`.
    #[serde(default)]
    pub deny_count: u64,

    /// Checks that resulted in `ask`.
    #[serde(default)]
    pub ask_count: u64,

    /// Checks that resulted in `log`.
    #[serde(default)]
    pub log_count: u64,

    /// Check counts broken down by method.
    #[serde(default, deserialize_with = "empty_on_null")]
    pub by_method: HashMap<String, u64>,

    /// Check counts broken down by tool.
    #[serde(default, deserialize_with = "empty_on_null")]
    pub by_tool: HashMap<String, u64>,
}

fn empty_on_null<'de, D>(deserializer: D) -> Result<HashMap<String, u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_body_yields_zeroed_stats() {
        let stats: AuditStats = serde_json::from_str("{}").unwrap();
        assert_eq!(stats, AuditStats::default());
    }

    #[test]
    fn null_breakdowns_default_to_empty() {
        let stats: AuditStats =
            serde_json::from_str(r#"{"total_requests":5,"by_method":null,"by_tool":null}"#)
                .unwrap();
        assert_eq!(stats.total_requests, 5);
        assert!(stats.by_method.is_empty());
        assert!(stats.by_tool.is_empty());
    }

    #[test]
    fn full_body_is_preserved() {
        let stats: AuditStats = serde_json::from_str(
            r#"{
                "total_requests": 150,
                "allow_count": 100,
                "deny_count": 30,
                "ask_count": 10,
                "log_count": 10,
                "by_method": {"tools/call": 120, "initialize": 30},
                "by_tool": {"read_file": 80, "write_file": 40}
            }"#,
        )
        .unwrap();

        assert_eq!(stats.total_requests, 150);
        assert_eq!(stats.allow_count, 100);
        assert_eq!(stats.deny_count, 30);
        assert_eq!(stats.by_method["tools/call"], 120);
        assert_eq!(stats.by_tool["write_file"], 40);
    }
}
