//! The single verdict-application path.
//!
//! Every enforcement site — the wrappers in [`crate::guard`] and each
//! framework adapter — funnels its [`CheckResult`] through [`apply_verdict`]
//! so allow/deny/ask handling cannot drift between call sites.

use tracing::{debug, info, warn};

use toolgate_core::{CheckResult, Verdict};

use crate::error::{GuardError, GuardResult};

/// What the caller must do with the gated action after a policy check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Enforcement {
    /// Invoke the action normally.
    Proceed,

    /// Do not invoke the action, and do not raise: the deny was configured
    /// to suppress instead of fail. Opt-in at configuration time.
    Suppress,
}

/// Interpret a check result for `tool` and decide how to enforce it.
///
/// - `deny` with `raise_on_deny` → `Err(PermissionDenied)`; without →
///   `Ok(Suppress)`. In both cases the action must not execute.
/// - `ask` → `Ok(Proceed)` after an approval notice. This layer carries no
///   approval workflow; `ask` degrades to allow-with-notice unless the
///   caller gates it themselves.
/// - `allow` / `log` → `Ok(Proceed)`.
pub fn apply_verdict(
    result: &CheckResult,
    tool: &str,
    raise_on_deny: bool,
) -> GuardResult<Enforcement> {
    if result.denied() {
        warn!(
            tool = %tool,
            rule = %result.rule,
            message = %result.message,
            "tool call denied by policy"
        );
        if raise_on_deny {
            return Err(GuardError::PermissionDenied {
                tool: tool.to_string(),
                rule: result.rule.clone(),
                message: result.message.clone(),
            });
        }
        return Ok(Enforcement::Suppress);
    }

    if result.verdict == Verdict::Ask {
        info!(tool = %tool, message = %result.message, "tool call requires approval");
    } else {
        debug!(tool = %tool, rule = %result.rule, "tool call allowed");
    }

    Ok(Enforcement::Proceed)
}
