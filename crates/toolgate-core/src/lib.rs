//! Canonical decision protocol types for toolgate.
//!
//! This crate defines the request/response shapes exchanged with a policy
//! decision service and the single authoritative interpretation of a
//! verdict. Every other toolgate crate consults [`Verdict::allowed`] and
//! [`Verdict::denied`] rather than re-implementing the mapping, so the
//! allow/deny semantics cannot drift between call sites.
//!
//! No I/O happens here; the HTTP clients live in `toolgate-client` and the
//! enforcement wrapper in `toolgate-guard`.

pub mod request;
pub mod stats;
pub mod verdict;

pub use request::{DecisionRequest, ToolArguments, METHOD_TOOLS_CALL};
pub use stats::AuditStats;
pub use verdict::{CheckResult, Verdict};
