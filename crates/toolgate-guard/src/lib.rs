//! Call interception and verdict enforcement for toolgate.
//!
//! This crate sits between an agent's tool-invocation layer and the policy
//! service: it builds the canonical decision request for an attempted
//! action, consults a client (explicit or the process-wide default), and
//! applies the verdict — raise, suppress, or proceed — before the action is
//! ever invoked.
//!
//! - [`Guard`] / [`AsyncGuard`] wrap arbitrary actions with a per-call
//!   policy check.
//! - [`adapters`] translate framework callback payloads (LangChain-style
//!   tool starts, CrewAI-style steps) into the same enforcement path.
//!
//! Enforcement is fail-closed: a transport failure during the check
//! propagates and the gated action never runs. The one deliberate exception
//! is adapter payloads with no extractable tool name, which default to
//! proceeding unexamined — see [`adapters::UnmatchedBehavior`].
//!
//! ```no_run
//! use toolgate_core::tool_args;
//! use toolgate_guard::Guard;
//!
//! fn write_file(path: &str, content: &str) -> std::io::Result<()> {
//!     let guard = Guard::new("write_file");
//!     let outcome = guard
//!         .run(tool_args! { path: path, content: content }, || {
//!             std::fs::write(path, content)
//!         })
//!         .map_err(std::io::Error::other)?;
//!     outcome.into_value().unwrap_or(Ok(()))
//! }
//! ```

pub mod adapters;
mod enforce;
mod error;
mod guard;

pub use enforce::{apply_verdict, Enforcement};
pub use error::{GuardError, GuardResult};
pub use guard::{AsyncGuard, Guard, Outcome};
