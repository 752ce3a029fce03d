//! HTTP clients for the toolgate policy check API.
//!
//! Two duals with identical operations and guarantees:
//!
//! - [`ToolgateClient`] — asynchronous; `check`/`stats` suspend the calling
//!   task at the network await point.
//! - [`blocking::BlockingToolgateClient`] — synchronous; each call blocks
//!   the calling thread.
//!
//! Both submit one `POST /api/v1/check` per check and one
//! `GET /api/v1/stats` per stats query. Non-2xx responses surface as
//! [`TransportError`] — a transport failure is never interpreted as a
//! verdict, and nothing is retried. Missing response fields are defaulted
//! fail-closed by the types in `toolgate-core`.
//!
//! The [`registry`] module holds the process-wide default client used by
//! call sites that do not supply their own.
//!
//! # Quick start
//!
//! ```no_run
//! use toolgate_client::{ToolgateClient, ToolgateConfig};
//! use toolgate_core::{DecisionRequest, METHOD_TOOLS_CALL};
//!
//! # async fn example() -> Result<(), toolgate_client::TransportError> {
//! let client = ToolgateClient::new(ToolgateConfig::default().with_url("http://127.0.0.1:8080"))?;
//! let result = client
//!     .check(&DecisionRequest::new(METHOD_TOOLS_CALL).with_tool("read_file"))
//!     .await?;
//! println!("verdict: {}", result.verdict);
//! # Ok(())
//! # }
//! ```

pub mod blocking;
mod client;
mod config;
mod error;
pub mod registry;
mod wire;

pub use client::ToolgateClient;
pub use config::ToolgateConfig;
pub use error::{TransportError, TransportResult};
