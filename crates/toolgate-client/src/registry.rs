//! Process-wide default client registry.
//!
//! Call sites that do not supply an explicit client borrow the process-wide
//! default from here. [`configure`] installs the configuration once, early;
//! when it was never called, the first use lazily builds a client pointing
//! at the hard-coded local defaults (`http://127.0.0.1:8080`, 10 s timeout)
//! so zero-setup usage works out of the box. Production callers must
//! configure explicitly.
//!
//! The sync and async duals cannot share a connection pool, so the registry
//! holds at most one lazily built instance of each, both derived from the
//! same stored configuration.

use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use tracing::debug;

use crate::blocking::BlockingToolgateClient;
use crate::client::ToolgateClient;
use crate::config::ToolgateConfig;
use crate::error::TransportResult;

#[derive(Debug, Default)]
struct Registry {
    config: Option<ToolgateConfig>,
    client: Option<Arc<ToolgateClient>>,
    blocking: Option<Arc<BlockingToolgateClient>>,
}

fn registry() -> &'static RwLock<Registry> {
    static REGISTRY: OnceLock<RwLock<Registry>> = OnceLock::new();
    REGISTRY.get_or_init(|| RwLock::new(Registry::default()))
}

/// Install the configuration used by the default clients.
///
/// Intended to be called at most once, at startup. Calling it again
/// replaces the stored configuration and discards previously built default
/// instances; clients already handed out keep working until their last
/// `Arc` is dropped (the old transport is not force-closed — a known
/// limitation, documented rather than hidden).
pub fn configure(config: ToolgateConfig) {
    let mut registry = registry().write().unwrap_or_else(PoisonError::into_inner);
    debug!(url = %config.url, "configuring default policy client");
    registry.config = Some(config);
    registry.client = None;
    registry.blocking = None;
}

/// The process-wide async client, lazily built on first use.
pub fn default_client() -> TransportResult<Arc<ToolgateClient>> {
    {
        let registry = registry().read().unwrap_or_else(PoisonError::into_inner);
        if let Some(client) = &registry.client {
            return Ok(Arc::clone(client));
        }
    }

    // Re-check under the write lock so at most one instance is ever built.
    let mut registry = registry().write().unwrap_or_else(PoisonError::into_inner);
    if let Some(client) = &registry.client {
        return Ok(Arc::clone(client));
    }

    let config = registry.config.clone().unwrap_or_default();
    let client = Arc::new(ToolgateClient::new(config)?);
    registry.client = Some(Arc::clone(&client));
    Ok(client)
}

/// The process-wide blocking client, lazily built on first use.
pub fn default_blocking() -> TransportResult<Arc<BlockingToolgateClient>> {
    {
        let registry = registry().read().unwrap_or_else(PoisonError::into_inner);
        if let Some(client) = &registry.blocking {
            return Ok(Arc::clone(client));
        }
    }

    let mut registry = registry().write().unwrap_or_else(PoisonError::into_inner);
    if let Some(client) = &registry.blocking {
        return Ok(Arc::clone(client));
    }

    let config = registry.config.clone().unwrap_or_default();
    let client = Arc::new(BlockingToolgateClient::new(config)?);
    registry.blocking = Some(Arc::clone(&client));
    Ok(client)
}

/// Drop the registry's client instances, releasing their transports once no
/// other `Arc`s remain. The stored configuration is kept; the next use
/// rebuilds from it.
pub fn close_default() {
    let mut registry = registry().write().unwrap_or_else(PoisonError::into_inner);
    registry.client = None;
    registry.blocking = None;
}
