//! Cart Service State
//!
//! Application state shared by every request handler.

use crate::cache::{CacheClient, CacheStatus};
use std::sync::Arc;

// =============================================================================
// Application State
// =============================================================================

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Core application state. Read-only once the server starts.
#[derive(Debug)]
pub struct AppState {
    /// Handle to the key-value cache. Reserved for cart persistence;
    /// no handler uses it yet.
    pub cache: CacheClient,

    /// Result of the startup connectivity probe.
    pub cache_status: CacheStatus,
}

impl AppState {
    /// Creates state around an already constructed cache client
    pub fn new(cache: CacheClient, cache_status: CacheStatus) -> Self {
        Self {
            cache,
            cache_status,
        }
    }

    /// Wraps the state for sharing with the router
    pub fn shared(self) -> SharedState {
        Arc::new(self)
    }
}
