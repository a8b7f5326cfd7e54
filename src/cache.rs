//! Key-value cache client handle.
//!
//! The service holds a cache connection so cart persistence can be added
//! later. Today it is only probed once at startup; no handler touches it.

use std::time::Duration;

use tracing::{info, warn};

use crate::error::{Result, ServiceError};

/// Upper bound on the startup connectivity probe.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Outcome of the startup connectivity probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    /// The cache answered `PING`.
    Available,
    /// The cache could not be reached; the service runs without it.
    Unavailable,
}

/// Handle to the cache service.
///
/// Constructing it does not open a connection.
#[derive(Debug, Clone)]
pub struct CacheClient {
    client: redis::Client,
}

impl CacheClient {
    /// Builds a client for `url` (e.g. `redis://redis-cache:6379/`).
    pub fn open(url: &str) -> Result<Self> {
        let client = redis::Client::open(url)?;
        Ok(Self { client })
    }

    /// Opens a connection and issues a single `PING`.
    pub async fn ping(&self) -> Result<()> {
        let ping = async {
            let mut conn = self.client.get_multiplexed_async_connection().await?;
            let _pong: String = redis::cmd("PING").query_async(&mut conn).await?;
            Ok::<_, redis::RedisError>(())
        };

        tokio::time::timeout(PROBE_TIMEOUT, ping)
            .await
            .map_err(|_| ServiceError::CacheTimeout(PROBE_TIMEOUT))??;
        Ok(())
    }

    /// Best-effort connectivity check. Failures are logged, never returned.
    pub async fn probe(&self) -> CacheStatus {
        let addr = self.client.get_connection_info().addr.to_string();
        match self.ping().await {
            Ok(()) => {
                info!(cache = %addr, "cache connection established");
                CacheStatus::Available
            }
            Err(e) => {
                warn!(cache = %addr, error = %e, "cache connection failed");
                CacheStatus::Unavailable
            }
        }
    }
}
