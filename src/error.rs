//! Error types for the cart service.

use std::net::SocketAddr;
use std::time::Duration;

use thiserror::Error;

/// Errors raised while starting or running the service.
///
/// Request handlers never fail; everything here happens around startup.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// Environment could not be deserialised into a [`crate::config::Config`].
    #[error("configuration error: {0}")]
    Config(#[from] envy::Error),

    /// Cache client construction or command failure.
    #[error("cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// Cache probe did not answer in time.
    #[error("cache did not respond within {0:?}")]
    CacheTimeout(Duration),

    /// HTTP listener could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        /// Address we tried to bind.
        addr: SocketAddr,
        /// Underlying socket error.
        source: std::io::Error,
    },

    /// IO error while serving.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, ServiceError>;
