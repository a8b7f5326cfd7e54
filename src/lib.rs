//! Cart Service Library
//!
//! This library provides the HTTP surface of the cart service: a health
//! check and two placeholder cart endpoints, plus the startup glue that
//! wires configuration, the cache client and the listener together.

// Domain modules
pub mod cart;
pub mod health;

// Infrastructure
pub mod cache;
pub mod config;
pub mod error;
pub mod router;
pub mod server;

pub use error::{Result, ServiceError};
