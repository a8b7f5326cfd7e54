//! Health check endpoint

use axum::{routing::get, Json, Router};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::cart::SharedState;

/// Name reported by the health endpoint.
pub const SERVICE_NAME: &str = "cart-service";

/// Health check response.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct HealthResponse {
    /// Always "healthy".
    pub status: &'static str,
    /// Service name.
    pub service: &'static str,
    /// RFC3339 time the request was handled.
    pub timestamp: String,
}

impl HealthResponse {
    /// Builds a response stamped with the current time.
    pub fn now() -> Self {
        Self {
            status: "healthy",
            service: SERVICE_NAME,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

/// Creates the health route
pub fn routes() -> Router<SharedState> {
    Router::new().route("/health", get(health_check))
}

/// GET /health - always healthy, independent of the cache.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::now())
}
