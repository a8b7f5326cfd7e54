//! Shopping Cart Domain Module
//!
//! This module contains the cart endpoints, including:
//! - Response models (CartResponse, AddToCartResponse)
//! - Helpers that build the canned responses
//! - Application state shared with the handlers
//! - REST API handlers

pub mod handlers;
pub mod helpers;
pub mod models;
pub mod state;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use state::{AppState, SharedState};
