//! Cart Response Models
//!
//! This module contains the response shapes returned by the cart
//! endpoints. Nothing here is persisted.

use serde::Serialize;

// =============================================================================
// Cart Constants
// =============================================================================

/// Confirmation returned by the add-to-cart endpoint
pub const ADD_TO_CART_MESSAGE: &str = "Item added to cart";

// =============================================================================
// Cart Response Models
// =============================================================================

/// Response for reading a user's cart
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CartResponse {
    /// User identifier, echoed from the request path
    pub user_id: String,

    /// Item identifiers in the cart (always empty)
    pub items: Vec<String>,

    /// Cart total (always zero)
    pub total: u64,
}

/// Response for adding an item to a user's cart
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AddToCartResponse {
    /// Static confirmation message
    pub message: &'static str,

    /// User identifier, echoed from the request path
    pub user_id: String,
}
