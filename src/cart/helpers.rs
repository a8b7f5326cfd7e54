//! Shopping Cart Response Helpers
//!
//! This module contains helper functions that build the canned cart
//! responses.

use super::models::{AddToCartResponse, CartResponse, ADD_TO_CART_MESSAGE};
use percent_encoding::percent_decode_str;

/// Extracts the user id from a `/cart/{user_id}[/add]` request path.
///
/// Any mount prefix before `/cart/` is skipped. The segment is
/// percent-decoded; bytes that are not valid UTF-8 become U+FFFD.
pub fn user_id_from_path(path: &str) -> String {
    let rest = path.split_once("/cart/").map_or("", |(_, rest)| rest);
    let segment = rest.split('/').next().unwrap_or_default();
    percent_decode_str(segment).decode_utf8_lossy().into_owned()
}

/// Returns the cart for `user_id`: no items and a zero total.
///
/// The identifier is not validated and no lookup takes place.
pub fn empty_cart(user_id: String) -> CartResponse {
    CartResponse {
        user_id,
        items: Vec::new(),
        total: 0,
    }
}

/// Returns the add-to-cart confirmation for `user_id`.
pub fn add_confirmation(user_id: String) -> AddToCartResponse {
    AddToCartResponse {
        message: ADD_TO_CART_MESSAGE,
        user_id,
    }
}
