//! REST API handlers for cart operations
//!
//! Both endpoints are stubs: they echo the user identifier and return
//! canned data without touching any storage.

use super::{helpers::*, models::*, state::SharedState};
use axum::{
    http::Uri,
    routing::{get, post},
    Json, Router,
};
use tracing::debug;

/// Creates routes for cart-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/cart/:user_id", get(get_cart))
        .route("/cart/:user_id/add", post(add_to_cart))
        // An empty id leaves an empty path segment, which `:user_id` never matches.
        .route("/cart/", get(get_cart))
        .route("/cart//add", post(add_to_cart))
}

/// Endpoint: GET /cart/:user_id
/// Returns the (always empty) cart for the user.
///
/// The id is read from the raw URI so that no segment is ever rejected.
async fn get_cart(uri: Uri) -> Json<CartResponse> {
    let user_id = user_id_from_path(uri.path());
    debug!(%user_id, "get cart");
    Json(empty_cart(user_id))
}

/// Endpoint: POST /cart/:user_id/add
/// Acknowledges an add-to-cart request. The body is never read.
async fn add_to_cart(uri: Uri) -> Json<AddToCartResponse> {
    let user_id = user_id_from_path(uri.path());
    debug!(%user_id, "add to cart");
    Json(add_confirmation(user_id))
}
