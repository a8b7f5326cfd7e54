//! Routing module for the cart service

use crate::cart::state::SharedState;
use axum::{extract::Request, http::HeaderName, Router};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::{info_span, Span};
use uuid::Uuid;

/// Header carrying the per-request identifier
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Generates a fresh UUID v4 for every request that arrives without one
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().simple().to_string();
        id.parse().ok().map(RequestId::new)
    }
}

/// Request id carried by `request`, or an empty string when none is set
pub fn request_id_of(request: &Request) -> &str {
    request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
}

/// Span for one HTTP request, tagged with its request id
fn request_span(request: &Request) -> Span {
    info_span!(
        "request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id_of(request),
    )
}

/// Creates and configures the application router with all routes and middleware
pub fn create_app_router(state: SharedState) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    // Middleware: CORS (Permissive)
    let cors_layer = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Outermost first: the id is assigned before the trace span is built.
    let middleware = ServiceBuilder::new()
        .layer(SetRequestIdLayer::new(request_id.clone(), MakeRequestUuid))
        .layer(TraceLayer::new_for_http().make_span_with(request_span))
        .layer(PropagateRequestIdLayer::new(request_id))
        .layer(cors_layer);

    // Routes: cart endpoints are reachable both bare and under /api
    Router::new()
        .merge(crate::health::routes())
        .merge(crate::cart::routes())
        .nest("/api", crate::cart::routes())
        .layer(middleware)
        .with_state(state)
}
