//! API route modules
//!
//! # Structure
//!
//! - [`employees`] - employee CRUD endpoints
//! - [`health`] - health check endpoint

use axum::{Router, routing::get};
use http::{HeaderName, HeaderValue};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::core::ServerState;

pub mod employees;
pub mod health;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Liveness probe kept from the original deployment scripts
async fn root() -> &'static str {
    "Employee Directory API is running..."
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .route("/", get(root))
        .merge(employees::router())
        .merge(health::router())
}

/// Build the fully configured application with middleware and state.
///
/// Used by the HTTP server and by in-process tests.
pub fn build_app(state: &ServerState) -> Router {
    build_router()
        .with_state(state.clone())
        // ========== Tower HTTP Middleware ==========
        // CORS - the client is served from a different origin
        .layer(CorsLayer::permissive())
        // Compression - gzip responses
        .layer(CompressionLayer::new())
        // Trace - request logging at INFO level
        .layer(TraceLayer::new_for_http())
        // Request ID - generate a unique ID for each request
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static("x-request-id"),
            XRequestId,
        ))
        // Propagate request ID to the response
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            "x-request-id",
        )))
}
