//! API Routes
//!
//! Configures the Axum router with all shortener endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    cleanup_handler, health_handler, redirect_handler, shorten_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /url` - Shorten a URL
/// - `GET /:key` - Redirect to the URL stored under a key prefix
/// - `GET /internal/ttl` - Sweep aged entries and report the removed count
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all endpoints
    Router::new()
        .route("/url", post(shorten_handler))
        .route("/internal/ttl", get(cleanup_handler))
        .route("/health", get(health_handler))
        .route("/:key", get(redirect_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
