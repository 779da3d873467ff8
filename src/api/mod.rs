//! API Module
//!
//! HTTP handlers and routing for the shortener REST API.
//!
//! # Endpoints
//! - `POST /url` - Shorten a URL
//! - `GET /:key` - Redirect to the URL stored under a key prefix
//! - `GET /internal/ttl` - Sweep aged entries and report the removed count
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
