//! Response DTOs for the shortener API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

/// Response body for the shorten operation (POST /url)
#[derive(Debug, Clone, Serialize)]
pub struct ShortenResponse {
    /// The shortened URL (configured base URL joined with the derived key)
    pub shortened_url: String,
}

impl ShortenResponse {
    /// Creates a new ShortenResponse from the base URL and derived key.
    pub fn new(base_url: &str, key: &str) -> Self {
        Self {
            shortened_url: format!("{}/{}", base_url.trim_end_matches('/'), key),
        }
    }
}

/// Response body for the cleanup endpoint (GET /internal/ttl)
#[derive(Debug, Clone, Serialize)]
pub struct SweepResponse {
    /// Number of aged entries removed by the sweep
    pub outdated_entries_count: usize,
}

impl SweepResponse {
    /// Creates a new SweepResponse
    pub fn new(outdated_entries_count: usize) -> Self {
        Self {
            outdated_entries_count,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
