//! Request DTOs for the shortener API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;
use url::Url;

/// Request body for the shorten operation (POST /url)
///
/// # Fields
/// - `url`: The full URL to shorten
#[derive(Debug, Clone, Deserialize)]
pub struct ShortenRequest {
    /// The URL to shorten
    pub url: String,
}

impl ShortenRequest {
    /// Validates the request data
    ///
    /// The core store accepts any string, so URL syntax is rejected here,
    /// before derivation. Only absolute URLs pass; a bare host without a
    /// scheme does not parse and is refused.
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.url.is_empty() {
            return Some("url cannot be empty".to_string());
        }
        if Url::parse(&self.url).is_err() {
            return Some(format!("'{}' is not an absolute url", self.url));
        }
        None
    }
}
