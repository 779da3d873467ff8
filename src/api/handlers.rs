//! API Handlers
//!
//! HTTP request handlers for each shortener endpoint.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use axum::{
    extract::{Path, State},
    response::Redirect,
    Json,
};

use crate::error::{Result, ShortenerError};
use crate::models::{HealthResponse, ShortenRequest, ShortenResponse, SweepResponse};
use crate::shortener::{sweep, ShortKey, UrlStore};

/// Application state shared across all handlers.
///
/// Holds the single store instance for the process, wrapped in
/// Arc<RwLock<>> for thread-safe access, plus the request-layer
/// configuration the handlers need: the base URL for shorten responses and
/// the TTL threshold handed to sweeps.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe URL store
    pub store: Arc<RwLock<UrlStore>>,
    /// Base URL prepended to derived keys
    pub base_url: String,
    /// Entry lifetime applied by the cleanup endpoint
    pub ttl: Duration,
}

impl AppState {
    /// Creates a new AppState around the given store.
    pub fn new(store: UrlStore, base_url: impl Into<String>, ttl: Duration) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            base_url: base_url.into(),
            ttl,
        }
    }

    /// Creates a new AppState from configuration.
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self::new(
            UrlStore::new(),
            config.base_url.clone(),
            Duration::from_secs(config.ttl_seconds),
        )
    }
}

/// Handler for POST /url
///
/// Validates the submitted URL, derives its key, records the mapping, and
/// returns the shortened URL. Validation happens here so the store only
/// ever receives syntactically valid absolute URLs.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(req): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>> {
    // Validate request
    if let Some(error_msg) = req.validate() {
        return Err(ShortenerError::InvalidUrl(error_msg));
    }

    let key = ShortKey::derive(&req.url);

    // Acquire write lock and record the mapping
    {
        let mut store = state.store.write().await;
        store.put(key.clone(), req.url);
    }

    Ok(Json(ShortenResponse::new(&state.base_url, key.as_str())))
}

/// Handler for GET /:key
///
/// Resolves a key (or key prefix) to its stored URL and issues a permanent
/// redirect. An unknown key answers 404; a miss is an expected outcome, not
/// a fault.
pub async fn redirect_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Redirect> {
    // Acquire read lock for the prefix scan
    let store = state.store.read().await;
    let target = store.lookup_by_prefix(&key)?;

    Ok(Redirect::permanent(&target))
}

/// Handler for GET /internal/ttl
///
/// Runs one sweep with the configured threshold and reports how many aged
/// entries were removed.
pub async fn cleanup_handler(State(state): State<AppState>) -> Json<SweepResponse> {
    let removed = sweep(&state.store, state.ttl).await;

    Json(SweepResponse::new(removed))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_state() -> AppState {
        AppState::new(
            UrlStore::new(),
            "http://localhost:8123",
            Duration::from_secs(300),
        )
    }

    #[tokio::test]
    async fn test_shorten_and_redirect_handler() {
        let state = test_state();

        // Shorten a URL
        let req = ShortenRequest {
            url: "https://www.google.ca".to_string(),
        };
        let result = shorten_handler(State(state.clone()), Json(req)).await;
        let response = result.unwrap();
        assert_eq!(response.shortened_url, "http://localhost:8123/fe9970");

        // Resolve it back
        let result = redirect_handler(State(state), Path("fe9970".to_string())).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_redirect_unknown_key() {
        let state = test_state();

        let result = redirect_handler(State(state), Path("fe9971".to_string())).await;
        assert!(matches!(result, Err(ShortenerError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_shorten_invalid_url() {
        let state = test_state();

        // Url without protocol considered as incorrect
        let req = ShortenRequest {
            url: "www.google.ca".to_string(),
        };
        let result = shorten_handler(State(state.clone()), Json(req)).await;
        assert!(matches!(result, Err(ShortenerError::InvalidUrl(_))));

        // Nothing was stored
        assert!(state.store.read().await.is_empty());
    }

    #[tokio::test]
    async fn test_cleanup_handler_fresh_store() {
        let state = test_state();

        let req = ShortenRequest {
            url: "https://www.google.ca".to_string(),
        };
        shorten_handler(State(state.clone()), Json(req)).await.unwrap();

        // Entry is fresh, nothing to remove
        let response = cleanup_handler(State(state.clone())).await;
        assert_eq!(response.outdated_entries_count, 0);
        assert_eq!(state.store.read().await.len(), 1);
    }

    #[tokio::test]
    async fn test_cleanup_handler_zero_ttl() {
        // A zero threshold ages out every entry immediately
        let state = AppState::new(UrlStore::new(), "http://localhost:8123", Duration::ZERO);

        let req = ShortenRequest {
            url: "https://www.google.ca".to_string(),
        };
        shorten_handler(State(state.clone()), Json(req)).await.unwrap();

        let response = cleanup_handler(State(state.clone())).await;
        assert_eq!(response.outdated_entries_count, 1);

        let result = redirect_handler(State(state), Path("fe9970".to_string())).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
