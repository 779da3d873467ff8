//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Base URL prepended to derived keys in shorten responses
    pub base_url: String,
    /// Maximum age in seconds an entry may reach before a sweep evicts it
    pub ttl_seconds: u64,
    /// Background sweep task interval in seconds
    pub sweep_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 8123)
    /// - `BASE_URL` - Base URL for shortened links (default: http://localhost:8123)
    /// - `TTL_SECONDS` - Entry lifetime in seconds (default: 300)
    /// - `SWEEP_INTERVAL` - Background sweep frequency in seconds (default: 60)
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8123),
            base_url: env::var("BASE_URL")
                .ok()
                .unwrap_or_else(|| "http://localhost:8123".to_string()),
            ttl_seconds: env::var("TTL_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(300),
            sweep_interval: env::var("SWEEP_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 8123,
            base_url: "http://localhost:8123".to_string(),
            ttl_seconds: 300,
            sweep_interval: 60,
        }
    }
}
