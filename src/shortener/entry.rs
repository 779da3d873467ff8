//! Store Entry Module
//!
//! Defines the structure for individual stored URLs with their creation time.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

// == Url Entry ==
/// A stored URL plus the moment it was recorded.
///
/// Entries are immutable once created. A `put` with the same key replaces
/// the entry wholesale, refreshing the creation timestamp; fields are never
/// mutated in place.
#[derive(Debug, Clone)]
pub struct UrlEntry {
    /// The original URL
    pub value: String,
    /// Creation timestamp (Unix milliseconds)
    pub created_at: u64,
}

impl UrlEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current time.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            created_at: current_timestamp_ms(),
        }
    }

    // == Age ==
    /// Returns the entry's age in milliseconds.
    pub fn age_ms(&self) -> u64 {
        current_timestamp_ms().saturating_sub(self.created_at)
    }

    // == Is Older Than ==
    /// Checks whether the entry's age has reached `ttl`.
    ///
    /// Boundary condition: an entry whose age equals the threshold exactly
    /// counts as aged out, so a zero threshold drops every entry.
    pub fn is_older_than(&self, ttl: Duration) -> bool {
        self.age_ms() >= ttl.as_millis() as u64
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}
