//! Url Store Module
//!
//! The shared mapping from short keys to stored URLs.

use std::collections::HashMap;

use crate::error::{Result, ShortenerError};
use crate::shortener::{ShortKey, UrlEntry};

// == Url Store ==
/// In-memory mapping from [`ShortKey`] to [`UrlEntry`].
///
/// A single instance is created at startup, wrapped in `Arc<RwLock<..>>`,
/// and shared by the request layer and the sweep trigger. The store itself
/// holds no lock; callers serialize access through the surrounding lock
/// (reads under the read guard, `put` and `replace_all` under the write
/// guard).
///
/// The mapping is unbounded; memory is reclaimed only by [`sweep`] passes.
///
/// [`sweep`]: crate::shortener::sweep
#[derive(Debug, Default)]
pub struct UrlStore {
    /// Key-value storage
    entries: HashMap<ShortKey, UrlEntry>,
}

impl UrlStore {
    // == Constructor ==
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    // == Put ==
    /// Records `value` under `key`, stamping the entry with the current time.
    ///
    /// Unconditional: if the key is already present the old entry is replaced
    /// wholesale and its creation time refreshed. Distinct URLs that derive
    /// the same key collide here, and the newer one wins silently.
    pub fn put(&mut self, key: ShortKey, value: impl Into<String>) {
        self.entries.insert(key, UrlEntry::new(value));
    }

    // == Lookup By Prefix ==
    /// Returns the stored URL of the first key starting with `prefix`.
    ///
    /// The scan visits keys in the map's own iteration order, which is
    /// unspecified; when several keys share the prefix, which one is
    /// returned is deliberately left open. Callers get `NotFound` when no
    /// key matches, which is an expected result rather than a fault.
    pub fn lookup_by_prefix(&self, prefix: &str) -> Result<String> {
        self.entries
            .iter()
            .find(|(key, _)| key.as_str().starts_with(prefix))
            .map(|(_, entry)| entry.value.clone())
            .ok_or_else(|| ShortenerError::NotFound(prefix.to_string()))
    }

    // == Replace All ==
    /// Swaps the entire mapping contents with `entries`.
    ///
    /// Used by the sweeper to install the surviving subset in one step. The
    /// store keeps its identity; only the owned map changes, so every holder
    /// of the shared instance observes the swap atomically through the
    /// surrounding lock.
    pub fn replace_all(&mut self, entries: HashMap<ShortKey, UrlEntry>) {
        self.entries = entries;
    }

    // == Iter ==
    /// Iterates over the stored entries, in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&ShortKey, &UrlEntry)> {
        self.entries.iter()
    }

    // == Length ==
    /// Returns the current number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries.
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
