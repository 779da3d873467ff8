//! Sweep Module
//!
//! On-demand eviction of aged entries from the shared store.

use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::RwLock;

use crate::shortener::{ShortKey, UrlEntry, UrlStore};

// == Sweep ==
/// Runs one eviction pass over the shared store.
///
/// Partitions the current entries by age against `ttl` (an entry whose age
/// has reached the threshold is dropped), installs the surviving subset via
/// [`UrlStore::replace_all`], and returns the number of entries removed.
///
/// The partition and the swap happen under one exclusive lock acquisition,
/// so a concurrent `put` either lands before the pass and is judged by its
/// age, or after it and survives untouched; no reader observes a partially
/// swapped map. Sweeps invoked concurrently serialize on the lock, and the
/// later one simply sees the already-reduced entry set, which means removed
/// counts from overlapping sweeps are not additive.
///
/// The sweep never schedules itself; callers (an HTTP trigger or the
/// background task) decide when to invoke it and which threshold applies.
pub async fn sweep(store: &RwLock<UrlStore>, ttl: Duration) -> usize {
    let mut store = store.write().await;

    let total = store.len();
    let kept: HashMap<ShortKey, UrlEntry> = store
        .iter()
        .filter(|(_, entry)| !entry.is_older_than(ttl))
        .map(|(key, entry)| (key.clone(), entry.clone()))
        .collect();

    let removed = total - kept.len();
    store.replace_all(kept);
    removed
}
