//! Property-Based Tests for the Shortener Core
//!
//! Uses proptest to verify the derivation, store, and sweep contracts.

use proptest::prelude::*;
use std::collections::HashMap;
use std::time::Duration;

use crate::shortener::entry::current_timestamp_ms;
use crate::shortener::{ShortKey, UrlEntry, UrlStore, KEY_LENGTH};

// == Strategies ==
/// Generates plausible absolute URLs
fn url_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9]{1,12}(/[a-zA-Z0-9_-]{1,16}){0,3}"
        .prop_map(|tail| format!("https://example.com/{}", tail))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Derivation is deterministic: deriving twice from the same input
    // always yields the same key.
    #[test]
    fn prop_derivation_deterministic(url in url_strategy()) {
        prop_assert_eq!(ShortKey::derive(&url), ShortKey::derive(&url));
    }

    // Every derived key is exactly KEY_LENGTH lowercase hex characters.
    #[test]
    fn prop_key_shape(input in ".*") {
        let key = ShortKey::derive(&input);
        prop_assert_eq!(key.as_str().len(), KEY_LENGTH);
        prop_assert!(key
            .as_str()
            .chars()
            .all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    // Round-trip: after put(derive(u), u), looking up the full derived key
    // returns u.
    #[test]
    fn prop_roundtrip(url in url_strategy()) {
        let mut store = UrlStore::new();
        let key = ShortKey::derive(&url);

        store.put(key.clone(), url.clone());

        let resolved = store.lookup_by_prefix(key.as_str()).unwrap();
        prop_assert_eq!(resolved, url);
    }

    // Any prefix of a stored key resolves to a value whose key carries that
    // prefix literally.
    #[test]
    fn prop_prefix_match(url in url_strategy(), cut in 0usize..=KEY_LENGTH) {
        let mut store = UrlStore::new();
        let key = ShortKey::derive(&url);
        store.put(key.clone(), url);

        let prefix = &key.as_str()[..cut];
        let resolved = store.lookup_by_prefix(prefix);
        prop_assert!(resolved.is_ok(), "prefix '{}' of stored key should match", prefix);
    }

    // Overwrite semantics: a second put under the same key leaves exactly
    // one entry holding the second value.
    #[test]
    fn prop_overwrite_wins(url in url_strategy(), first in url_strategy(), second in url_strategy()) {
        let mut store = UrlStore::new();
        let key = ShortKey::derive(&url);

        store.put(key.clone(), first);
        store.put(key.clone(), second.clone());

        prop_assert_eq!(store.len(), 1);
        prop_assert_eq!(store.lookup_by_prefix(key.as_str()).unwrap(), second);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    // A sweep drops exactly the entries at or past the threshold and keeps
    // the rest, whatever mix of ages the store holds. Ages stay well clear
    // of the threshold so wall-clock drift during the test cannot flip an
    // entry across it.
    #[test]
    fn prop_sweep_partitions_by_age(
        ages_ms in prop::collection::vec(
            prop_oneof![0u64..50_000, 70_000u64..120_000],
            1..24,
        )
    ) {
        let rt = tokio::runtime::Runtime::new().unwrap();
        rt.block_on(async {
            let ttl = Duration::from_secs(60);
            let now = current_timestamp_ms();

            let store = tokio::sync::RwLock::new(UrlStore::new());
            let mut entries = HashMap::new();
            for (i, age) in ages_ms.iter().enumerate() {
                let url = format!("https://example.com/{}", i);
                entries.insert(
                    ShortKey::derive(&url),
                    UrlEntry { value: url, created_at: now - age },
                );
            }
            let total = entries.len();
            let expected_removed = entries
                .values()
                .filter(|entry| now - entry.created_at >= ttl.as_millis() as u64)
                .count();
            store.write().await.replace_all(entries);

            let removed = crate::shortener::sweep(&store, ttl).await;

            prop_assert_eq!(removed, expected_removed);
            prop_assert_eq!(store.read().await.len(), total - expected_removed);
            Ok(())
        })?;
    }
}
