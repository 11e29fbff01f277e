//! Load invariants over random record sets.

use std::collections::HashSet;

use doxsearch::{load, normalize, RawRecord};
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Identifier-like keys, with underscores and mixed case so normalization
/// and merging both get exercised.
pub fn key_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-cA-C][a-c_]{0,5}").unwrap()
}

/// `(key, occurrence count)` pairs; repeated keys are likely.
pub fn records_strategy() -> impl Strategy<Value = Vec<(String, usize)>> {
    prop::collection::vec((key_strategy(), 1usize..4), 0..24)
}

/// Expand into records whose anchors encode the global input order.
pub fn to_records(spec: &[(String, usize)]) -> Vec<RawRecord> {
    let mut seq = 0;
    spec.iter()
        .flat_map(|(key, n)| {
            (0..*n)
                .map(|_| {
                    seq += 1;
                    RawRecord::one(key, key, "scope", "page.html", &format!("{:04}", seq))
                })
                .collect::<Vec<_>>()
        })
        .collect()
}

proptest! {
    /// Keys are unique and every entry has at least one occurrence.
    #[test]
    fn prop_keys_unique_and_nonempty(spec in records_strategy()) {
        let store = load(to_records(&spec)).unwrap();

        let mut seen = HashSet::new();
        for entry in store.all_entries() {
            prop_assert!(seen.insert(entry.key().to_string()), "duplicate key {}", entry.key());
            prop_assert!(!entry.occurrences().is_empty());
        }
    }

    /// Nothing is lost or invented by merging.
    #[test]
    fn prop_occurrences_conserved(spec in records_strategy()) {
        let total: usize = spec.iter().map(|(_, n)| n).sum();
        let store = load(to_records(&spec)).unwrap();

        prop_assert_eq!(store.occurrence_count(), total);

        let distinct: HashSet<_> = spec.iter().map(|(k, _)| normalize(k)).collect();
        prop_assert_eq!(store.len(), distinct.len());
    }

    /// Merged occurrences stay in input order.
    #[test]
    fn prop_merge_preserves_input_order(spec in records_strategy()) {
        let store = load(to_records(&spec)).unwrap();

        for entry in store.all_entries() {
            let anchors: Vec<_> = entry.occurrences().iter().map(|o| o.anchor()).collect();
            let mut sorted = anchors.clone();
            sorted.sort();
            prop_assert_eq!(anchors, sorted);
        }
    }
}
