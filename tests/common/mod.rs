//! Shared test utilities and fixtures.

#![allow(dead_code)]

use doxsearch::{
    load, load_path, DisplayGroup, IndexStore, LoadOptions, RawBody, RawOccurrence, RawRecord,
    RawSymbol,
};

// ============================================================================
// FIXTURES
// ============================================================================

/// Real Doxygen shard: functions starting with "c" from a C++ graph library.
pub const FIXTURE_SHARD: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/tests/fixtures/functions_2.js"
);

/// Entries in the fixture shard.
pub const FIXTURE_ENTRIES: usize = 13;

/// Declaration sites in the fixture shard.
pub const FIXTURE_OCCURRENCES: usize = 26;

/// The two-record `clear` example: same key, different scopes.
pub const CLEAR_JSON: &str = r#"[
    ["clear", ["clear", [" boolean_path", "a.html", "f1"]]],
    ["clear", ["clear", [" uxgraph", "b.html", "f2"]]]
]"#;

pub fn fixture_store() -> IndexStore {
    load_path(FIXTURE_SHARD, &LoadOptions::default()).expect("fixture shard should load")
}

// ============================================================================
// BUILDERS
// ============================================================================

/// Record with one occurrence whose anchor is derived from the key and a
/// sequence number, so tests can check order by anchor.
pub fn record(key: &str, seq: usize) -> RawRecord {
    RawRecord::one(
        key,
        key,
        &format!("scope{}", seq),
        &format!("{}.html", key),
        &format!("a{}", seq),
    )
}

/// Record in the multi-occurrence shape with `n` occurrences.
pub fn overloaded(key: &str, n: usize) -> RawRecord {
    let symbols = (0..n)
        .map(|i| {
            RawSymbol(
                key.to_string(),
                RawOccurrence::new(&format!("ns{}::{}", i, key), "page.html", &format!("o{}", i)),
            )
        })
        .collect();
    RawRecord(key.to_string(), RawBody::Many(symbols))
}

/// Store with one single-occurrence entry per key.
pub fn store_of(keys: &[&str]) -> IndexStore {
    load(keys.iter().enumerate().map(|(i, k)| record(k, i))).expect("test records are valid")
}

// ============================================================================
// ASSERTIONS
// ============================================================================

pub fn keys(groups: &[DisplayGroup]) -> Vec<&str> {
    groups.iter().map(|g| g.key.as_str()).collect()
}

pub fn anchors(group: &DisplayGroup) -> Vec<&str> {
    group.rows().iter().map(|r| r.anchor.as_str()).collect()
}

/// Position ascending, then key ascending.
pub fn assert_ordered(groups: &[DisplayGroup]) {
    for pair in groups.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(
            a.position < b.position || (a.position == b.position && a.key <= b.key),
            "{:?}@{} must not precede {:?}@{}",
            a.key,
            a.position,
            b.key,
            b.position
        );
    }
}
