//! Repeated identical queries give identical output.

use doxsearch::{load_path, search, LoadOptions, QueryEngine};

use super::common::{fixture_store, FIXTURE_SHARD};

#[test]
fn test_repeated_search_identical() {
    let store = fixture_store();
    let engine = QueryEngine::new(&store);

    for query in ["c", "clear", "graph", "o", "zzz", ""] {
        let first = engine.search(query);
        for run in 0..10 {
            assert_eq!(engine.search(query), first, "run {} of {:?} differs", run, query);
        }
    }
}

#[test]
fn test_fresh_stores_agree() {
    let a = load_path(FIXTURE_SHARD, &LoadOptions::default()).unwrap();
    let b = load_path(FIXTURE_SHARD, &LoadOptions::default()).unwrap();

    for query in ["c", "cl", "ne", "t"] {
        assert_eq!(search(&a, query), search(&b, query), "query {:?}", query);
    }
}
