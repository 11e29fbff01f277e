//! One load shared by concurrent readers.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

use doxsearch::{load_path, search, LoadOptions, SharedIndex};

use super::common::{FIXTURE_ENTRIES, FIXTURE_SHARD};

#[test]
fn test_concurrent_first_use_loads_once() {
    let shared = SharedIndex::new();
    let loads = Arc::new(AtomicUsize::new(0));
    let barrier = Arc::new(Barrier::new(6));

    let handles: Vec<_> = (0..6)
        .map(|_| {
            let shared = shared.clone();
            let loads = Arc::clone(&loads);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                let store = shared
                    .get_or_load(|| {
                        loads.fetch_add(1, Ordering::SeqCst);
                        load_path(FIXTURE_SHARD, &LoadOptions::default())
                    })
                    .unwrap();
                search(&store, "clear").len()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 4);
    }
    assert_eq!(loads.load(Ordering::SeqCst), 1);
    assert_eq!(shared.get().unwrap().len(), FIXTURE_ENTRIES);
}
