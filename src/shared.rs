// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Load once, share everywhere.
//!
//! Loading is the only step that can block, so it is the only step that
//! needs coordination. [`SharedIndex`] is a cloneable handle around a slot
//! that holds the outcome of the first load. The first caller of
//! [`get_or_load`](SharedIndex::get_or_load) runs its loader while holding
//! the lock; anyone who arrives meanwhile waits and then receives the same
//! `Arc`, or the same error. The loader never runs twice.
//!
//! Searching does not go through here: take the `Arc<IndexStore>` and call
//! [`search`](crate::search) on it as often as you like.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

use crate::error::MalformedIndexError;
use crate::store::IndexStore;

/// Result of the one load attempt, shared by every caller.
pub type LoadOutcome = Result<Arc<IndexStore>, Arc<MalformedIndexError>>;

#[derive(Debug, Clone, Default)]
pub struct SharedIndex {
    slot: Arc<Mutex<Option<LoadOutcome>>>,
}

impl SharedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the stored outcome, running `load` first if nobody has yet.
    pub fn get_or_load<F>(&self, load: F) -> LoadOutcome
    where
        F: FnOnce() -> Result<IndexStore, MalformedIndexError>,
    {
        let mut slot = self.slot.lock();
        if let Some(outcome) = slot.as_ref() {
            return outcome.clone();
        }
        let outcome = load().map(Arc::new).map_err(Arc::new);
        match &outcome {
            Ok(store) => debug!(entries = store.len(), "shared index loaded"),
            Err(err) => debug!(error = %err, "shared index load failed"),
        }
        *slot = Some(outcome.clone());
        outcome
    }

    /// The loaded store, if a load has completed successfully.
    pub fn get(&self) -> Option<Arc<IndexStore>> {
        self.slot.lock().as_ref().and_then(|o| o.as_ref().ok().cloned())
    }

    /// True once a load has completed, successfully or not.
    pub fn is_settled(&self) -> bool {
        self.slot.lock().is_some()
    }
}
