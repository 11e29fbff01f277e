// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query engine: substring filter, position ranking, overload grouping.
//!
//! This runs on every keystroke, so it does the obvious thing and nothing
//! more. Normalize the query the same way keys were normalized, keep every
//! key that contains it, sort by where the match starts, then by key.
//!
//! # Ordering
//!
//! ```text
//! query "close"
//!   closeness      pos 0
//!   closest_next   pos 0   ("closen" < "closes")
//!   disclosed      pos 3
//! ```
//!
//! Earlier matches rank higher, which rewards prefix-like hits without
//! making the search prefix-only. Keys are unique, so the order is total and
//! repeated identical queries give identical output.
//!
//! # Grouping
//!
//! A key with one declaration renders as one row. A key with several renders
//! as the label alone followed by one row per declaration, labelled by scope,
//! in the order the shard listed them.

use std::cmp::Ordering;

use tracing::trace;

use crate::store::IndexStore;
use crate::types::{DisplayGroup, DisplayRow, Entry, GroupBody, Occurrence};

/// Stateless search over a borrowed store.
#[derive(Debug, Clone, Copy)]
pub struct QueryEngine<'a> {
    store: &'a IndexStore,
}

impl<'a> QueryEngine<'a> {
    pub fn new(store: &'a IndexStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &'a IndexStore {
        self.store
    }

    /// Ordered, grouped matches for `query`. Never fails; an empty or
    /// punctuation-only query returns nothing.
    pub fn search(&self, query: &str) -> Vec<DisplayGroup> {
        let needle = self.store.normalizer().normalize(query);
        if needle.is_empty() {
            return Vec::new();
        }

        let mut hits: Vec<(usize, &Entry)> = self
            .store
            .all_entries()
            .filter_map(|entry| match_position(entry.key(), &needle).map(|pos| (pos, entry)))
            .collect();
        hits.sort_by(|a, b| compare_hits(*a, *b));

        trace!(query, needle = %needle, hits = hits.len(), "search");

        hits.into_iter()
            .map(|(position, entry)| build_group(entry, position))
            .collect()
    }
}

/// Search `store` for `query`.
pub fn search(store: &IndexStore, query: &str) -> Vec<DisplayGroup> {
    QueryEngine::new(store).search(query)
}

/// Character offset of the first occurrence of `needle` in `key`.
fn match_position(key: &str, needle: &str) -> Option<usize> {
    key.find(needle).map(|byte| key[..byte].chars().count())
}

fn compare_hits(a: (usize, &Entry), b: (usize, &Entry)) -> Ordering {
    a.0.cmp(&b.0).then_with(|| a.1.key().cmp(b.1.key()))
}

fn build_group(entry: &Entry, position: usize) -> DisplayGroup {
    let body = match entry.occurrences() {
        [only] => GroupBody::Single {
            row: row(entry.label().to_string(), only),
        },
        many => GroupBody::Overloaded {
            label: entry.label().to_string(),
            children: many
                .iter()
                .map(|occ| row(child_text(entry, occ), occ))
                .collect(),
        },
    };
    DisplayGroup {
        key: entry.key().to_string(),
        position,
        body,
    }
}

/// Scope label, or `label (page)` when the shard gave none. A site declared
/// under a different label than the header (`operator[]` merged into
/// `operator=`) is prefixed with its own label.
fn child_text(entry: &Entry, occ: &Occurrence) -> String {
    match occ.scope_label() {
        Some(scope) if occ.label() == entry.label() => scope.to_string(),
        Some(scope) => format!("{} ({})", occ.label(), scope),
        None => format!("{} ({})", occ.label(), occ.target_path()),
    }
}

fn row(text: String, occ: &Occurrence) -> DisplayRow {
    DisplayRow {
        text,
        target_path: occ.target_path().to_string(),
        anchor: occ.anchor().to_string(),
    }
}
