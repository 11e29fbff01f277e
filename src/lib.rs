// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Incremental substring search over documentation symbol index shards.
//!
//! A documentation generator emits, per shard, a list of symbol names and the
//! places each one is declared. This crate loads such a shard once into an
//! immutable [`IndexStore`] and answers live queries against it with ranked,
//! grouped [`DisplayGroup`]s that a search box can render directly.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  format/     │────▶│  store.rs    │────▶│  query.rs    │
//! │ (RawRecord,  │     │ (IndexBuilder│     │ (search,     │
//! │  script, _XX)│     │  IndexStore) │     │  grouping)   │
//! └──────────────┘     └──────────────┘     └──────────────┘
//!                             │                    │
//!                             ▼                    ▼
//!                      ┌─────────────────────────────────┐
//!                      │ normalize.rs  (keys == queries) │
//!                      └─────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use doxsearch::{load, search, RawRecord};
//!
//! let store = load(vec![
//!     RawRecord::one("clear", "clear", " boolean_path", "a.html", "f1"),
//!     RawRecord::one("clear", "clear", " uxgraph", "b.html", "f2"),
//! ])?;
//!
//! let groups = search(&store, "cle");
//! assert_eq!(groups.len(), 1);
//! assert_eq!(groups[0].rows().len(), 2);
//! # Ok::<(), doxsearch::MalformedIndexError>(())
//! ```

pub mod error;
pub mod format;
pub mod normalize;
pub mod query;
pub mod shared;
pub mod store;
pub mod types;

pub use error::MalformedIndexError;
pub use format::{RawBody, RawOccurrence, RawRecord, RawSymbol};
pub use normalize::{normalize, Normalizer};
pub use query::{search, QueryEngine};
pub use shared::{LoadOutcome, SharedIndex};
pub use store::{
    load, load_path, load_str, load_with, IndexBuilder, IndexStore, KeyEscapes, LoadOptions,
};
pub use types::{DisplayGroup, DisplayRow, Entry, GroupBody, Occurrence};
