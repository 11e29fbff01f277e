// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Load-time failures.
//!
//! There is exactly one error type in this crate and only the load family
//! produces it. Searching never fails: an empty or non-matching query is a
//! valid, empty answer. Loading is all-or-nothing, so any variant below means
//! no store was built.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A raw index shard could not be turned into an [`IndexStore`](crate::IndexStore).
#[derive(Debug, Error)]
pub enum MalformedIndexError {
    /// Record key was empty, or contained nothing that survives normalization.
    #[error("record {record}: key {key:?} is empty after normalization")]
    EmptyKey {
        /// Position of the record in the shard.
        record: usize,
        /// Key as it appeared in the shard.
        key: String,
    },

    /// Record carried a label but no declaration sites.
    #[error("record {record} ({key:?}) has no occurrences")]
    NoOccurrences { record: usize, key: String },

    /// Occurrence had no page to link to.
    #[error("record {record} ({key:?}), occurrence {occurrence}: missing target path")]
    MissingTargetPath {
        record: usize,
        key: String,
        occurrence: usize,
    },

    /// Occurrence had no in-page fragment.
    #[error("record {record} ({key:?}), occurrence {occurrence}: missing anchor")]
    MissingAnchor {
        record: usize,
        key: String,
        occurrence: usize,
    },

    /// Shard text is not a well-formed record array.
    #[error("invalid index data: {0}")]
    Json(#[from] serde_json::Error),

    /// Script shard without a `searchData` array literal.
    #[error("script shard: {0}")]
    Script(String),

    /// Shard file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
