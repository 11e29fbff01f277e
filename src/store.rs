// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The index store and its one-shot construction.
//!
//! Records go in through [`IndexBuilder`], which validates each one, folds
//! its key and merges it into any earlier entry with the same key. `push`
//! consumes the builder and hands it back only on success, so a failed load
//! cannot leave a half-built store behind: the builder, and everything it
//! had accumulated, is dropped with the error.
//!
//! # Invariants
//!
//! - Keys are unique and already normalized with the store's [`Normalizer`].
//! - Every entry has at least one occurrence.
//! - Occurrences keep input order, including across merged records.
//! - Entries iterate in the order their key was first seen.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::MalformedIndexError;
use crate::format::{escape, script, RawRecord};
use crate::normalize::Normalizer;
use crate::types::{Entry, Occurrence};

/// How keys in a shard are spelled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyEscapes {
    /// Keys are taken as written.
    #[default]
    None,
    /// Keys use Doxygen's `_XX` hex escapes.
    Doxygen,
}

/// Load-time configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LoadOptions {
    pub key_escapes: KeyEscapes,
    /// Strip diacritics from keys and queries.
    pub fold_diacritics: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            key_escapes: KeyEscapes::None,
            fold_diacritics: true,
        }
    }
}

impl LoadOptions {
    pub fn with_key_escapes(mut self, key_escapes: KeyEscapes) -> Self {
        self.key_escapes = key_escapes;
        self
    }

    pub fn with_fold_diacritics(mut self, fold: bool) -> Self {
        self.fold_diacritics = fold;
        self
    }

    pub fn normalizer(&self) -> Normalizer {
        Normalizer::new(self.fold_diacritics)
    }
}

/// Accumulates records into a store.
#[derive(Debug)]
pub struct IndexBuilder {
    key_escapes: KeyEscapes,
    normalizer: Normalizer,
    entries: Vec<Entry>,
    slots: HashMap<String, usize>,
    records: usize,
    merged: usize,
}

impl IndexBuilder {
    pub fn new(options: &LoadOptions) -> Self {
        Self {
            key_escapes: options.key_escapes,
            normalizer: options.normalizer(),
            entries: Vec::new(),
            slots: HashMap::new(),
            records: 0,
            merged: 0,
        }
    }

    /// Validate and add one record. On error the builder is gone.
    pub fn push(mut self, record: RawRecord) -> Result<Self, MalformedIndexError> {
        let position = self.records;
        self.records += 1;

        let RawRecord(raw_key, body) = record;
        let decoded = match self.key_escapes {
            KeyEscapes::None => raw_key.clone(),
            KeyEscapes::Doxygen => escape::decode_key(&raw_key),
        };
        let key = self.normalizer.normalize(&decoded);
        if key.is_empty() {
            return Err(MalformedIndexError::EmptyKey {
                record: position,
                key: raw_key,
            });
        }

        let (label, raw_occurrences) = body.into_parts();
        if raw_occurrences.is_empty() {
            return Err(MalformedIndexError::NoOccurrences {
                record: position,
                key: raw_key,
            });
        }

        let label = label.filter(|l| !l.is_empty()).unwrap_or(decoded);
        let mut occurrences = Vec::with_capacity(raw_occurrences.len());
        for (index, raw) in raw_occurrences.into_iter().enumerate() {
            let Some(target_path) = raw.target_path else {
                return Err(MalformedIndexError::MissingTargetPath {
                    record: position,
                    key: raw_key,
                    occurrence: index,
                });
            };
            let Some(anchor) = raw.anchor else {
                return Err(MalformedIndexError::MissingAnchor {
                    record: position,
                    key: raw_key,
                    occurrence: index,
                });
            };
            occurrences.push(Occurrence::new(
                label.clone(),
                raw.scope_label,
                target_path,
                anchor,
            ));
        }

        match self.slots.get(&key) {
            Some(&slot) => {
                trace!(key = %key, added = occurrences.len(), "merging duplicate key");
                self.entries[slot].append(occurrences);
                self.merged += 1;
            }
            None => {
                self.slots.insert(key.clone(), self.entries.len());
                self.entries.push(Entry::new(key, label, occurrences));
            }
        }
        Ok(self)
    }

    pub fn finish(self) -> IndexStore {
        debug!(
            records = self.records,
            entries = self.entries.len(),
            merged = self.merged,
            "index store built"
        );
        IndexStore {
            entries: self.entries,
            slots: self.slots,
            normalizer: self.normalizer,
        }
    }
}

/// Immutable symbol index.
#[derive(Debug, Clone)]
pub struct IndexStore {
    entries: Vec<Entry>,
    slots: HashMap<String, usize>,
    normalizer: Normalizer,
}

impl IndexStore {
    /// Every entry, in first-seen key order. Each call starts over.
    pub fn all_entries(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    /// Look up an entry by key. The argument is normalized first, so
    /// `get("closest_next")` finds the entry stored as `closestnext`.
    pub fn get(&self, key: &str) -> Option<&Entry> {
        let key = self.normalizer.normalize(key);
        self.slots.get(&key).map(|&slot| &self.entries[slot])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total declaration sites across all entries.
    pub fn occurrence_count(&self) -> usize {
        self.entries.iter().map(|e| e.occurrences().len()).sum()
    }

    /// Number of entries with more than one occurrence.
    pub fn overloaded_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_overloaded()).count()
    }

    /// Rules used for keys, to be applied to queries as well.
    pub fn normalizer(&self) -> Normalizer {
        self.normalizer
    }
}

/// Build a store from decoded records with default options.
pub fn load(raw: impl IntoIterator<Item = RawRecord>) -> Result<IndexStore, MalformedIndexError> {
    load_with(raw, &LoadOptions::default())
}

pub fn load_with(
    raw: impl IntoIterator<Item = RawRecord>,
    options: &LoadOptions,
) -> Result<IndexStore, MalformedIndexError> {
    raw.into_iter()
        .try_fold(IndexBuilder::new(options), IndexBuilder::push)
        .map(IndexBuilder::finish)
}

/// Parse shard text, either a bare JSON array or a Doxygen `searchData`
/// script. Script shards always decode Doxygen key escapes.
pub fn load_str(text: &str, options: &LoadOptions) -> Result<IndexStore, MalformedIndexError> {
    let text = text.strip_prefix('\u{FEFF}').unwrap_or(text);
    if script::is_script(text) {
        let json = script::extract_array(text)?;
        let records: Vec<RawRecord> = serde_json::from_str(&json)?;
        let options = options.clone().with_key_escapes(KeyEscapes::Doxygen);
        load_with(records, &options)
    } else {
        let records: Vec<RawRecord> = serde_json::from_str(text)?;
        load_with(records, options)
    }
}

/// Read and parse a shard file.
pub fn load_path(
    path: impl AsRef<Path>,
    options: &LoadOptions,
) -> Result<IndexStore, MalformedIndexError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| MalformedIndexError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = text.len(), "read index shard");
    load_str(&text, options)
}
