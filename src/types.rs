// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Core data types: what the store holds and what a query returns.
//!
//! `Entry` and `Occurrence` are read-only views. Their fields are private and
//! the only way to create an `Entry` is through [`IndexBuilder`], which
//! refuses empty occurrence lists. Once a store exists, nothing in it can be
//! changed.
//!
//! [`IndexBuilder`]: crate::IndexBuilder

use serde::Serialize;

/// One declaration site of a symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Occurrence {
    label: String,
    scope_label: Option<String>,
    target_path: String,
    anchor: String,
}

impl Occurrence {
    /// Blank scope labels are stored as absent.
    pub(crate) fn new(
        label: String,
        scope_label: Option<String>,
        target_path: String,
        anchor: String,
    ) -> Self {
        let scope_label = scope_label.filter(|s| !s.trim().is_empty());
        Self {
            label,
            scope_label,
            target_path,
            anchor,
        }
    }

    /// Label of the record that declared this site. Differs from the entry
    /// label when distinct symbols share a normalized key.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Enclosing scope or signature, as opaque display text.
    pub fn scope_label(&self) -> Option<&str> {
        self.scope_label.as_deref()
    }

    pub fn target_path(&self) -> &str {
        &self.target_path
    }

    pub fn anchor(&self) -> &str {
        &self.anchor
    }

    /// Resolvable link: `target_path#anchor`.
    pub fn href(&self) -> String {
        format!("{}#{}", self.target_path, self.anchor)
    }
}

/// A deduplicated index record: one key, one label, one or more occurrences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    key: String,
    label: String,
    occurrences: Vec<Occurrence>,
}

impl Entry {
    /// Callers guarantee `occurrences` is non-empty; only `IndexBuilder`
    /// calls this, after rejecting empty records.
    pub(crate) fn new(key: String, label: String, occurrences: Vec<Occurrence>) -> Self {
        debug_assert!(!occurrences.is_empty(), "entry {key:?} built without occurrences");
        Self {
            key,
            label,
            occurrences,
        }
    }

    /// Construction phase only.
    pub(crate) fn append(&mut self, more: Vec<Occurrence>) {
        self.occurrences.extend(more);
    }

    /// Normalized search token. Used for matching only.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Symbol name as declared.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Declaration sites in insertion order. Never empty.
    pub fn occurrences(&self) -> &[Occurrence] {
        &self.occurrences
    }

    /// True when the label is declared in more than one place.
    pub fn is_overloaded(&self) -> bool {
        self.occurrences.len() > 1
    }
}

/// One clickable line of search output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayRow {
    pub text: String,
    pub target_path: String,
    pub anchor: String,
}

impl DisplayRow {
    pub fn href(&self) -> String {
        format!("{}#{}", self.target_path, self.anchor)
    }
}

/// Shape of a rendered result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum GroupBody {
    /// Single declaration: the label links straight to it.
    Single { row: DisplayRow },
    /// Several declarations: a plain header followed by one row per
    /// occurrence, in stored order.
    Overloaded {
        label: String,
        children: Vec<DisplayRow>,
    },
}

/// The unit returned by a query: one matching entry, ready to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayGroup {
    /// Key of the entry that matched.
    pub key: String,
    /// Character offset of the first match inside `key`.
    pub position: usize,
    #[serde(flatten)]
    pub body: GroupBody,
}

impl DisplayGroup {
    /// Header text: the symbol label.
    pub fn label(&self) -> &str {
        match &self.body {
            GroupBody::Single { row } => &row.text,
            GroupBody::Overloaded { label, .. } => label,
        }
    }

    /// Linkable rows: the single row, or every child.
    pub fn rows(&self) -> &[DisplayRow] {
        match &self.body {
            GroupBody::Single { row } => std::slice::from_ref(row),
            GroupBody::Overloaded { children, .. } => children,
        }
    }
}
