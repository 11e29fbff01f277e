// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Raw record decoding.
//!
//! A shard is a top-level array of `[key, body]` pairs, and `body` comes in
//! three shapes depending on how many declarations the symbol has and which
//! writer produced the shard:
//!
//! ```text
//! One      ["clear", [" boolean_path", "a.html", "f1"]]
//! Many     [["clear", [" boolean_path", "a.html", "f1"]], ["clear", [...]], ...]
//! Doxygen  ["clear", ["../a.html#f1", 1, "lgraph::boolean_path::clear()"], [...], ...]
//! ```
//!
//! Serde's untagged enum tries the variants in order, so the shape is decided
//! exactly once, here. Everything after [`RawBody::into_parts`] sees a label
//! and a flat list of occurrences.
//!
//! Occurrence fields are decoded as optional on purpose: a record with a
//! missing path or anchor must surface as a precise load error naming the
//! record, not as a generic "did not match any variant".

use std::fmt;

use serde::de::{self, IgnoredAny, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// One top-level element of a shard: `[key, body]`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawRecord(pub String, pub RawBody);

impl RawRecord {
    /// Convenience constructor for the single-occurrence shape.
    pub fn one(key: &str, label: &str, scope: &str, target_path: &str, anchor: &str) -> Self {
        RawRecord(
            key.to_string(),
            RawBody::One(RawSymbol(
                label.to_string(),
                RawOccurrence::new(scope, target_path, anchor),
            )),
        )
    }
}

/// Body of a record, in whichever shape the writer chose.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawBody {
    /// `[label, [scope, path, anchor]]`
    One(RawSymbol),
    /// `[[label, [scope, path, anchor]], ...]`
    Many(Vec<RawSymbol>),
    /// `[label, [path#anchor, flag, scope], ...]`
    Doxygen(DoxygenBody),
}

impl RawBody {
    /// Flatten to `(label, occurrences)`. The label is `None` only when the
    /// body carried no symbol at all.
    pub fn into_parts(self) -> (Option<String>, Vec<RawOccurrence>) {
        match self {
            RawBody::One(RawSymbol(label, occurrence)) => (Some(label), vec![occurrence]),
            RawBody::Many(symbols) => {
                let label = symbols.first().map(|s| s.0.clone());
                (label, symbols.into_iter().map(|s| s.1).collect())
            }
            RawBody::Doxygen(body) => (
                Some(body.label),
                body.links.into_iter().map(RawOccurrence::from).collect(),
            ),
        }
    }
}

/// `[label, occurrence]`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawSymbol(pub String, pub RawOccurrence);

/// `[scopeLabel, targetPath, anchor]` with every element optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawOccurrence {
    pub scope_label: Option<String>,
    pub target_path: Option<String>,
    pub anchor: Option<String>,
}

impl RawOccurrence {
    pub fn new(scope: &str, target_path: &str, anchor: &str) -> Self {
        Self {
            scope_label: Some(scope.to_string()),
            target_path: Some(target_path.to_string()),
            anchor: Some(anchor.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for RawOccurrence {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let fields = Vec::<Option<String>>::deserialize(deserializer)?;
        if fields.len() > 3 {
            return Err(de::Error::invalid_length(
                fields.len(),
                &"at most [scope, path, anchor]",
            ));
        }
        let mut fields = fields.into_iter().map(|f| f.filter(|s| !s.is_empty()));
        Ok(Self {
            scope_label: fields.next().flatten(),
            target_path: fields.next().flatten(),
            anchor: fields.next().flatten(),
        })
    }
}

/// Native Doxygen body: a label followed by any number of links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoxygenBody {
    pub label: String,
    pub links: Vec<DoxygenLink>,
}

impl<'de> Deserialize<'de> for DoxygenBody {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct BodyVisitor;

        impl<'de> Visitor<'de> for BodyVisitor {
            type Value = DoxygenBody;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("[label, [href, flag, scope], ...]")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<DoxygenBody, A::Error> {
                let label: String = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let mut links = Vec::new();
                while let Some(link) = seq.next_element::<DoxygenLink>()? {
                    links.push(link);
                }
                Ok(DoxygenBody { label, links })
            }
        }

        deserializer.deserialize_seq(BodyVisitor)
    }
}

/// `[href, flag, scope]`. The numeric flag is written by Doxygen but carries
/// nothing a search consumer needs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DoxygenLink {
    pub href: Option<String>,
    pub scope_label: Option<String>,
}

impl<'de> Deserialize<'de> for DoxygenLink {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct LinkVisitor;

        impl<'de> Visitor<'de> for LinkVisitor {
            type Value = DoxygenLink;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("[href, flag, scope]")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<DoxygenLink, A::Error> {
                let href: Option<String> = seq.next_element::<Option<String>>()?.flatten();
                let _flag: Option<IgnoredAny> = seq.next_element()?;
                let scope_label: Option<String> = seq.next_element::<Option<String>>()?.flatten();
                if seq.next_element::<IgnoredAny>()?.is_some() {
                    return Err(de::Error::invalid_length(4, &self));
                }
                Ok(DoxygenLink { href, scope_label })
            }
        }

        deserializer.deserialize_seq(LinkVisitor)
    }
}

impl From<DoxygenLink> for RawOccurrence {
    fn from(link: DoxygenLink) -> Self {
        let (target_path, anchor) = match link.href.as_deref() {
            Some(href) => match href.split_once('#') {
                Some((path, anchor)) => (non_empty(path), non_empty(anchor)),
                None => (non_empty(href), None),
            },
            None => (None, None),
        };
        RawOccurrence {
            scope_label: link.scope_label,
            target_path,
            anchor,
        }
    }
}

fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}
