// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Everything that knows what a shard looks like on disk.
//!
//! The rest of the crate never sees tuples, quotes or `_5f`. `wire` decodes
//! records into one sum type, `script` turns a Doxygen `.js` shard into
//! JSON, and `escape` undoes Doxygen's id-safe key encoding.

pub mod escape;
pub mod script;
pub mod wire;

pub use wire::{DoxygenBody, DoxygenLink, RawBody, RawOccurrence, RawRecord, RawSymbol};
