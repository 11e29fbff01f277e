// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Doxygen key escapes.
//!
//! Doxygen writes search keys as HTML-id-safe tokens: every ASCII character
//! outside `[a-z0-9]` becomes `_` plus two lowercase hex digits, so
//! `clear_adjacency_list` is stored as `clear_5fadjacency_5flist`. Left
//! alone, those escapes would leak `5f` into the matchable text and make the
//! query "5f" hit every symbol with an underscore.

/// Decode `_XX` escapes. A `_` not followed by two hex digits is kept as is.
/// Falls back to the input if the decoded bytes are not valid UTF-8.
pub fn decode_key(key: &str) -> String {
    let bytes = key.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'_' && i + 2 < bytes.len() {
            if let Some(byte) = hex_pair(bytes[i + 1], bytes[i + 2]) {
                out.push(byte);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8(out).unwrap_or_else(|_| key.to_string())
}

fn hex_pair(hi: u8, lo: u8) -> Option<u8> {
    let hi = (hi as char).to_digit(16)?;
    let lo = (lo as char).to_digit(16)?;
    Some((hi * 16 + lo) as u8)
}
