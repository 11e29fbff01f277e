// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Script shard extraction.
//!
//! Doxygen ships each shard as a JavaScript file:
//!
//! ```text
//! var searchData=
//! [
//!   ['clear',['clear',['../classlgraph_1_1boolean__path.html#a60fa',1,'lgraph::boolean_path::clear()']]],
//!   ...
//! ];
//! ```
//!
//! The array literal is JSON in everything but quoting. This module finds it
//! and rewrites single-quoted strings as double-quoted ones so `serde_json`
//! can take it from there. It is a scanner, not a JavaScript parser: it
//! understands strings and brackets and nothing else.

use crate::error::MalformedIndexError;

const VARIABLE: &str = "searchData";

/// True when `text` looks like a script shard rather than bare JSON. A
/// leading byte order mark is ignored.
pub fn is_script(text: &str) -> bool {
    let text = text.strip_prefix('\u{FEFF}').unwrap_or(text);
    !text.trim_start().starts_with('[')
}

/// Extract the `searchData` array literal as JSON text.
pub fn extract_array(text: &str) -> Result<String, MalformedIndexError> {
    let start = text
        .find(VARIABLE)
        .ok_or_else(|| MalformedIndexError::Script(format!("no `{}` variable", VARIABLE)))?;
    let rest = &text[start + VARIABLE.len()..];
    let eq = rest
        .find('=')
        .ok_or_else(|| MalformedIndexError::Script("missing `=` after variable".to_string()))?;
    let rest = &rest[eq + 1..];
    let open = rest
        .find('[')
        .ok_or_else(|| MalformedIndexError::Script("missing array literal".to_string()))?;
    to_json(&rest[open..])
}

/// Rewrite one bracketed literal starting at `src[0] == '['`, stopping at its
/// matching `]`.
fn to_json(src: &str) -> Result<String, MalformedIndexError> {
    let mut out = String::with_capacity(src.len());
    let mut depth = 0usize;
    let mut chars = src.chars();

    while let Some(c) = chars.next() {
        match c {
            '\'' | '"' => copy_string(c, &mut chars, &mut out)?,
            '[' => {
                depth += 1;
                out.push(c);
            }
            ']' => {
                depth = depth.saturating_sub(1);
                out.push(c);
                if depth == 0 {
                    return Ok(out);
                }
            }
            _ => out.push(c),
        }
    }

    Err(MalformedIndexError::Script(
        "unterminated array literal".to_string(),
    ))
}

/// Copy a string literal body (opening quote already consumed) as a JSON
/// double-quoted string.
fn copy_string(
    quote: char,
    chars: &mut std::str::Chars<'_>,
    out: &mut String,
) -> Result<(), MalformedIndexError> {
    out.push('"');
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                let escaped = chars.next().ok_or_else(unterminated_string)?;
                match escaped {
                    // `\'` has no JSON spelling; the quote itself is fine.
                    '\'' => out.push('\''),
                    _ => {
                        out.push('\\');
                        out.push(escaped);
                    }
                }
            }
            '"' if quote == '\'' => out.push_str("\\\""),
            c if c == quote => {
                out.push('"');
                return Ok(());
            }
            _ => out.push(c),
        }
    }
    Err(unterminated_string())
}

fn unterminated_string() -> MalformedIndexError {
    MalformedIndexError::Script("unterminated string literal".to_string())
}
