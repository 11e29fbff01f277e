// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Key and query normalization.
//!
//! Keys are matched, never displayed, so they can be aggressively folded:
//! lowercase, drop everything that is not a letter or digit, and (optionally)
//! strip diacritics so "Erdős" and "erdos" land on the same token. The same
//! [`Normalizer`] must be applied to keys at load time and to queries at
//! search time, which is why the store keeps the one it was built with.
//!
//! - `"closest_next"` → `"closestnext"`
//! - `"operator<<"` → `"operator"`
//! - `"Café"` → `"cafe"` (with diacritic folding)

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

/// Folding rules shared by keys and queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Normalizer {
    fold_diacritics: bool,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Normalizer {
    /// Diacritic folding is a no-op when the `unicode-normalization` feature
    /// is disabled.
    pub fn new(fold_diacritics: bool) -> Self {
        Self { fold_diacritics }
    }

    pub fn folds_diacritics(&self) -> bool {
        self.fold_diacritics && cfg!(feature = "unicode-normalization")
    }

    /// Normalize a key or query. Idempotent.
    pub fn normalize(&self, value: &str) -> String {
        #[cfg(feature = "unicode-normalization")]
        {
            if self.fold_diacritics {
                return fold(value.nfd().filter(|c| !is_combining_mark(*c)));
            }
        }
        fold(value.chars())
    }
}

fn fold(chars: impl Iterator<Item = char>) -> String {
    chars
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_alphanumeric())
        .collect()
}

/// Combining marks have Unicode category "Mn" (Mark, Nonspacing).
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1AB0}'..='\u{1AFF}' |  // Combining Diacritical Marks Extended
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}

/// Normalize with the default rules.
pub fn normalize(value: &str) -> String {
    Normalizer::default().normalize(value)
}
