/*
SPDX-License-Identifier: MPL-2.0
*/

//! Uniqueness resolution: appending letter suffixes to a candidate key
//! until the collection reports no other occurrence.

use crate::error::KeyGenError;
use citekey_core::{KeyOccurrences, SuffixStyle};

/// Upper bound on suffix attempts. Reaching it means the occurrence query
/// never reports a free key, which is an invariant violation, not a state
/// worth retrying.
const MAX_SUFFIX_ATTEMPTS: usize = 5000;

/// The suffix for appendix index `number`: 0..=25 map to a..z, then
/// aa, ab, ... like spreadsheet columns (zero-based).
pub fn get_appendix(number: usize) -> String {
    if number >= 26 {
        let last = (b'a' + (number % 26) as u8) as char;
        format!("{}{}", get_appendix(number / 26 - 1), last)
    } else {
        ((b'a' + number as u8) as char).to_string()
    }
}

/// Append a disambiguation suffix to `key` if the policy or an existing
/// collision demands one. `old_key` is the key the entry currently holds;
/// the entry never collides with itself.
pub fn append_letters_to_key(
    key: &str,
    old_key: Option<&str>,
    occurrences: &dyn KeyOccurrences,
    style: SuffixStyle,
) -> Result<String, KeyGenError> {
    // Non-positive adjusted counts are "unique": saturating keeps an
    // inconsistent query from ever raising here.
    let adjusted_count = |candidate: &str| {
        let count = occurrences.occurrence_count(candidate);
        if old_key == Some(candidate) {
            count.saturating_sub(1)
        } else {
            count
        }
    };

    let always_append = style == SuffixStyle::Always;
    if !always_append && adjusted_count(key) == 0 {
        return Ok(key.to_string());
    }

    // The key is in use (or the policy appends regardless). Under the
    // default style the first suffix is "b": "a" is reserved for the
    // first duplicate in always-append mode.
    let mut number = match style {
        SuffixStyle::Always | SuffixStyle::SecondWithA => 0,
        SuffixStyle::Duplicates => 1,
    };

    for _ in 0..MAX_SUFFIX_ATTEMPTS {
        let modded_key = format!("{key}{}", get_appendix(number));
        if adjusted_count(&modded_key) == 0 {
            return Ok(modded_key);
        }
        number += 1;
    }

    Err(KeyGenError::SuffixSearchExhausted {
        key: key.to_string(),
        attempts: MAX_SUFFIX_ATTEMPTS,
    })
}
