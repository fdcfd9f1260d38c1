/*
SPDX-License-Identifier: MPL-2.0
*/

use thiserror::Error;

/// Errors produced by key generation.
///
/// Note the deliberate asymmetry: a malformed truncate length or an
/// unbalanced pattern fails generation loudly, while a malformed
/// post-process regex is logged and ignored so a bad preference can
/// never block key assignment.
#[derive(Error, Debug)]
pub enum KeyGenError {
    /// A `truncateN` modifier whose length is not a number.
    #[error("invalid truncate length in modifier `{token}`")]
    InvalidTruncateLength {
        token: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// An opening bracket with no matching closing bracket.
    #[error("unbalanced bracket in pattern `{0}`")]
    UnbalancedPattern(String),

    /// The suffix search hit its iteration cap without finding a free key.
    /// This only happens when the occurrence query misbehaves.
    #[error("no unique key found for `{key}` after {attempts} suffix attempts")]
    SuffixSearchExhausted { key: String, attempts: usize },

    /// The pipeline produced an empty key.
    #[error("generated citation key is empty")]
    EmptyKey,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("failed to parse {0} input: {1}")]
    Parse(String, String),
}
