/*
SPDX-License-Identifier: MPL-2.0
*/

//! The regex post-processing step: one global find/replace applied to the
//! expanded key before uniqueness resolution.

use regex::Regex;
use tracing::warn;

/// Apply `find`/`replacement` globally to `key`. A pattern that fails to
/// compile is logged and ignored: a misconfigured regex must never block
/// key generation.
pub fn replace_with_regex(key: &str, find: &str, replacement: &str) -> String {
    match Regex::new(find) {
        Ok(regex) => regex.replace_all(key, replacement).into_owned(),
        Err(error) => {
            warn!(%find, %error, "invalid key regex, skipping post-processing");
            key.to_string()
        }
    }
}
