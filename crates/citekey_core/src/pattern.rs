/*
SPDX-License-Identifier: MPL-2.0
*/

//! Key patterns: a default pattern plus optional per-entry-type overrides.
//!
//! A pattern is a template string mixing literal text with bracketed field
//! expressions, e.g. `[auth][year]` or `[auth:lower][shortyear]`. Parsing
//! and expansion live in the engine crate; this is just the lookup table.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The pattern applied when no per-type pattern matches.
pub const DEFAULT_PATTERN: &str = "[auth][year]";

/// Per-entry-type citation key patterns with a default fallback.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", default)]
pub struct KeyPatterns {
    /// The fallback pattern.
    pub default: String,
    /// Patterns keyed by entry type, matched case-insensitively.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub per_type: IndexMap<String, String>,
}

impl Default for KeyPatterns {
    fn default() -> Self {
        KeyPatterns {
            default: DEFAULT_PATTERN.to_string(),
            per_type: IndexMap::new(),
        }
    }
}

impl KeyPatterns {
    /// Build a pattern table with the given default and no per-type overrides.
    pub fn with_default(pattern: impl Into<String>) -> Self {
        KeyPatterns {
            default: pattern.into(),
            per_type: IndexMap::new(),
        }
    }

    /// Add a per-type pattern.
    pub fn set_type_pattern(
        &mut self,
        entry_type: impl Into<String>,
        pattern: impl Into<String>,
    ) -> &mut Self {
        self.per_type
            .insert(entry_type.into().to_lowercase(), pattern.into());
        self
    }

    /// The pattern for the given entry type, falling back to the default.
    pub fn pattern_for(&self, entry_type: &str) -> &str {
        let wanted = entry_type.to_lowercase();
        self.per_type
            .iter()
            .find(|(t, _)| t.to_lowercase() == wanted)
            .map(|(_, p)| p.as_str())
            .unwrap_or(&self.default)
    }
}
