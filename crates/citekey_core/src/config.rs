/*
SPDX-License-Identifier: MPL-2.0
*/

//! Generator configuration: the unwanted-character set, the suffix policy,
//! the keyword delimiter, and the post-processing regex pair.

use serde::{Deserialize, Serialize};

/// When to append a disambiguation letter to a generated key.
#[derive(Debug, Default, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SuffixStyle {
    /// Only append when the key collides with an existing one. The first
    /// appended letter is "b"; "a" is reserved for the colliding original.
    #[default]
    Duplicates,
    /// Always append a letter, starting with "a".
    Always,
    /// Only append on collision, but start with "a" for the second occurrence.
    SecondWithA,
}

/// User-facing configuration for key generation.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", default)]
pub struct GeneratorConfig {
    /// Characters stripped from generated keys in addition to the fixed
    /// disallowed set. Note `+` is deliberately not in the default: it
    /// marks "et al." in author lists.
    pub unwanted_characters: String,
    /// The disambiguation suffix policy.
    pub suffix: SuffixStyle,
    /// The delimiter used when joining an entry's keyword list.
    pub keyword_delimiter: char,
    /// A find regex applied to the expanded key; invalid patterns are
    /// ignored rather than failing generation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_regex: Option<String>,
    /// The replacement string for `key_regex`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub key_replacement: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            unwanted_characters: "-`\u{2b9}:!;?^".to_string(),
            suffix: SuffixStyle::default(),
            keyword_delimiter: ',',
            key_regex: None,
            key_replacement: String::new(),
        }
    }
}
