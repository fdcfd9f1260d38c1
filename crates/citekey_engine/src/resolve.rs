/*
SPDX-License-Identifier: MPL-2.0
*/

//! Field resolution: mapping a field token from a pattern to a raw text
//! value on an entry, including the pseudo-fields (`auth`, `shortyear`,
//! `keyword1`, ...) that do not correspond to stored fields directly.

use citekey_core::Entry;

/// Resolves a field token against an entry. Absent fields resolve to the
/// empty string, never an error.
pub trait FieldResolver {
    fn resolve(&self, token: &str, entry: &Entry) -> String;
}

/// The standard pseudo-field mapping.
///
/// Recognized tokens (case-insensitive):
/// - `entrytype` — the entry's type
/// - `auth` — last name of the first author
/// - `authN` — first N characters of `auth`
/// - `authors` — all author last names, concatenated
/// - `authorsN` — last names of the first N authors, `+`-suffixed when
///   more exist
/// - `authors-count` — the number of authors
/// - `year`, `shortyear` — the year field, or its last two digits
/// - `keywords` — the keyword list joined with the configured delimiter
/// - `keywordN` — the Nth keyword (1-based)
/// - anything else — direct field lookup by lowercased name
#[derive(Debug, Clone)]
pub struct StandardResolver {
    keyword_delimiter: char,
}

impl StandardResolver {
    pub fn new(keyword_delimiter: char) -> Self {
        StandardResolver { keyword_delimiter }
    }

    fn author_last_names(entry: &Entry) -> Vec<String> {
        let Some(authors) = entry.field("author") else {
            return Vec::new();
        };
        authors
            .split(" and ")
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(last_name)
            .collect()
    }
}

/// The family name of one author. Handles both "Last, First" and
/// "First Last" forms.
fn last_name(name: &str) -> String {
    match name.split_once(',') {
        Some((family, _)) => family.trim().to_string(),
        None => name
            .split_whitespace()
            .next_back()
            .unwrap_or("")
            .to_string(),
    }
}

impl FieldResolver for StandardResolver {
    fn resolve(&self, token: &str, entry: &Entry) -> String {
        let token = token.to_lowercase();

        match token.as_str() {
            "entrytype" => return entry.entry_type.clone(),
            "auth" => {
                return Self::author_last_names(entry)
                    .into_iter()
                    .next()
                    .unwrap_or_default()
            }
            "authors" => return Self::author_last_names(entry).concat(),
            "authors-count" => return Self::author_last_names(entry).len().to_string(),
            "year" => return entry.field("year").unwrap_or_default().to_string(),
            "shortyear" => {
                let year = entry.field("year").unwrap_or_default();
                let chars: Vec<char> = year.chars().collect();
                let start = chars.len().saturating_sub(2);
                return chars[start..].iter().collect();
            }
            "keywords" => return entry.keyword_list(self.keyword_delimiter),
            _ => {}
        }

        // Digit-suffixed pseudo-fields. `authors` before `auth`: the
        // shorter prefix would also match.
        if let Some(n) = parse_numbered(&token, "authors") {
            let names = Self::author_last_names(entry);
            let shown: String = names.iter().take(n).cloned().collect();
            return if names.len() > n {
                format!("{shown}+")
            } else {
                shown
            };
        }
        if let Some(n) = parse_numbered(&token, "auth") {
            let first = Self::author_last_names(entry)
                .into_iter()
                .next()
                .unwrap_or_default();
            return first.chars().take(n).collect();
        }
        if let Some(n) = parse_numbered(&token, "keyword") {
            return entry
                .keywords
                .get(n.wrapping_sub(1))
                .cloned()
                .unwrap_or_default();
        }

        entry.field(&token).unwrap_or_default().to_string()
    }
}

/// Parse tokens of the form `<prefix><digits>`, e.g. `auth3`.
fn parse_numbered(token: &str, prefix: &str) -> Option<usize> {
    let digits = token.strip_prefix(prefix)?;
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}
