/*
SPDX-License-Identifier: MPL-2.0
*/

//! The modifier engine: named text transformations chained after a field
//! expression, e.g. `[title:abbr:lower]`. Modifiers apply left to right,
//! so their order is significant.

use crate::error::KeyGenError;

/// Words skipped by `veryshorttitle`.
const FUNCTION_WORDS: [&str; 5] = ["the", "with", "and", "or", "but"];

/// A parsed modifier token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modifier {
    /// Full-string lowercase.
    Lower,
    /// Full-string uppercase.
    Upper,
    /// Uppercase the first letter of every word, lowercase the rest.
    Capitalize,
    /// Uppercase only the first word's first letter; lowercase everything else.
    SentenceCase,
    /// Capitalize each word independently.
    TitleCase,
    /// First letter of every word, concatenated.
    Abbr,
    /// The first word that is not a function word.
    VeryShortTitle,
    /// Keep at most this many characters.
    Truncate(usize),
    /// Recognized but currently without effect.
    Regex(String),
    /// A parenthesized fallback, substituted when the running value is
    /// empty. The content may itself contain bracket expressions.
    Default(String),
    /// Tolerated and applied as a pass-through.
    Unknown(String),
}

impl Modifier {
    /// Parse one modifier token. Matching is case-insensitive. Only a
    /// malformed `truncateN` length is an error; unrecognized tokens
    /// become [`Modifier::Unknown`].
    pub fn parse(token: &str) -> Result<Modifier, KeyGenError> {
        if token.starts_with('(') && token.ends_with(')') && token.len() >= 2 {
            return Ok(Modifier::Default(token[1..token.len() - 1].to_string()));
        }

        let lowered = token.to_lowercase();
        let modifier = match lowered.as_str() {
            "lower" => Modifier::Lower,
            "upper" => Modifier::Upper,
            "capitalize" => Modifier::Capitalize,
            "sentencecase" => Modifier::SentenceCase,
            "titlecase" => Modifier::TitleCase,
            "abbr" => Modifier::Abbr,
            "veryshorttitle" => Modifier::VeryShortTitle,
            _ => {
                if let Some(length) = lowered.strip_prefix("truncate") {
                    let length =
                        length
                            .parse::<usize>()
                            .map_err(|source| KeyGenError::InvalidTruncateLength {
                                token: token.to_string(),
                                source,
                            })?;
                    Modifier::Truncate(length)
                } else if lowered.starts_with("regex") {
                    // Keep the argument as written: only the keyword is
                    // case-insensitive, the pattern itself is not.
                    Modifier::Regex(token.chars().skip("regex".len()).collect())
                } else {
                    Modifier::Unknown(token.to_string())
                }
            }
        };
        Ok(modifier)
    }
}

/// Thread `value` through the modifier chain, left to right. `expand`
/// resolves bracket content for modifiers that expand further pattern
/// text (currently the parenthesized default).
pub fn apply_modifiers<F>(
    value: String,
    modifiers: &[Modifier],
    expand: F,
) -> Result<String, KeyGenError>
where
    F: Fn(&str) -> Result<String, KeyGenError>,
{
    let mut value = value;
    for modifier in modifiers {
        value = match modifier {
            Modifier::Lower => value.to_lowercase(),
            Modifier::Upper => value.to_uppercase(),
            Modifier::Capitalize => capitalize(&value),
            Modifier::SentenceCase => sentence_case(&value),
            Modifier::TitleCase => title_case(&value),
            Modifier::Abbr => abbreviate(&value),
            Modifier::VeryShortTitle => first_significant_word(&value),
            Modifier::Truncate(length) => truncate(&value, *length),
            Modifier::Default(fallback) => {
                if value.is_empty() {
                    expand(fallback)?
                } else {
                    value
                }
            }
            // Inert and pass-through respectively.
            Modifier::Regex(_) | Modifier::Unknown(_) => value,
        };
    }
    Ok(value)
}

/// Uppercase the first character of a word, lowercase the remainder.
fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

fn capitalize(value: &str) -> String {
    value
        .split_whitespace()
        .map(capitalize_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn sentence_case(value: &str) -> String {
    value
        .split_whitespace()
        .enumerate()
        .map(|(i, word)| {
            if i == 0 {
                capitalize_word(word)
            } else {
                word.to_lowercase()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn title_case(value: &str) -> String {
    value
        .split_whitespace()
        .map(capitalize_word)
        .collect::<Vec<_>>()
        .join(" ")
}

/// First character of every space-separated word, no separators.
fn abbreviate(value: &str) -> String {
    value
        .split(' ')
        .filter_map(|word| word.chars().next())
        .collect()
}

/// The first word that is not a function word; the whole value when every
/// word is one.
fn first_significant_word(value: &str) -> String {
    value
        .split_whitespace()
        .find(|word| !FUNCTION_WORDS.contains(&word.to_lowercase().as_str()))
        .map(str::to_string)
        .unwrap_or_else(|| value.to_string())
}

/// Keep at most `length` characters, counted in code points.
fn truncate(value: &str, length: usize) -> String {
    if value.chars().count() > length {
        value.chars().take(length).collect()
    } else {
        value.to_string()
    }
}
