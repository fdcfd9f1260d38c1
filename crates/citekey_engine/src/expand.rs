/*
SPDX-License-Identifier: MPL-2.0
*/

//! Bracket expansion: splitting a pattern into literal spans and `[...]`
//! field expressions, and handing each expression to a resolver.

use crate::error::KeyGenError;

/// Expand every bracketed expression in `pattern` via `expand_content`,
/// passing literal spans through unchanged. A bracket body runs to its
/// *matching* close bracket, so a parenthesized default modifier can carry
/// bracket content of its own; the expander does not resolve such inner
/// brackets itself. An unclosed `[` is an error rather than literal text.
pub fn expand_brackets<F>(pattern: &str, mut expand_content: F) -> Result<String, KeyGenError>
where
    F: FnMut(&str) -> Result<String, KeyGenError>,
{
    let mut result = String::with_capacity(pattern.len());
    let mut rest = pattern;

    while let Some(open) = rest.find('[') {
        result.push_str(&rest[..open]);
        let body = &rest[open + 1..];
        let close = matching_close(body)
            .ok_or_else(|| KeyGenError::UnbalancedPattern(pattern.to_string()))?;
        result.push_str(&expand_content(&body[..close])?);
        rest = &body[close + 1..];
    }
    result.push_str(rest);

    Ok(result)
}

/// Byte offset of the close bracket matching an already-consumed `[`.
fn matching_close(body: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (offset, c) in body.char_indices() {
        match c {
            '[' => depth += 1,
            ']' if depth == 0 => return Some(offset),
            ']' => depth -= 1,
            _ => {}
        }
    }
    None
}

/// Split a bracket body into its field token and modifier tokens.
/// The first element is always present (possibly empty).
pub fn parse_field_and_modifiers(bracket: &str) -> Vec<&str> {
    bracket.split(':').collect()
}
