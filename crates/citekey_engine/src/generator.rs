/*
SPDX-License-Identifier: MPL-2.0
*/

//! The generator facade: wires pattern expansion, post-processing,
//! uniqueness resolution, and the final cleanup into one entry point.

use crate::error::KeyGenError;
use crate::expand::{expand_brackets, parse_field_and_modifiers};
use crate::filter::{clean_key, remove_unwanted_characters};
use crate::modifiers::{apply_modifiers, Modifier};
use crate::postprocess::replace_with_regex;
use crate::resolve::{FieldResolver, StandardResolver};
use crate::uniqueness::append_letters_to_key;
use citekey_core::{Entry, GeneratorConfig, KeyChange, KeyOccurrences, KeyPatterns};

/// Generates citation keys for entries.
///
/// All collaborators are injected: the pattern table, the configuration,
/// the occurrence query over the owning collection, and the field
/// resolver. The generator holds no state of its own, but callers
/// assigning keys to several entries of one collection must serialize
/// those calls (generation plus assignment) so the occurrence query sees
/// each assignment before the next resolution starts.
pub struct KeyGenerator<'a> {
    patterns: &'a KeyPatterns,
    config: &'a GeneratorConfig,
    occurrences: &'a dyn KeyOccurrences,
    resolver: Box<dyn FieldResolver + 'a>,
}

impl<'a> KeyGenerator<'a> {
    /// A generator using the standard pseudo-field resolver.
    pub fn new(
        patterns: &'a KeyPatterns,
        config: &'a GeneratorConfig,
        occurrences: &'a dyn KeyOccurrences,
    ) -> Self {
        let resolver = Box::new(StandardResolver::new(config.keyword_delimiter));
        Self::with_resolver(patterns, config, occurrences, resolver)
    }

    /// A generator with a caller-supplied field resolver.
    pub fn with_resolver(
        patterns: &'a KeyPatterns,
        config: &'a GeneratorConfig,
        occurrences: &'a dyn KeyOccurrences,
        resolver: Box<dyn FieldResolver + 'a>,
    ) -> Self {
        KeyGenerator {
            patterns,
            config,
            occurrences,
            resolver,
        }
    }

    /// Generate a citation key for `entry`.
    ///
    /// The entry's current key, if any, is excluded from collision
    /// counting so regeneration is idempotent.
    pub fn generate_key(&self, entry: &Entry) -> Result<String, KeyGenError> {
        let pattern = self.patterns.pattern_for(&entry.entry_type);

        let key = self.expand_pattern(pattern, entry)?;
        let key = match self.config.key_regex.as_deref() {
            Some(find) => replace_with_regex(&key, find, &self.config.key_replacement),
            None => key,
        };
        let key = append_letters_to_key(
            &key,
            entry.citation_key(),
            self.occurrences,
            self.config.suffix,
        )?;
        let key = clean_key(&key, &self.config.unwanted_characters);

        if key.is_empty() {
            return Err(KeyGenError::EmptyKey);
        }
        Ok(key)
    }

    /// Generate a key and write it onto the entry, reporting the change
    /// only when the stored value actually changed.
    pub fn generate_and_assign(
        &self,
        entry: &mut Entry,
    ) -> Result<Option<KeyChange>, KeyGenError> {
        let key = self.generate_key(entry)?;
        Ok(entry.set_citation_key(key))
    }

    /// Expand every bracket expression in `pattern` against `entry`.
    /// Recursive: parenthesized default modifiers feed their content back
    /// through this same expansion.
    fn expand_pattern(&self, pattern: &str, entry: &Entry) -> Result<String, KeyGenError> {
        expand_brackets(pattern, |bracket| self.expand_bracket_content(bracket, entry))
    }

    fn expand_bracket_content(&self, bracket: &str, entry: &Entry) -> Result<String, KeyGenError> {
        let parts = parse_field_and_modifiers(bracket);
        let raw = self.resolver.resolve(parts[0], entry);
        let mut value = remove_unwanted_characters(&raw, &self.config.unwanted_characters);

        if parts.len() > 1 {
            let modifiers = parts[1..]
                .iter()
                .map(|token| Modifier::parse(token))
                .collect::<Result<Vec<_>, _>>()?;
            value = apply_modifiers(value, &modifiers, |content| {
                // Fallback content is a mini-pattern in its own right and
                // gets the same clean as any expanded bracket.
                let expanded = self.expand_pattern(content, entry)?;
                Ok(clean_key(&expanded, &self.config.unwanted_characters))
            })?;
        }

        // Modifiers may reintroduce excluded characters, so clean again.
        Ok(clean_key(&value, &self.config.unwanted_characters))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use citekey_core::{Library, SuffixStyle};

    fn entry() -> Entry {
        let mut entry = Entry::new("article");
        entry
            .set_field("author", "Smith, Jane")
            .set_field("year", "2020")
            .set_field("title", "The Structure of Scientific Revolutions");
        entry
    }

    fn generate(pattern: &str, entry: &Entry) -> Result<String, KeyGenError> {
        let patterns = KeyPatterns::with_default(pattern);
        let config = GeneratorConfig::default();
        let library = Library::new();
        let result = KeyGenerator::new(&patterns, &config, &library).generate_key(entry);
        result
    }

    #[test]
    fn expands_the_default_pattern() {
        assert_eq!(generate("[auth][year]", &entry()).unwrap(), "Smith2020");
    }

    #[test]
    fn literal_pattern_is_the_key() {
        assert_eq!(generate("fixed", &entry()).unwrap(), "fixed");
    }

    #[test]
    fn modifiers_chain_inside_brackets() {
        assert_eq!(
            generate("[title:veryshorttitle:lower][shortyear]", &entry()).unwrap(),
            "structure20"
        );
        assert_eq!(generate("[title:abbr]", &entry()).unwrap(), "TSoSR");
    }

    #[test]
    fn expanded_values_are_cleaned() {
        let mut entry = entry();
        entry.set_field("title", "Deep {Learning}: a survey");
        // Braces are disallowed, ':' is unwanted, whitespace is stripped.
        assert_eq!(generate("[title]", &entry).unwrap(), "DeepLearningasurvey");
    }

    #[test]
    fn default_modifier_fills_missing_fields() {
        let mut entry = Entry::new("misc");
        entry.set_field("year", "1999");
        assert_eq!(
            generate("[auth:(anon)][year]", &entry).unwrap(),
            "anon1999"
        );
        // Fallback content may itself contain bracket expressions.
        assert_eq!(
            generate("[auth:([entrytype])][year]", &entry).unwrap(),
            "misc1999"
        );
        // A present value wins over the fallback.
        assert_eq!(
            generate("[auth:(anon)]", &self::entry()).unwrap(),
            "Smith"
        );
    }

    #[test]
    fn truncate_parse_error_fails_generation() {
        let err = generate("[title:truncateXL]", &entry()).unwrap_err();
        assert!(matches!(err, KeyGenError::InvalidTruncateLength { .. }));
    }

    #[test]
    fn invalid_regex_config_is_fail_soft() {
        let patterns = KeyPatterns::with_default("[auth][year]");
        let config = GeneratorConfig {
            key_regex: Some("(broken".to_string()),
            key_replacement: "X".to_string(),
            ..Default::default()
        };
        let library = Library::new();
        let generator = KeyGenerator::new(&patterns, &config, &library);
        assert_eq!(generator.generate_key(&entry()).unwrap(), "Smith2020");
    }

    #[test]
    fn regex_config_rewrites_the_key() {
        let patterns = KeyPatterns::with_default("[auth][year]");
        let config = GeneratorConfig {
            key_regex: Some(r"\d{2}(\d{2})".to_string()),
            key_replacement: "$1".to_string(),
            ..Default::default()
        };
        let library = Library::new();
        let generator = KeyGenerator::new(&patterns, &config, &library);
        assert_eq!(generator.generate_key(&entry()).unwrap(), "Smith20");
    }

    #[test]
    fn collisions_are_disambiguated() {
        let mut library = Library::new();
        let mut existing = entry();
        existing.set_citation_key("Smith2020");
        library.insert("existing", existing);
        let mut suffixed = entry();
        suffixed.set_citation_key("Smith2020a");
        library.insert("suffixed", suffixed);

        let patterns = KeyPatterns::with_default("[auth][year]");
        let config = GeneratorConfig::default();
        let generator = KeyGenerator::new(&patterns, &config, &library);
        assert_eq!(generator.generate_key(&entry()).unwrap(), "Smith2020b");
    }

    #[test]
    fn regeneration_is_idempotent() {
        let mut library = Library::new();
        let mut existing = entry();
        existing.set_citation_key("Smith2020");
        library.insert("existing", existing.clone());

        let patterns = KeyPatterns::with_default("[auth][year]");
        let config = GeneratorConfig::default();
        let generator = KeyGenerator::new(&patterns, &config, &library);

        // The entry's own key does not count as a collision.
        assert_eq!(generator.generate_key(&existing).unwrap(), "Smith2020");
        let change = generator.generate_and_assign(&mut existing).unwrap();
        assert!(change.is_none());
    }

    #[test]
    fn assignment_reports_the_change() {
        let patterns = KeyPatterns::with_default("[auth][year]");
        let config = GeneratorConfig::default();
        let library = Library::new();
        let generator = KeyGenerator::new(&patterns, &config, &library);

        let mut entry = entry();
        let change = generator.generate_and_assign(&mut entry).unwrap().unwrap();
        assert_eq!(change.old, None);
        assert_eq!(change.new, "Smith2020");
        assert_eq!(entry.citation_key(), Some("Smith2020"));
    }

    #[test]
    fn always_append_policy_suffixes_fresh_keys() {
        let patterns = KeyPatterns::with_default("[auth][year]");
        let config = GeneratorConfig {
            suffix: SuffixStyle::Always,
            ..Default::default()
        };
        let library = Library::new();
        let generator = KeyGenerator::new(&patterns, &config, &library);
        assert_eq!(generator.generate_key(&entry()).unwrap(), "Smith2020a");
    }

    #[test]
    fn per_type_pattern_is_used() {
        let mut patterns = KeyPatterns::with_default("[auth][year]");
        patterns.set_type_pattern("article", "[title:abbr][shortyear]");
        let config = GeneratorConfig::default();
        let library = Library::new();
        let generator = KeyGenerator::new(&patterns, &config, &library);
        assert_eq!(generator.generate_key(&entry()).unwrap(), "TSoSR20");
    }

    #[test]
    fn empty_result_is_rejected() {
        let err = generate("[missingfield]", &Entry::new("misc")).unwrap_err();
        assert!(matches!(err, KeyGenError::EmptyKey));
    }
}
