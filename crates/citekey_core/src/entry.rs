/*
SPDX-License-Identifier: MPL-2.0
*/

//! A bibliographic entry: a typed bag of fields plus the citation key
//! assigned to it, if any.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single bibliographic entry.
///
/// Fields are free-form name/value pairs; the engine reads them through
/// a field resolver and only ever writes `citation_key`.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", default)]
pub struct Entry {
    /// The entry type (e.g. "article", "book"). Used for per-type pattern lookup.
    pub entry_type: String,
    /// Free-form bibliographic fields, keyed by lowercase field name.
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub fields: IndexMap<String, String>,
    /// The citation key currently assigned to this entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub citation_key: Option<String>,
    /// Keywords attached to the entry.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
}

/// A change notification produced when assigning a key actually changed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyChange {
    pub old: Option<String>,
    pub new: String,
}

impl Entry {
    /// Create an entry of the given type with no fields.
    pub fn new(entry_type: impl Into<String>) -> Self {
        Entry {
            entry_type: entry_type.into(),
            ..Default::default()
        }
    }

    /// Look up a field value by (lowercase) name.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Insert a field value, replacing any previous one.
    pub fn set_field(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// The citation key currently assigned to this entry, if any.
    pub fn citation_key(&self) -> Option<&str> {
        self.citation_key.as_deref()
    }

    /// Assign a citation key, reporting the change only when the value
    /// actually changed.
    pub fn set_citation_key(&mut self, key: impl Into<String>) -> Option<KeyChange> {
        let new = key.into();
        if self.citation_key.as_deref() == Some(new.as_str()) {
            return None;
        }
        let old = self.citation_key.replace(new.clone());
        Some(KeyChange { old, new })
    }

    /// Join the keyword list with the given delimiter character.
    pub fn keyword_list(&self, delimiter: char) -> String {
        self.keywords.join(&delimiter.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_citation_key_reports_change_once() {
        let mut entry = Entry::new("article");
        let change = entry.set_citation_key("Smith2020").unwrap();
        assert_eq!(change.old, None);
        assert_eq!(change.new, "Smith2020");

        // Same value again: no change.
        assert!(entry.set_citation_key("Smith2020").is_none());

        let change = entry.set_citation_key("Smith2020a").unwrap();
        assert_eq!(change.old.as_deref(), Some("Smith2020"));
        assert_eq!(change.new, "Smith2020a");
    }

    #[test]
    fn keyword_list_uses_delimiter() {
        let mut entry = Entry::new("article");
        entry.keywords = vec!["ml".into(), "nlp".into()];
        assert_eq!(entry.keyword_list(','), "ml,nlp");
        assert_eq!(entry.keyword_list(';'), "ml;nlp");
    }

    #[test]
    fn entry_deserializes_from_yaml() {
        let yaml = r#"
entry-type: article
fields:
  author: Jane Smith
  year: "2020"
keywords:
  - deep learning
"#;
        let entry: Entry = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(entry.entry_type, "article");
        assert_eq!(entry.field("author"), Some("Jane Smith"));
        assert_eq!(entry.keywords, vec!["deep learning".to_string()]);
        assert!(entry.citation_key().is_none());
    }
}
