/*
SPDX-License-Identifier: MPL-2.0
*/

//! The library: an order-preserving collection of entries keyed by ID,
//! and the occurrence query the uniqueness resolver consumes.

use crate::entry::Entry;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The capability the uniqueness resolver needs from a collection:
/// how many entries currently carry a given citation key.
///
/// Implementations must reflect live state at call time, because
/// resolution re-queries after every candidate suffix.
pub trait KeyOccurrences {
    fn occurrence_count(&self, key: &str) -> usize;
}

/// A collection of entries, keyed by entry ID, preserving insertion order.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
#[serde(transparent)]
pub struct Library {
    entries: IndexMap<String, Entry>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, entry: Entry) {
        self.entries.insert(id.into(), entry);
    }

    pub fn get(&self, id: &str) -> Option<&Entry> {
        self.entries.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Entry> {
        self.entries.get_mut(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.entries.iter().map(|(id, e)| (id.as_str(), e))
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyOccurrences for Library {
    fn occurrence_count(&self, key: &str) -> usize {
        self.entries
            .values()
            .filter(|e| e.citation_key() == Some(key))
            .count()
    }
}

/// A standalone count of citation keys, for callers that assign keys one
/// entry at a time and need the occurrence query to track each assignment
/// immediately (single-writer discipline).
#[derive(Debug, Default, Clone)]
pub struct KeyIndex {
    counts: IndexMap<String, usize>,
}

impl KeyIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from the keys already present in a library.
    pub fn from_library(library: &Library) -> Self {
        let mut index = KeyIndex::new();
        for (_, entry) in library.iter() {
            if let Some(key) = entry.citation_key() {
                index.add(key);
            }
        }
        index
    }

    /// Record one occurrence of `key`.
    pub fn add(&mut self, key: &str) {
        *self.counts.entry(key.to_string()).or_insert(0) += 1;
    }

    /// Remove one occurrence of `key`, saturating at zero.
    pub fn remove(&mut self, key: &str) {
        if let Some(count) = self.counts.get_mut(key) {
            *count = count.saturating_sub(1);
            if *count == 0 {
                self.counts.shift_remove(key);
            }
        }
    }

    /// Record that an entry's key changed from `old` to `new`.
    pub fn replace(&mut self, old: Option<&str>, new: &str) {
        if let Some(old) = old {
            self.remove(old);
        }
        self.add(new);
    }
}

impl KeyOccurrences for KeyIndex {
    fn occurrence_count(&self, key: &str) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }
}
