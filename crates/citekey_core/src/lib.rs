/*
SPDX-License-Identifier: MPL-2.0
*/

//! Data model for citation key generation.
//!
//! This crate holds the passive pieces of the key generator: bibliographic
//! entries, the library that owns them, key patterns, and the generator
//! configuration. The engine that turns these into keys lives in
//! `citekey_engine`.

pub mod config;
pub mod entry;
pub mod library;
pub mod pattern;

pub use config::{GeneratorConfig, SuffixStyle};
pub use entry::{Entry, KeyChange};
pub use library::{KeyIndex, KeyOccurrences, Library};
pub use pattern::KeyPatterns;
