/*
SPDX-License-Identifier: MPL-2.0
*/

//! Citation key generation.
//!
//! This crate turns a bibliographic entry and a bracketed pattern such as
//! `[auth][year]` into a short, stable, unique citation key. The pipeline
//! runs in one direction: pattern expansion (field resolution, character
//! filtering, and chained modifiers per bracket), an optional regex
//! post-process, uniqueness resolution against the owning collection, and
//! a final character cleanup.
//!
//! The engine is synchronous and holds no state between calls; the only
//! external capability it consumes is the occurrence query over the
//! collection's current keys. Callers generating keys for several entries
//! against the same collection must serialize those calls, assignment
//! included, or two resolutions may pick the same key.
//!
//! # Example
//!
//! ```rust
//! use citekey_core::{Entry, GeneratorConfig, KeyPatterns, Library};
//! use citekey_engine::KeyGenerator;
//!
//! let mut entry = Entry::new("article");
//! entry
//!     .set_field("author", "Jane Smith")
//!     .set_field("year", "2020");
//!
//! let patterns = KeyPatterns::with_default("[auth][year]");
//! let config = GeneratorConfig::default();
//! let library = Library::new();
//!
//! let generator = KeyGenerator::new(&patterns, &config, &library);
//! assert_eq!(generator.generate_key(&entry).unwrap(), "Smith2020");
//! ```

pub mod error;
pub mod expand;
pub mod filter;
pub mod generator;
pub mod io;
pub mod modifiers;
pub mod postprocess;
pub mod resolve;
pub mod uniqueness;

pub use error::KeyGenError;
pub use expand::{expand_brackets, parse_field_and_modifiers};
pub use filter::{clean_key, remove_unwanted_characters};
pub use generator::KeyGenerator;
pub use modifiers::{apply_modifiers, Modifier};
pub use postprocess::replace_with_regex;
pub use resolve::{FieldResolver, StandardResolver};
pub use uniqueness::{append_letters_to_key, get_appendix};

// Re-export the model crate types the API surfaces.
pub use citekey_core::{
    Entry, GeneratorConfig, KeyChange, KeyIndex, KeyOccurrences, KeyPatterns, Library, SuffixStyle,
};
