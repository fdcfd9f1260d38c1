/*
SPDX-License-Identifier: MPL-2.0
*/

//! Loading and saving libraries, configuration, and pattern tables.
//! YAML and JSON are supported, chosen by file extension.

use std::fs;
use std::path::Path;

use citekey_core::{GeneratorConfig, KeyPatterns, Library};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::KeyGenError;

fn load<T: DeserializeOwned>(path: &Path) -> Result<T, KeyGenError> {
    let bytes = fs::read(path)?;
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("yaml");

    match ext {
        "json" => serde_json::from_slice(&bytes)
            .map_err(|e| KeyGenError::Parse("JSON".to_string(), e.to_string())),
        _ => {
            let content = String::from_utf8_lossy(&bytes);
            serde_yaml::from_str(&content)
                .map_err(|e| KeyGenError::Parse("YAML".to_string(), e.to_string()))
        }
    }
}

/// Load a library from a YAML or JSON file.
pub fn load_library(path: &Path) -> Result<Library, KeyGenError> {
    load(path)
}

/// Load generator configuration from a YAML or JSON file.
pub fn load_config(path: &Path) -> Result<GeneratorConfig, KeyGenError> {
    load(path)
}

/// Load a pattern table from a YAML or JSON file.
pub fn load_patterns(path: &Path) -> Result<KeyPatterns, KeyGenError> {
    load(path)
}

/// Write a library back out, as YAML or JSON by extension.
pub fn save_library(path: &Path, library: &Library) -> Result<(), KeyGenError> {
    save(path, library)
}

fn save<T: Serialize>(path: &Path, value: &T) -> Result<(), KeyGenError> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("yaml");
    let content = match ext {
        "json" => serde_json::to_string_pretty(value)
            .map_err(|e| KeyGenError::Parse("JSON".to_string(), e.to_string()))?,
        _ => serde_yaml::to_string(value)
            .map_err(|e| KeyGenError::Parse("YAML".to_string(), e.to_string()))?,
    };
    fs::write(path, content)?;
    Ok(())
}
