/*
SPDX-License-Identifier: MPL-2.0
*/

//! Citation key CLI.
//!
//! Loads a library plus optional configuration and pattern files,
//! generates a key for every entry in order, and prints the assignments.
//! The occurrence index is updated after every assignment, so keys
//! generated later in the run see the ones assigned earlier.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use citekey_engine::io;
use citekey_engine::{
    GeneratorConfig, KeyGenError, KeyGenerator, KeyIndex, KeyPatterns, Library,
};

#[derive(Parser, Debug)]
#[command(name = "citekey", version, about = "Generate citation keys for a library")]
struct Cli {
    /// Library file (YAML or JSON).
    #[arg(long)]
    library: PathBuf,

    /// Generator configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Pattern table file.
    #[arg(long)]
    patterns: Option<PathBuf>,

    /// Override the default pattern, e.g. "[auth][year]".
    #[arg(long)]
    pattern: Option<String>,

    /// Write the updated library to this path.
    #[arg(long)]
    write: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), KeyGenError> {
    let mut library: Library = io::load_library(&cli.library)?;

    let config = match &cli.config {
        Some(path) => io::load_config(path)?,
        None => GeneratorConfig::default(),
    };

    let mut patterns = match &cli.patterns {
        Some(path) => io::load_patterns(path)?,
        None => KeyPatterns::default(),
    };
    if let Some(pattern) = &cli.pattern {
        patterns.default = pattern.clone();
    }

    // One entry at a time: generate against the live index, assign, then
    // record the assignment before moving on.
    let mut index = KeyIndex::from_library(&library);
    let ids: Vec<String> = library.ids().map(str::to_string).collect();

    for id in ids {
        let new_key = {
            let Some(entry) = library.get(&id) else {
                continue;
            };
            let generator = KeyGenerator::new(&patterns, &config, &index);
            generator.generate_key(entry)?
        };

        let Some(entry) = library.get_mut(&id) else {
            continue;
        };
        match entry.set_citation_key(new_key.clone()) {
            Some(change) => {
                index.replace(change.old.as_deref(), &change.new);
                println!(
                    "{id}\t{} -> {}",
                    change.old.as_deref().unwrap_or("(none)"),
                    change.new
                );
            }
            None => println!("{id}\t{new_key} (unchanged)"),
        }
    }

    if let Some(path) = &cli.write {
        io::save_library(path, &library)?;
    }

    Ok(())
}
