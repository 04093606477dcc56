//! Build script to embed the bundled word lists
//!
//! Scans `data/wordlists/` and generates a table of `(language, text)` pairs.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const WORDLIST_DIR: &str = "data/wordlists";

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let source_dir = Path::new(&manifest_dir).join(WORDLIST_DIR);

    let mut languages: Vec<(String, String)> = fs::read_dir(&source_dir)
        .unwrap_or_else(|e| panic!("Failed to read {}: {e}", source_dir.display()))
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "txt"))
        .filter_map(|path| {
            let tag = path.file_stem()?.to_str()?.to_string();
            Some((tag, path.display().to_string()))
        })
        .collect();
    languages.sort();

    let output_path = Path::new(&out_dir).join("embedded_lists.rs");
    let mut output = fs::File::create(&output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word list table").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Bundled word lists as `(language, raw text)` pairs").unwrap();
    writeln!(output, "pub const EMBEDDED_LISTS: &[(&str, &str)] = &[").unwrap();

    for (tag, path) in &languages {
        writeln!(output, "    ({tag:?}, include_str!({path:?})),").unwrap();
    }

    writeln!(output, "];").unwrap();

    // Rebuild if word lists change
    println!("cargo:rerun-if-changed={WORDLIST_DIR}");
    for (_, path) in &languages {
        println!("cargo:rerun-if-changed={path}");
    }
}
