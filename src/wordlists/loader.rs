//! Word list loading utilities
//!
//! Splits raw list text into words and provides file and in-memory sources.

use super::WordSource;
use crate::error::{GameError, Result};
use rustc_hash::FxHashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Split raw list text into lowercase words
///
/// Handles both `\n` and `\r\n` line endings; blank lines are skipped and
/// surrounding whitespace is trimmed.
///
/// # Examples
/// ```
/// use wordle_game::wordlists::loader::parse_words;
///
/// let words = parse_words("Crane\r\nslate\n\n");
/// assert_eq!(words, vec!["crane", "slate"]);
/// ```
#[must_use]
pub fn parse_words(text: &str) -> Vec<String> {
    text.lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_lowercase())
            }
        })
        .collect()
}

/// Language tags double as file names, so keep them to a safe alphabet
fn is_valid_tag(language: &str) -> bool {
    !language.is_empty()
        && language
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

/// Reads `<dir>/<language>.txt`
#[derive(Debug, Clone)]
pub struct DirectorySource {
    dir: PathBuf,
}

impl DirectorySource {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Path of the list file for a language
    #[must_use]
    pub fn path_for(&self, language: &str) -> PathBuf {
        self.dir.join(format!("{language}.txt"))
    }
}

impl WordSource for DirectorySource {
    fn read(&self, language: &str) -> Result<String> {
        if !is_valid_tag(language) {
            return Err(GameError::unavailable(language, None));
        }

        let path = self.path_for(language);
        debug!(path = %path.display(), "reading word list");
        fs::read_to_string(&path).map_err(|e| GameError::unavailable(language, Some(e)))
    }
}

/// Word lists held in memory, keyed by language
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    lists: FxHashMap<String, String>,
}

impl MemorySource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the raw text for a language
    #[must_use]
    pub fn with_list(mut self, language: &str, text: &str) -> Self {
        self.lists.insert(language.to_string(), text.to_string());
        self
    }
}

impl WordSource for MemorySource {
    fn read(&self, language: &str) -> Result<String> {
        self.lists
            .get(language)
            .cloned()
            .ok_or_else(|| GameError::unavailable(language, None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn parse_words_handles_crlf() {
        let words = parse_words("hello\r\nworld\r\n");
        assert_eq!(words, vec!["hello", "world"]);
    }

    #[test]
    fn parse_words_lowercases_and_trims() {
        let words = parse_words("  HELLO \nWorld\n");
        assert_eq!(words, vec!["hello", "world"]);
    }

    #[test]
    fn parse_words_skips_blank_lines() {
        let words = parse_words("\n\nhello\n   \nworld\n\n");
        assert_eq!(words, vec!["hello", "world"]);
    }

    #[test]
    fn parse_words_empty() {
        assert!(parse_words("").is_empty());
    }

    #[test]
    fn directory_source_reads_file() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("en.txt"), "hello\nworld\n").unwrap();

        let source = DirectorySource::new(dir.path());
        assert_eq!(source.read("en").unwrap(), "hello\nworld\n");
    }

    #[test]
    fn directory_source_missing_file() {
        let dir = tempdir().unwrap();
        let source = DirectorySource::new(dir.path());

        let err = source.read("es").unwrap_err();
        assert!(matches!(
            err,
            GameError::WordListUnavailable { ref language, source: Some(_) } if language == "es"
        ));
        assert!(err.to_string().contains("es"));
    }

    #[test]
    fn directory_source_rejects_path_like_tags() {
        let dir = tempdir().unwrap();
        let source = DirectorySource::new(dir.path());

        for tag in ["../en", "en/fr", "", "en.txt"] {
            assert!(
                matches!(source.read(tag), Err(GameError::WordListUnavailable { .. })),
                "tag {tag:?} should be rejected"
            );
        }
    }

    #[test]
    fn memory_source_lookup() {
        let source = MemorySource::new().with_list("en", "hello");
        assert_eq!(source.read("en").unwrap(), "hello");
        assert!(source.read("fr").is_err());
    }
}
