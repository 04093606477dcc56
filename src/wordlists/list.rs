//! Loaded, immutable word lists

use super::WordSource;
use super::loader::parse_words;
use crate::error::{GameError, Result};
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug)]
struct Inner {
    language: String,
    words: Vec<String>,
    index: FxHashSet<String>,
}

/// Ordered lowercase words for one language
///
/// Cheap to clone: the words are shared behind an `Arc`.
#[derive(Debug, Clone)]
pub struct WordList {
    inner: Arc<Inner>,
}

impl WordList {
    /// Load and parse the list for `language` from `source`
    ///
    /// # Errors
    /// Returns `WordListUnavailable` if the source has no list for the tag,
    /// or `EmptyWordList` if the list contains no words.
    pub fn load(source: &dyn WordSource, language: &str) -> Result<Self> {
        let text = source.read(language)?;
        let list = Self::from_words(language, parse_words(&text));

        if list.is_empty() {
            return Err(GameError::EmptyWordList(language.to_string()));
        }

        debug!(language, count = list.len(), "word list loaded");
        Ok(list)
    }

    /// Build a list from words that are already lowercase and trimmed
    #[must_use]
    pub fn from_words(language: &str, words: Vec<String>) -> Self {
        let index = words.iter().cloned().collect();
        Self {
            inner: Arc::new(Inner {
                language: language.to_string(),
                words,
                index,
            }),
        }
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.inner.language
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.inner.index.contains(word)
    }

    /// Pick a word uniformly at random, `None` only for an empty list
    #[must_use]
    pub fn random_word(&self) -> Option<&str> {
        self.inner
            .words
            .choose(&mut rand::rng())
            .map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.words.is_empty()
    }

    /// Words in file order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.inner.words.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::MemorySource;

    #[test]
    fn load_keeps_order() {
        let source = MemorySource::new().with_list("en", "Zebra\r\napple\nmango");
        let list = WordList::load(&source, "en").unwrap();

        assert_eq!(list.iter().collect::<Vec<_>>(), vec!["zebra", "apple", "mango"]);
        assert_eq!(list.language(), "en");
        assert!(list.contains("apple"));
        assert!(!list.contains("Apple"));
    }

    #[test]
    fn load_empty_list_fails() {
        let source = MemorySource::new().with_list("en", "\n\n");
        let err = WordList::load(&source, "en").unwrap_err();
        assert!(matches!(err, GameError::EmptyWordList(ref tag) if tag == "en"));
    }

    #[test]
    fn load_unknown_language_fails() {
        let err = WordList::load(&MemorySource::new(), "xx").unwrap_err();
        assert!(err.to_string().contains("xx"));
    }

    #[test]
    fn random_word_comes_from_list() {
        let list = WordList::from_words("en", vec!["hello".into(), "world".into()]);
        for _ in 0..20 {
            let word = list.random_word().unwrap();
            assert!(list.contains(word));
        }
    }

    #[test]
    fn random_word_covers_list() {
        let list = WordList::from_words("en", vec!["aa".into(), "bb".into(), "cc".into()]);
        let seen: FxHashSet<&str> = (0..300).filter_map(|_| list.random_word()).collect();
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn random_word_empty() {
        let list = WordList::from_words("en", Vec::new());
        assert!(list.random_word().is_none());
    }
}
