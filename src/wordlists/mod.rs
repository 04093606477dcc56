//! Word lists for the game
//!
//! Lists are keyed by a language tag and read through a [`WordSource`]:
//! the bundled lists, a directory of `<tag>.txt` files, or memory.

mod embedded;
mod list;
pub mod loader;

pub use embedded::{EMBEDDED_LISTS, EmbeddedSource};
pub use list::WordList;
pub use loader::{DirectorySource, MemorySource};

use crate::error::Result;

/// Provider of raw newline-delimited word list text
pub trait WordSource {
    /// Raw text for `language`
    ///
    /// # Errors
    /// Returns `WordListUnavailable` if there is no list for the tag.
    fn read(&self, language: &str) -> Result<String>;
}

impl<T: WordSource + ?Sized> WordSource for Box<T> {
    fn read(&self, language: &str) -> Result<String> {
        (**self).read(language)
    }
}
