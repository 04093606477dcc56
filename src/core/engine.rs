//! The guessing engine: one target word, an attempt budget, and feedback per guess

use super::{Pattern, Word};
use crate::error::{GameError, Result};
use crate::wordlists::{WordList, WordSource};
use std::fmt;
use tracing::debug;

/// Default number of attempts for a game
pub const DEFAULT_MAX_ATTEMPTS: u32 = 6;

/// Default language tag for word lists
pub const DEFAULT_LANGUAGE: &str = "fr";

/// How many guesses a game allows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttemptLimit {
    /// Game ends after this many guesses (at least 1)
    Limited(u32),
    /// Game ends only on a correct guess
    Unlimited,
}

impl AttemptLimit {
    /// The cap, if any
    #[must_use]
    pub const fn max(self) -> Option<u32> {
        match self {
            Self::Limited(max) => Some(max),
            Self::Unlimited => None,
        }
    }

    const fn is_exhausted_by(self, attempts: u32) -> bool {
        match self {
            Self::Limited(max) => attempts >= max,
            Self::Unlimited => false,
        }
    }
}

impl Default for AttemptLimit {
    fn default() -> Self {
        Self::Limited(DEFAULT_MAX_ATTEMPTS)
    }
}

impl fmt::Display for AttemptLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Limited(max) => write!(f, "{max}"),
            Self::Unlimited => write!(f, "unlimited"),
        }
    }
}

/// Result of one accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessOutcome {
    pub pattern: Pattern,
    pub attempts: u32,
    pub completed: bool,
    pub success: bool,
}

/// A single game of Wordle
///
/// The word list is loaded at construction and used to validate both the
/// target and every guess. Once completed, further guesses are rejected.
#[derive(Debug, Clone)]
pub struct Game {
    words: WordList,
    target: Word,
    limit: AttemptLimit,
    attempts: u32,
    completed: bool,
    history: Vec<(Word, Pattern)>,
}

impl Game {
    /// Load the word list for `language` and start a game
    ///
    /// With `target = None` a word is drawn at random from the list.
    ///
    /// # Errors
    /// - `WordListUnavailable`/`EmptyWordList` if the list can't be loaded
    /// - `InvalidTarget` if `target` is empty
    /// - `UnknownTarget` if `target` is not in the list
    pub fn new(
        source: &dyn WordSource,
        language: &str,
        target: Option<&str>,
        limit: AttemptLimit,
    ) -> Result<Self> {
        let words = WordList::load(source, language)?;
        Self::with_word_list(words, target, limit)
    }

    /// Start a game against an already loaded word list
    ///
    /// # Errors
    /// Same target validation as [`Game::new`].
    pub fn with_word_list(
        words: WordList,
        target: Option<&str>,
        limit: AttemptLimit,
    ) -> Result<Self> {
        if let AttemptLimit::Limited(0) = limit {
            return Err(GameError::InvalidAttemptLimit);
        }

        let target = match target {
            Some(text) => {
                let word =
                    Word::new(text).map_err(|_| GameError::InvalidTarget(text.to_string()))?;
                if !words.contains(word.text()) {
                    return Err(GameError::UnknownTarget {
                        word: word.text().to_string(),
                        language: words.language().to_string(),
                    });
                }
                word
            }
            None => {
                let text = words
                    .random_word()
                    .ok_or_else(|| GameError::EmptyWordList(words.language().to_string()))?;
                Word::new(text).map_err(|_| GameError::InvalidTarget(text.to_string()))?
            }
        };

        debug!(
            language = words.language(),
            length = target.len(),
            %limit,
            "game created"
        );

        Ok(Self {
            words,
            target,
            limit,
            attempts: 0,
            completed: false,
            history: Vec::new(),
        })
    }

    /// Submit a guess
    ///
    /// Rejected guesses leave the game untouched so the caller can re-prompt.
    ///
    /// # Errors
    /// - `GameCompleted` if the game is already over
    /// - `InvalidGuess` if the guess is empty
    /// - `LengthMismatch` if the guess length differs from the target's
    /// - `UnknownWord` if the guess is not in the word list
    pub fn guess(&mut self, word: &str) -> Result<GuessOutcome> {
        if self.completed {
            return Err(GameError::GameCompleted);
        }

        let guess = Word::new(word).map_err(|_| GameError::InvalidGuess)?;

        if guess.len() != self.target.len() {
            return Err(GameError::LengthMismatch {
                expected: self.target.len(),
                actual: guess.len(),
            });
        }

        if !self.words.contains(guess.text()) {
            return Err(GameError::UnknownWord(guess.text().to_string()));
        }

        self.attempts += 1;

        let pattern = Pattern::calculate(&guess, &self.target);
        let success = guess == self.target;

        if success || self.limit.is_exhausted_by(self.attempts) {
            self.completed = true;
        }

        self.history.push((guess, pattern.clone()));

        Ok(GuessOutcome {
            pattern,
            attempts: self.attempts,
            completed: self.completed,
            success,
        })
    }

    #[must_use]
    pub fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub const fn attempts(&self) -> u32 {
        self.attempts
    }

    #[must_use]
    pub const fn limit(&self) -> AttemptLimit {
        self.limit
    }

    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// True once the target has been guessed
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.history
            .last()
            .is_some_and(|(word, _)| *word == self.target)
    }

    #[must_use]
    pub fn language(&self) -> &str {
        self.words.language()
    }

    /// Accepted guesses with their feedback, oldest first
    #[must_use]
    pub fn history(&self) -> &[(Word, Pattern)] {
        &self.history
    }
}
