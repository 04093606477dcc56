//! Wordle feedback pattern calculation and representation
//!
//! Each letter of a guess gets one of three feedback codes:
//! - `1` = Correct (right letter, right position)
//! - `0` = Present (letter in word, wrong position)
//! - `-1` = Absent (letter not in word, or every occurrence already matched)

use super::Word;

/// Feedback for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum Feedback {
    Absent = -1,
    Present = 0,
    Correct = 1,
}

impl Feedback {
    /// Signed feedback code (`1`, `0` or `-1`)
    #[inline]
    #[must_use]
    pub const fn code(self) -> i8 {
        self as i8
    }

    /// Emoji marker used when rendering a row
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
        }
    }
}

/// Feedback for a whole guess, one entry per letter
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern(Vec<Feedback>);

impl Pattern {
    /// Calculate the pattern when `guess` is guessed and `target` is the hidden word
    ///
    /// This implements Wordle's exact feedback rules, including proper handling
    /// of duplicate letters. Both words must have the same length.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and strike them from a scratch copy of the target
    /// 2. Second pass: for each remaining position, consume the first unmatched
    ///    occurrence of the letter from the scratch copy, if any
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Pattern, Word};
    ///
    /// let guess = Word::new("heoll").unwrap();
    /// let target = Word::new("hello").unwrap();
    /// let pattern = Pattern::calculate(&guess, &target);
    ///
    /// assert_eq!(pattern.codes(), vec![1, 1, 0, 1, 0]);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        debug_assert_eq!(guess.len(), target.len(), "words must have equal length");

        let guess = guess.letters();
        let mut remaining: Vec<Option<char>> = target.letters().iter().copied().map(Some).collect();
        let mut result = vec![Feedback::Absent; guess.len()];

        // First pass: exact position matches
        for (i, &letter) in guess.iter().enumerate() {
            if remaining.get(i).copied().flatten() == Some(letter) {
                result[i] = Feedback::Correct;
                remaining[i] = None;
            }
        }

        // Second pass: misplaced letters from what is left
        for (i, &letter) in guess.iter().enumerate() {
            if result[i] == Feedback::Correct {
                continue;
            }

            if let Some(slot) = remaining.iter_mut().find(|slot| **slot == Some(letter)) {
                result[i] = Feedback::Present;
                *slot = None;
            }
        }

        Self(result)
    }

    /// Feedback entries in letter order
    #[inline]
    #[must_use]
    pub fn feedback(&self) -> &[Feedback] {
        &self.0
    }

    /// Signed codes in letter order
    #[must_use]
    pub fn codes(&self) -> Vec<i8> {
        self.0.iter().map(|f| f.code()).collect()
    }

    /// Number of letters covered by the pattern
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every letter is correct
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&f| f == Feedback::Correct)
    }

    /// Convert pattern to emoji string like "🟩🟨⬛🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|f| f.emoji()).collect()
    }
}
