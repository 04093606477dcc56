//! Core domain types for Wordle
//!
//! Words, feedback patterns and the guessing engine. Everything here is
//! synchronous and free of I/O beyond the injected word source.

mod engine;
mod pattern;
mod word;

pub use engine::{AttemptLimit, DEFAULT_LANGUAGE, DEFAULT_MAX_ATTEMPTS, Game, GuessOutcome};
pub use pattern::{Feedback, Pattern};
pub use word::{Word, WordError};
