//! Wordle Game
//!
//! A command-line Wordle game with normal, timed and practice modes,
//! language-tagged word lists, and persistent statistics.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{AttemptLimit, Game};
//! use wordle_game::wordlists::MemorySource;
//!
//! let source = MemorySource::new().with_list("en", "hello\nworld\n");
//! let mut game = Game::new(&source, "en", Some("hello"), AttemptLimit::default()).unwrap();
//!
//! let outcome = game.guess("world").unwrap();
//! assert_eq!(outcome.pattern.codes(), vec![-1, 0, -1, 1, -1]);
//! assert!(!outcome.completed);
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod wordlists;

// Sessions, scoring and statistics
pub mod session;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub mod config;
pub mod error;

pub use error::{ErrorKind, GameError, Result};
