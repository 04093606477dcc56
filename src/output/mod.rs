//! Terminal output formatting
//!
//! Display utilities for the interactive game and statistics.

pub mod display;
pub mod formatters;

pub use display::{write_feedback, write_game_over, write_game_start, write_statistics};
