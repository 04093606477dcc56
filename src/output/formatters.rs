//! Formatting utilities for terminal output

use crate::core::{Pattern, Word};

/// Format a guess with its feedback, e.g. `H E L L O  🟩🟩🟨🟩🟨`
#[must_use]
pub fn guess_row(word: &Word, pattern: &Pattern) -> String {
    let letters: Vec<String> = word
        .letters()
        .iter()
        .map(|c| c.to_uppercase().to_string())
        .collect();

    format!("{}  {}", letters.join(" "), pattern.to_emoji())
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Seconds with at most one decimal, trailing zero dropped (`15`, `12.3`)
#[must_use]
pub fn format_seconds(seconds: f64) -> String {
    let rounded = (seconds * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        format!("{rounded:.1}")
    }
}
