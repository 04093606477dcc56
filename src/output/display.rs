//! Display functions for game events

use super::formatters::{create_progress_bar, format_seconds, guess_row};
use crate::core::{Pattern, Word};
use crate::session::{GameMode, Session, Statistics};
use colored::Colorize;
use std::io::{self, Write};

/// Announce a freshly started session
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn write_game_start<W: Write>(out: &mut W, session: &Session) -> io::Result<()> {
    let game = session.game();
    write!(
        out,
        "\n{} Word length: {}, Language: {}, Mode: {}",
        "New game started!".bright_cyan().bold(),
        game.target().len(),
        game.language(),
        session.mode()
    )?;
    if let Some(max) = game.limit().max() {
        write!(out, ", Max attempts: {max}")?;
    }
    writeln!(out)
}

/// Show the feedback row for an accepted guess
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn write_feedback<W: Write>(out: &mut W, word: &Word, pattern: &Pattern) -> io::Result<()> {
    writeln!(out, "Result: {}", guess_row(word, pattern))
}

/// Win/loss banner, time taken for timed games and the score for scored games
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn write_game_over<W: Write>(out: &mut W, session: &Session, score: i64) -> io::Result<()> {
    let game = session.game();
    let target = game.target().text();

    if game.is_won() {
        let attempts = game.attempts();
        writeln!(
            out,
            "{}",
            format!(
                "🎉 Congratulations! You found the word '{target}' in {attempts} {}.",
                if attempts == 1 { "attempt" } else { "attempts" }
            )
            .green()
            .bold()
        )?;
    } else {
        writeln!(
            out,
            "{}",
            format!("💥 Game over! The correct word was '{target}'.")
                .red()
                .bold()
        )?;
    }

    match session.mode() {
        GameMode::Timed => {
            let seconds = session.elapsed_seconds().unwrap_or_default();
            writeln!(out, "Time taken: {} seconds", format_seconds(seconds))?;
            writeln!(out, "Your score: {}", score.to_string().bright_yellow().bold())?;
        }
        GameMode::Normal => {
            writeln!(out, "Your score: {}", score.to_string().bright_yellow().bold())?;
        }
        GameMode::Practice => {}
    }

    Ok(())
}

/// Print the aggregate statistics
///
/// # Errors
/// Returns any error from the underlying writer.
pub fn write_statistics<W: Write>(out: &mut W, stats: &Statistics) -> io::Result<()> {
    writeln!(out, "\n{}", "─".repeat(40).cyan())?;
    writeln!(out, " {}", "STATISTICS".bright_cyan().bold())?;
    writeln!(out, "{}", "─".repeat(40).cyan())?;

    let win_pct = stats.win_rate() * 100.0;
    writeln!(out, "   Games played:     {}", stats.total_games)?;
    writeln!(
        out,
        "   Wins:             {} [{}] {win_pct:.0}%",
        stats.total_wins,
        create_progress_bar(win_pct, 100.0, 20).green()
    )?;
    writeln!(out, "   Total score:      {}", stats.total_score)?;
    writeln!(out, "   Average attempts: {:.2}", stats.average_attempts)?;
    writeln!(out, "   Current streak:   {}", stats.current_streak)?;
    writeln!(out, "   Best streak:      {}", stats.best_streak)
}
