//! Interactive line-based game
//!
//! Reads guesses line by line, renders feedback, and finishes sessions through
//! the [`SessionManager`] so scores and statistics are recorded.

use crate::error::ErrorKind;
use crate::output::{write_feedback, write_game_over, write_game_start, write_statistics};
use crate::session::{GameMode, SessionId, SessionManager};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::debug;

/// What to play each round
#[derive(Debug, Clone, Copy)]
pub struct PlayOptions<'a> {
    pub mode: GameMode,
    pub max_attempts: u32,
    /// Fixed target for every round; `None` draws a random word
    pub target: Option<&'a str>,
}

/// How a single round ended
enum Round {
    Finished,
    InputClosed,
}

/// Run rounds until the player declines a replay or input ends
///
/// # Errors
///
/// Returns an error if a game can't be started (bad language or word list),
/// or if reading input / writing output fails.
pub fn run_play<R: BufRead, W: Write>(
    manager: &mut SessionManager,
    options: PlayOptions<'_>,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    loop {
        let id = manager.start_new_game(options.mode, options.max_attempts, options.target)?;

        if let Round::InputClosed = play_round(manager, id, input, out)? {
            break;
        }

        let answer = prompt(input, out, "\nWould you like to play again? (y/n)")?
            .unwrap_or_default()
            .to_lowercase();
        if !matches!(answer.as_str(), "y" | "yes") {
            break;
        }
    }

    writeln!(out, "\n👋 Thanks for playing!")?;
    write_statistics(out, &manager.stats())?;
    Ok(())
}

fn play_round<R: BufRead, W: Write>(
    manager: &mut SessionManager,
    id: SessionId,
    input: &mut R,
    out: &mut W,
) -> Result<Round> {
    let session = manager.session(id).context("session vanished")?;
    debug!(word = session.game().target().text(), "target word");
    write_game_start(out, session)?;

    loop {
        let game = manager.session(id).context("session vanished")?.game();
        let attempt = game.attempts() + 1;
        let question = match game.limit().max() {
            Some(max) => format!("Attempt {attempt}/{max} - Enter your guess"),
            None => format!("Attempt {attempt} - Enter your guess"),
        };

        let Some(guess) = prompt(input, out, &question)? else {
            return Ok(Round::InputClosed);
        };

        match manager.guess(id, &guess) {
            Ok(outcome) => {
                let session = manager.session(id).context("session vanished")?;
                if let Some((word, pattern)) = session.game().history().last() {
                    write_feedback(out, word, pattern)?;
                }

                if outcome.completed {
                    let score = manager.finish_game(id, outcome.success)?;
                    let session = manager.session(id).context("session vanished")?;
                    write_game_over(out, session, score)?;
                    return Ok(Round::Finished);
                }
            }
            // Bad input keeps the game going; anything else ends the command
            Err(e) if e.kind() == ErrorKind::Input => writeln!(out, "Error: {e}")?,
            Err(e) => return Err(e.into()),
        }
    }
}

/// Print a prompt and read one trimmed line, `None` at end of input
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    question: &str,
) -> Result<Option<String>> {
    write!(out, "{question}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{ManualClock, MemoryStatsStore, Statistics};
    use crate::wordlists::MemorySource;
    use std::io::Cursor;

    fn manager(store: MemoryStatsStore) -> SessionManager {
        let source = MemorySource::new().with_list("en", "hello\nworld\nheoll\nabc");
        SessionManager::with_clock("en", source, store, ManualClock::new()).unwrap()
    }

    fn run(m: &mut SessionManager, mode: GameMode, max_attempts: u32, script: &str) -> String {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        let options = PlayOptions {
            mode,
            max_attempts,
            target: Some("hello"),
        };
        run_play(m, options, &mut input, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn winning_round_records_stats() {
        let store = MemoryStatsStore::new();
        let mut m = manager(store.clone());
        let text = run(&mut m, GameMode::Normal, 6, "zzzzz\nabc\nworld\nhello\nn\n");

        assert!(text.contains("Attempt 1/6 - Enter your guess"));
        assert!(text.contains("Error: Guess 'zzzzz' is not a valid word"));
        assert!(text.contains("Error: Guess must be exactly 5 letters, got 3."));
        assert!(text.contains("W O R L D  ⬛🟨⬛🟩⬛"));
        assert!(text.contains("Attempt 2/6 - Enter your guess"));
        assert!(text.contains("You found the word 'hello' in 2 attempts."));
        assert!(text.contains("500"));
        assert!(text.contains("Thanks for playing!"));

        let saved: Statistics = serde_json::from_str(&store.contents().unwrap()).unwrap();
        assert_eq!(saved.total_games, 1);
        assert_eq!(saved.total_score, 500);
    }

    #[test]
    fn losing_round() {
        let mut m = manager(MemoryStatsStore::new());
        let text = run(&mut m, GameMode::Normal, 2, "world\nheoll\nn\n");

        assert!(text.contains("Game over! The correct word was 'hello'."));
        assert_eq!(m.stats().total_games, 1);
        assert_eq!(m.stats().total_wins, 0);
    }

    #[test]
    fn replay_starts_a_new_session() {
        let mut m = manager(MemoryStatsStore::new());
        let text = run(&mut m, GameMode::Normal, 6, "hello\ny\nhello\nn\n");

        assert_eq!(text.matches("New game started!").count(), 2);
        assert_eq!(m.sessions().len(), 2);
        assert_eq!(m.stats().total_games, 2);
        assert_eq!(m.stats().current_streak, 2);
    }

    #[test]
    fn end_of_input_abandons_round() {
        let mut m = manager(MemoryStatsStore::new());
        let text = run(&mut m, GameMode::Normal, 6, "world\n");

        assert!(text.contains("Thanks for playing!"));
        assert_eq!(m.stats().total_games, 0);
        assert!(!m.sessions()[0].is_finished());
    }

    #[test]
    fn empty_guess_is_reported() {
        let mut m = manager(MemoryStatsStore::new());
        let text = run(&mut m, GameMode::Normal, 6, "\n");

        assert!(text.contains("Error: Guess must be a non-empty word"));
        assert_eq!(m.sessions()[0].game().attempts(), 0);
    }

    #[test]
    fn practice_prompt_has_no_limit() {
        let mut m = manager(MemoryStatsStore::new());
        let text = run(&mut m, GameMode::Practice, 6, "world\nhello\nn\n");

        assert!(text.contains("Attempt 1 - Enter your guess"));
        assert!(text.contains("Attempt 2 - Enter your guess"));
        assert!(!text.contains("Max attempts"));
        assert!(!text.contains("Your score"));
        assert_eq!(m.stats().total_games, 0);
    }

    #[test]
    fn configuration_errors_end_the_command() {
        let source = MemorySource::new().with_list("en", "hello\n");
        let mut m = SessionManager::with_clock(
            "de",
            source,
            MemoryStatsStore::new(),
            ManualClock::new(),
        )
        .unwrap();
        let mut input = Cursor::new(b"hello\n".to_vec());
        let mut out = Vec::new();
        let options = PlayOptions {
            mode: GameMode::Normal,
            max_attempts: 6,
            target: None,
        };

        let err = run_play(&mut m, options, &mut input, &mut out).unwrap_err();
        assert!(err.to_string().contains("de"));
        assert!(m.sessions().is_empty());
    }
}
