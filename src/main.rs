//! Wordle Game - CLI
//!
//! Interactive Wordle in the terminal with normal, timed and practice modes.

use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing::warn;
use tracing_subscriber::EnvFilter;
use wordle_game::{
    commands::{PlayOptions, run_play},
    config::Settings,
    core::{DEFAULT_LANGUAGE, DEFAULT_MAX_ATTEMPTS},
    session::{GameMode, SessionManager},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden word: normal, timed and practice modes with saved statistics",
    version,
    author
)]
struct Cli {
    /// Mode: normal (default), timed, practice
    #[arg(default_value_t = GameMode::Normal)]
    mode: GameMode,

    /// Word list language tag
    #[arg(default_value = DEFAULT_LANGUAGE)]
    language: String,

    /// Maximum attempts per game (ignored in practice mode); invalid values fall back to the default
    #[arg(default_value_t = DEFAULT_MAX_ATTEMPTS, value_parser = parse_max_attempts)]
    max_attempts: u32,

    /// Statistics file (default: platform data directory)
    #[arg(long, env = "WORDLE_STATS_FILE")]
    stats_file: Option<PathBuf>,

    /// Directory of `<language>.txt` word lists (default: bundled lists)
    #[arg(long, env = "WORDLE_WORDS_DIR")]
    words_dir: Option<PathBuf>,
}

/// Anything that isn't a positive number means the default
#[allow(clippy::unnecessary_wraps)]
fn parse_max_attempts(value: &str) -> std::result::Result<u32, String> {
    match value.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => {
            warn!(value, default = DEFAULT_MAX_ATTEMPTS, "invalid max attempts, using the default");
            Ok(DEFAULT_MAX_ATTEMPTS)
        }
    }
}

fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with the board
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("wordle_game=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let settings = Settings {
        stats_file: cli.stats_file,
        words_dir: cli.words_dir,
    };

    let mut manager =
        SessionManager::new(&cli.language, settings.word_source(), settings.stats_store())?;

    let options = PlayOptions {
        mode: cli.mode,
        max_attempts: cli.max_attempts,
        target: None,
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();
    run_play(&mut manager, options, &mut input, &mut out)
}
