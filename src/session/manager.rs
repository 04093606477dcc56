//! Session lifecycle, scoring and statistics
//!
//! A [`SessionManager`] owns every session it starts. Finishing a session
//! scores it, folds it into the running [`Statistics`] and writes them to the
//! configured store.

use super::store::{load_statistics, save_statistics};
use super::{Clock, GameMode, Statistics, StatsStore, SystemClock};
use crate::core::{Game, GuessOutcome};
use crate::error::{GameError, Result};
use crate::wordlists::WordSource;
use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

/// Score returned for practice sessions, which are never scored
pub const PRACTICE_SCORE: i64 = -1;

const ATTEMPT_POINTS: f64 = 100.0;
const TIME_BONUS_MAX: f64 = 500.0;
const TIME_BONUS_PER_SECOND: f64 = 10.0;

/// Handle to a session owned by a [`SessionManager`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(usize);

/// One playthrough: a game plus its mode, timing and score
#[derive(Debug, Clone)]
///
/// Sessions are only changed through their [`SessionManager`]; callers get
/// read-only views.
///
/// ```compile_fail
/// use wordle_game::session::Session;
///
/// fn reopen(session: &mut Session) {
///     session.completed = false;
/// }
/// ```
pub struct Session {
    game: Game,
    mode: GameMode,
    started_at: DateTime<Utc>,
    ended_at: Option<DateTime<Utc>>,
    completed: bool,
    score: i64,
}

impl Session {
    #[must_use]
    pub const fn game(&self) -> &Game {
        &self.game
    }

    #[must_use]
    pub const fn mode(&self) -> GameMode {
        self.mode
    }

    #[must_use]
    pub const fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub const fn ended_at(&self) -> Option<DateTime<Utc>> {
        self.ended_at
    }

    /// True once [`SessionManager::finish_game`] has run for this session
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.completed
    }

    /// Score set at finish; 0 while running
    #[must_use]
    pub const fn score(&self) -> i64 {
        self.score
    }

    /// Seconds between start and finish, `None` while still running
    #[must_use]
    pub fn elapsed_seconds(&self) -> Option<f64> {
        self.ended_at
            .map(|end| (end - self.started_at).num_milliseconds() as f64 / 1000.0)
    }
}

/// Creates and finishes sessions, scores them and keeps the statistics
pub struct SessionManager {
    language: String,
    source: Box<dyn WordSource>,
    store: Box<dyn StatsStore>,
    clock: Box<dyn Clock>,
    stats: Statistics,
    sessions: Vec<Session>,
}

impl SessionManager {
    /// Create a manager using the system clock
    ///
    /// # Errors
    /// Returns `CorruptStats` if the stored statistics can't be parsed, or
    /// `Io` if the store can't be read. A missing store starts from zero.
    pub fn new(
        language: &str,
        source: impl WordSource + 'static,
        store: impl StatsStore + 'static,
    ) -> Result<Self> {
        Self::with_clock(language, source, store, SystemClock)
    }

    /// Create a manager with an explicit clock
    ///
    /// # Errors
    /// Same as [`SessionManager::new`].
    pub fn with_clock(
        language: &str,
        source: impl WordSource + 'static,
        store: impl StatsStore + 'static,
        clock: impl Clock + 'static,
    ) -> Result<Self> {
        let stats = load_statistics(&store)?;
        debug!(language, games = stats.total_games, "statistics loaded");

        Ok(Self {
            language: language.to_string(),
            source: Box::new(source),
            store: Box::new(store),
            clock: Box::new(clock),
            stats,
            sessions: Vec::new(),
        })
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Start a session
    ///
    /// Practice sessions ignore `max_attempts` and only end on a correct guess.
    ///
    /// # Errors
    /// Any configuration error from [`Game::new`].
    pub fn start_new_game(
        &mut self,
        mode: GameMode,
        max_attempts: u32,
        target: Option<&str>,
    ) -> Result<SessionId> {
        let limit = mode.attempt_limit(max_attempts);
        let game = Game::new(self.source.as_ref(), &self.language, target, limit)?;

        let id = SessionId(self.sessions.len());
        self.sessions.push(Session {
            game,
            mode,
            started_at: self.clock.now(),
            ended_at: None,
            completed: false,
            score: 0,
        });

        debug!(session = id.0, %mode, "session started");
        Ok(id)
    }

    #[must_use]
    pub fn session(&self, id: SessionId) -> Option<&Session> {
        self.sessions.get(id.0)
    }

    fn session_mut(&mut self, id: SessionId) -> Option<&mut Session> {
        self.sessions.get_mut(id.0)
    }

    /// Every session started by this manager, oldest first
    #[must_use]
    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    /// Submit a guess to a session's game
    ///
    /// # Errors
    /// `UnknownSession` for a bad id, otherwise any error from [`Game::guess`].
    pub fn guess(&mut self, id: SessionId, word: &str) -> Result<GuessOutcome> {
        self.session_mut(id)
            .ok_or(GameError::UnknownSession(id.0))?
            .game
            .guess(word)
    }

    /// Finish a session, score it and update statistics
    ///
    /// Returns the score, or [`PRACTICE_SCORE`] for practice sessions, which
    /// leave statistics untouched. A failure to persist statistics is logged
    /// and does not fail the call.
    ///
    /// # Errors
    /// `UnknownSession` for a bad id, `SessionAlreadyFinished` on a second call.
    pub fn finish_game(&mut self, id: SessionId, won: bool) -> Result<i64> {
        let now = self.clock.now();
        let session = self
            .session_mut(id)
            .ok_or(GameError::UnknownSession(id.0))?;

        if session.completed {
            return Err(GameError::SessionAlreadyFinished(id.0));
        }

        session.completed = true;
        session.ended_at = Some(now);

        if !session.mode.is_scored() {
            session.score = PRACTICE_SCORE;
            debug!(session = id.0, "practice session finished");
            return Ok(PRACTICE_SCORE);
        }

        let score = compute_score(session, won);
        session.score = score;
        let attempts = session.game.attempts();

        self.stats.record(
            won,
            attempts,
            u64::try_from(score).unwrap_or_default(),
        );
        info!(session = id.0, won, score, "session finished");

        if let Err(e) = save_statistics(self.store.as_ref(), &self.stats) {
            warn!(error = %e, "failed to save statistics");
        }

        Ok(score)
    }

    /// Snapshot of the current statistics
    #[must_use]
    pub fn stats(&self) -> Statistics {
        self.stats.clone()
    }
}

/// Attempts left (counting the winning one) times 100, plus a speed bonus in timed mode
fn compute_score(session: &Session, won: bool) -> i64 {
    if !won {
        return 0;
    }

    let max = session.game.limit().max().unwrap_or(session.game.attempts());
    let attempts_left = f64::from(max) - f64::from(session.game.attempts()) + 1.0;
    let mut score = attempts_left * ATTEMPT_POINTS;

    match session.mode {
        GameMode::Timed => {
            let elapsed = session.elapsed_seconds().unwrap_or_default();
            score += (TIME_BONUS_MAX - elapsed * TIME_BONUS_PER_SECOND).max(0.0);
        }
        GameMode::Normal | GameMode::Practice => {}
    }

    score.round() as i64
}
