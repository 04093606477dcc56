//! Error types shared by the engine, word lists and session manager

use thiserror::Error;

/// Coarse classification of [`GameError`] used by callers to decide how to recover
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad construction input (target word, language, attempt limit)
    Configuration,
    /// Bad player input; the game state is unchanged and the caller should re-prompt
    Input,
    /// Statistics store failure
    Persistence,
}

#[derive(Debug, Error)]
pub enum GameError {
    #[error("Target word should be a non-empty word, got {0:?}")]
    InvalidTarget(String),

    #[error("Target word '{word}' is not in the '{language}' word list")]
    UnknownTarget { word: String, language: String },

    #[error("Could not load word list for language: {language}")]
    WordListUnavailable {
        language: String,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("Word list for language '{0}' is empty")]
    EmptyWordList(String),

    #[error("Max attempts must be at least 1")]
    InvalidAttemptLimit,

    #[error("Game already completed.")]
    GameCompleted,

    #[error("Guess must be a non-empty word")]
    InvalidGuess,

    #[error("Guess must be exactly {expected} letters, got {actual}.")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Guess '{0}' is not a valid word")]
    UnknownWord(String),

    #[error("Unknown session #{0}")]
    UnknownSession(usize),

    #[error("Session #{0} is already finished")]
    SessionAlreadyFinished(usize),

    #[error("Stored statistics are corrupt: {0}")]
    CorruptStats(#[from] serde_json::Error),

    #[error("Statistics store error: {0}")]
    Io(#[from] std::io::Error),
}

impl GameError {
    /// Which recovery class this error belongs to
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidTarget(_)
            | Self::UnknownTarget { .. }
            | Self::WordListUnavailable { .. }
            | Self::EmptyWordList(_)
            | Self::InvalidAttemptLimit => ErrorKind::Configuration,
            Self::GameCompleted
            | Self::InvalidGuess
            | Self::LengthMismatch { .. }
            | Self::UnknownWord(_)
            | Self::UnknownSession(_)
            | Self::SessionAlreadyFinished(_) => ErrorKind::Input,
            Self::CorruptStats(_) | Self::Io(_) => ErrorKind::Persistence,
        }
    }

    pub(crate) fn unavailable(language: &str, source: Option<std::io::Error>) -> Self {
        Self::WordListUnavailable {
            language: language.to_string(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        let err = GameError::unavailable("xx", None);
        assert!(err.to_string().contains("xx"));

        let err = GameError::LengthMismatch {
            expected: 5,
            actual: 3,
        };
        assert!(err.to_string().contains("exactly 5 letters"));
    }

    #[test]
    fn kinds_follow_taxonomy() {
        assert_eq!(
            GameError::InvalidTarget(String::new()).kind(),
            ErrorKind::Configuration
        );
        assert_eq!(GameError::GameCompleted.kind(), ErrorKind::Input);
        assert_eq!(
            GameError::UnknownWord("zzzzz".into()).kind(),
            ErrorKind::Input
        );

        let json_err = serde_json::from_str::<u32>("{").unwrap_err();
        assert_eq!(GameError::from(json_err).kind(), ErrorKind::Persistence);
    }
}
