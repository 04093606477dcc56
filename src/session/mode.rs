//! Game modes

use crate::core::AttemptLimit;
use std::fmt;
use std::str::FromStr;

/// How a session is played and scored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameMode {
    /// Scored by attempts left
    #[default]
    Normal,
    /// Scored by attempts left plus a speed bonus
    Timed,
    /// Unlimited attempts, never scored or recorded
    Practice,
}

impl GameMode {
    /// All modes, in display order
    pub const ALL: [Self; 3] = [Self::Normal, Self::Timed, Self::Practice];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Timed => "timed",
            Self::Practice => "practice",
        }
    }

    /// Attempt budget for a game in this mode; practice ignores `max_attempts`
    #[must_use]
    pub const fn attempt_limit(self, max_attempts: u32) -> AttemptLimit {
        match self {
            Self::Normal | Self::Timed => AttemptLimit::Limited(max_attempts),
            Self::Practice => AttemptLimit::Unlimited,
        }
    }

    /// Whether finished sessions update statistics
    #[must_use]
    pub const fn is_scored(self) -> bool {
        match self {
            Self::Normal | Self::Timed => true,
            Self::Practice => false,
        }
    }
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GameMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown mode '{s}' (expected normal, timed or practice)"))
    }
}
