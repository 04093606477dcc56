//! Aggregate player statistics

use serde::{Deserialize, Serialize, Serializer};

/// Totals across all finished, non-practice sessions
///
/// Serialized with camelCase keys in declaration order. `averageAttempts`
/// may be absent from stored records; it is derived from the totals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_games: u64,
    pub total_wins: u64,
    pub total_score: u64,
    pub total_attempts: u64,
    #[serde(default, serialize_with = "serialize_average")]
    pub average_attempts: f64,
    pub current_streak: u64,
    pub best_streak: u64,
}

impl Statistics {
    /// Fold one finished game into the totals
    pub fn record(&mut self, won: bool, attempts: u32, score: u64) {
        if won {
            self.total_wins += 1;
            self.current_streak += 1;
            self.best_streak = self.best_streak.max(self.current_streak);
        } else {
            self.current_streak = 0;
        }

        self.total_score += score;
        self.total_games += 1;
        self.total_attempts += u64::from(attempts);
        self.refresh_average();
    }

    /// Recompute `average_attempts` from the totals
    pub fn refresh_average(&mut self) {
        self.average_attempts = if self.total_games == 0 {
            0.0
        } else {
            round2(self.total_attempts as f64 / self.total_games as f64)
        };
    }

    /// Fraction of games won, 0 when nothing has been played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.total_wins as f64 / self.total_games as f64
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Whole averages are written as integers (`4`, not `4.0`)
#[allow(clippy::trivially_copy_pass_by_ref)]
fn serialize_average<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract().abs() < f64::EPSILON && (0.0..=u64::MAX as f64).contains(value) {
        serializer.serialize_u64(*value as u64)
    } else {
        serializer.serialize_f64(*value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_win_then_loss() {
        let mut stats = Statistics::default();
        stats.record(true, 3, 400);
        assert_eq!(stats.total_wins, 1);
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.best_streak, 1);

        stats.record(false, 6, 0);
        assert_eq!(stats.total_games, 2);
        assert_eq!(stats.current_streak, 0);
        assert_eq!(stats.best_streak, 1);
        assert_eq!(stats.total_score, 400);
        assert!((stats.win_rate() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn average_rounds_to_two_places() {
        let mut stats = Statistics::default();
        stats.record(true, 1, 600);
        stats.record(true, 1, 600);
        stats.record(false, 2, 0);
        // 4 / 3 = 1.333...
        assert!((stats.average_attempts - 1.33).abs() < f64::EPSILON);
    }

    #[test]
    fn serializes_with_stable_keys() {
        let stats = Statistics {
            total_games: 5,
            total_wins: 3,
            total_score: 450,
            total_attempts: 20,
            average_attempts: 4.0,
            current_streak: 2,
            best_streak: 4,
        };
        let json = serde_json::to_string_pretty(&stats).unwrap();

        let keys: Vec<&str> = json
            .lines()
            .filter_map(|line| line.trim().strip_prefix('"'))
            .filter_map(|rest| rest.split('"').next())
            .collect();
        assert_eq!(
            keys,
            vec![
                "totalGames",
                "totalWins",
                "totalScore",
                "totalAttempts",
                "averageAttempts",
                "currentStreak",
                "bestStreak"
            ]
        );
        assert!(json.contains("\n  \"totalGames\": 5"));
        assert!(json.contains("\"averageAttempts\": 4,"));
    }

    #[test]
    fn fractional_average_keeps_decimals() {
        let mut stats = Statistics::default();
        stats.record(true, 3, 400);
        stats.record(true, 4, 300);
        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains("\"averageAttempts\":3.5"));
    }

    #[test]
    fn deserializes_record_without_average() {
        let json = r#"{"totalGames":2,"totalWins":1,"totalScore":500,"totalAttempts":8,
            "currentStreak":0,"bestStreak":1}"#;
        let mut stats: Statistics = serde_json::from_str(json).unwrap();
        assert!(stats.average_attempts.abs() < f64::EPSILON);

        stats.refresh_average();
        assert!((stats.average_attempts - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn deserializes_integer_average() {
        let json = r#"{"totalGames":5,"totalWins":3,"totalScore":450,"totalAttempts":20,
            "averageAttempts":4,"currentStreak":2,"bestStreak":4}"#;
        let stats: Statistics = serde_json::from_str(json).unwrap();
        assert_eq!(stats.total_games, 5);
        assert!((stats.average_attempts - 4.0).abs() < f64::EPSILON);
    }
}
