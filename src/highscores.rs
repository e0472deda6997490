//! Local high score table
//!
//! Keeps the top 10 runs in memory. [`LeaderboardReporter`] plugs the table
//! into the score dispatcher as a reporter.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::error::ReportError;
use crate::reporter::ScoreReporter;

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// Longest accepted username, in characters
pub const MAX_USERNAME_LEN: usize = 24;

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub username: String,
    pub score: u64,
}

/// High score leaderboard, sorted by score descending
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Check if a score qualifies for the leaderboard
    pub fn qualifies(&self, score: u64) -> bool {
        if score == 0 {
            return false;
        }
        if self.entries.len() < MAX_HIGH_SCORES {
            return true;
        }
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Rank a score would achieve (1-indexed, None if it doesn't qualify)
    pub fn potential_rank(&self, score: u64) -> Option<usize> {
        if !self.qualifies(score) {
            return None;
        }
        let rank = self.entries.iter().position(|e| score > e.score);
        Some(rank.unwrap_or(self.entries.len()) + 1)
    }

    /// Add a score if it qualifies. Returns the rank achieved (1-indexed).
    ///
    /// Ties keep the earlier run ahead.
    pub fn add_score(&mut self, username: &str, score: u64) -> Option<usize> {
        let rank = self.potential_rank(score)?;
        self.entries.insert(
            rank - 1,
            HighScoreEntry {
                username: username.to_string(),
                score,
            },
        );
        self.entries.truncate(MAX_HIGH_SCORES);
        Some(rank)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }

    /// Best listed score for one player
    pub fn best_for(&self, username: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|e| e.username == username)
            .map(|e| e.score)
    }
}

/// [`ScoreReporter`] that records into a shared [`HighScores`] table
#[derive(Debug, Default)]
pub struct LeaderboardReporter {
    scores: Mutex<HighScores>,
}

impl LeaderboardReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the current table
    pub fn scores(&self) -> HighScores {
        self.scores.lock().clone()
    }
}

impl ScoreReporter for LeaderboardReporter {
    fn submit(&self, username: &str, score: u64) -> Result<(), ReportError> {
        let name = username.trim();
        if name.is_empty() {
            return Err(ReportError::Rejected("empty username".into()));
        }
        if name.chars().count() > MAX_USERNAME_LEN {
            return Err(ReportError::Rejected(format!(
                "username longer than {} characters",
                MAX_USERNAME_LEN
            )));
        }
        match self.scores.lock().add_score(name, score) {
            Some(rank) => log::info!("{} placed #{} with {}", name, rank, score),
            None => log::debug!("{} did not place with {}", name, score),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_never_qualifies() {
        let scores = HighScores::new();
        assert!(!scores.qualifies(0));
        assert!(scores.qualifies(1));
    }

    #[test]
    fn test_sorted_insert_and_rank() {
        let mut scores = HighScores::new();
        assert_eq!(scores.add_score("a", 5), Some(1));
        assert_eq!(scores.add_score("b", 9), Some(1));
        assert_eq!(scores.add_score("c", 7), Some(2));
        // Tie goes behind the existing entry
        assert_eq!(scores.add_score("d", 7), Some(3));

        let order: Vec<_> = scores.entries.iter().map(|e| e.username.as_str()).collect();
        assert_eq!(order, ["b", "c", "d", "a"]);
        assert_eq!(scores.top_score(), Some(9));
        assert_eq!(scores.best_for("c"), Some(7));
        assert_eq!(scores.best_for("z"), None);
    }

    #[test]
    fn test_full_table() {
        let mut scores = HighScores::new();
        for s in 1..=10 {
            scores.add_score("p", s * 10);
        }
        assert_eq!(scores.entries.len(), MAX_HIGH_SCORES);
        assert!(!scores.qualifies(10));
        assert_eq!(scores.add_score("late", 5), None);
        assert_eq!(scores.potential_rank(55), Some(6));
        assert_eq!(scores.add_score("mid", 55), Some(6));
        assert_eq!(scores.entries.len(), MAX_HIGH_SCORES);
        assert_eq!(scores.entries.last().map(|e| e.score), Some(20));
    }

    #[test]
    fn test_reporter_validates_username() {
        let reporter = LeaderboardReporter::new();
        assert!(matches!(
            reporter.submit("   ", 4),
            Err(ReportError::Rejected(_))
        ));
        assert!(reporter.submit(&"x".repeat(MAX_USERNAME_LEN + 1), 4).is_err());
        assert!(reporter.submit(" ada ", 4).is_ok());
        assert_eq!(reporter.scores().best_for("ada"), Some(4));
    }
}
