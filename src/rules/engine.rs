//! Common surface of the matching games.
//!
//! Both variants implement `MatchingGame`, so a front end can show score
//! and progress without knowing which game it is driving.

use im::Vector;

use crate::scoring::ScoreRecord;

/// Progress of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    /// Moves remain.
    InProgress,
    /// Nothing left to match.
    Complete {
        /// Final score.
        score: i64,
    },
}

impl GameStatus {
    /// Check if the game is over.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self, GameStatus::Complete { .. })
    }
}

/// Game trait.
///
/// ## Implementation Notes
///
/// - `score`: running total, may be negative
/// - `score_history`: one record per applied score event
/// - `status`: `Complete` once no further match is possible
pub trait MatchingGame {
    /// Card type the game deals in.
    type Card;

    /// Current score.
    fn score(&self) -> i64;

    /// Every score change so far, oldest first.
    fn score_history(&self) -> &Vector<ScoreRecord>;

    /// Whether play can continue.
    fn status(&self) -> GameStatus;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_status() {
        assert!(!GameStatus::InProgress.is_complete());
        assert!(GameStatus::Complete { score: -4 }.is_complete());
    }
}
