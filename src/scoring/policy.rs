//! Score events, policies and bookkeeping.

use im::Vector;
use serde::{Deserialize, Serialize};

/// An outcome that moves the score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScoreEvent {
    /// A valid match was found.
    MatchFound,
    /// An evaluated group did not match.
    MismatchFound,
    /// A card that was already seen took part in a mismatch.
    RepeatedMismatchPenalty,
}

/// Maps score events to score deltas.
///
/// Games are generic over the policy, so a variant can swap in its own
/// rules without touching the engine.
pub trait ScoringPolicy {
    /// Score change for `event`.
    fn delta(&self, event: ScoreEvent) -> i64;
}

/// Fixed table of deltas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreTable {
    pub match_found: i64,
    pub mismatch_found: i64,
    pub repeated_mismatch_penalty: i64,
}

impl ScoreTable {
    /// Set rules: +3 for a set, -5 for a wrong guess.
    #[must_use]
    pub const fn set_game() -> Self {
        Self {
            match_found: 3,
            mismatch_found: -5,
            repeated_mismatch_penalty: 0,
        }
    }

    /// Concentration rules: +2 per pair, -1 per already-seen card in a mismatch.
    #[must_use]
    pub const fn concentration() -> Self {
        Self {
            match_found: 2,
            mismatch_found: 0,
            repeated_mismatch_penalty: -1,
        }
    }
}

impl ScoringPolicy for ScoreTable {
    fn delta(&self, event: ScoreEvent) -> i64 {
        match event {
            ScoreEvent::MatchFound => self.match_found,
            ScoreEvent::MismatchFound => self.mismatch_found,
            ScoreEvent::RepeatedMismatchPenalty => self.repeated_mismatch_penalty,
        }
    }
}

/// One applied score change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub event: ScoreEvent,
    pub delta: i64,
}

/// Running score plus the history of every change.
///
/// History uses `im::Vector` so cloning a game stays cheap.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScoreKeeper {
    score: i64,
    history: Vector<ScoreRecord>,
}

impl ScoreKeeper {
    /// Start at zero with no history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply `event` under `policy`, returning the delta.
    pub fn apply<P: ScoringPolicy + ?Sized>(&mut self, event: ScoreEvent, policy: &P) -> i64 {
        let delta = policy.delta(event);
        self.score += delta;
        self.history.push_back(ScoreRecord { event, delta });
        delta
    }

    /// Current score. May be negative.
    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }

    /// Every applied change, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<ScoreRecord> {
        &self.history
    }

    /// Number of times `event` was applied.
    #[must_use]
    pub fn count(&self, event: ScoreEvent) -> usize {
        self.history.iter().filter(|r| r.event == event).count()
    }
}
