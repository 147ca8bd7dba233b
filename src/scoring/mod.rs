//! Scoring: events, pluggable policies and the running score.
//!
//! ## Key Types
//!
//! - `ScoreEvent`: MatchFound, MismatchFound, RepeatedMismatchPenalty
//! - `ScoringPolicy`: event -> delta, implemented per variant
//! - `ScoreTable`: the stock policy, configurable from serde
//! - `ScoreKeeper`: score plus change history

pub mod policy;

pub use policy::{ScoreEvent, ScoreKeeper, ScoreRecord, ScoreTable, ScoringPolicy};
