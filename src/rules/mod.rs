//! Matching rules and the shared game trait.
//!
//! Games implement `MatchingGame` to expose score and progress, and use a
//! `MatchRule` to decide what counts as a match:
//! - `PairRule`: two cards with the same pair key
//! - `SetRule`: three cards, each feature all-same or all-distinct

pub mod engine;
pub mod matching;

pub use engine::{GameStatus, MatchingGame};
pub use matching::{all_same_or_all_distinct, find_match, MatchRule, PairRule, SetRule};
