//! # matching-engine
//!
//! A card-matching game engine with two variants: pair matching
//! (Concentration) and three-card attribute matching (Set).
//!
//! ## Design Principles
//!
//! 1. **Presentation-Free**: The engine owns the game state and rules only.
//!    Front ends read state through accessors and drive it through a few
//!    operations; they never hold game logic.
//!
//! 2. **Explicit Inputs**: Ids come from a caller-owned `IdSequence`,
//!    randomness from a seeded `GameRng`. No ambient global state.
//!
//! 3. **Pluggable Scoring**: Games are generic over a `ScoringPolicy`.
//!
//! ## Error Model
//!
//! - Caller bugs (out-of-range card index) panic
//! - Stale or invalid requests (evaluating a card that is not open) return
//!   `GameError` and change nothing
//! - Running out of cards is normal and returns fewer cards
//!
//! ## Modules
//!
//! - `core`: Ids, RNG, errors, configuration, selection
//! - `cards`: Pair and attribute cards, decks
//! - `zones`: Deck / open / matched partition
//! - `scoring`: Score events, policies, running score
//! - `rules`: Matching predicates and the `MatchingGame` trait
//! - `games`: Concentration and Set

pub mod core;
pub mod cards;
pub mod zones;
pub mod scoring;
pub mod rules;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    CardId, PairKey, IdSequence,
    GameRng, GameRngState,
    GameError, Result,
    ConcentrationConfig, SetConfig,
    Selection,
};

pub use crate::cards::{Deck, PairCard, SetCard, Variant, pair_deck, set_deck};

pub use crate::zones::{CardZones, Zone};

pub use crate::scoring::{ScoreEvent, ScoreKeeper, ScoreRecord, ScoreTable, ScoringPolicy};

pub use crate::rules::{GameStatus, MatchingGame, MatchRule, PairRule, SetRule, find_match};

pub use crate::games::concentration::{ChooseOutcome, ConcentrationBuilder, ConcentrationGame};
pub use crate::games::set::{SetGame, SetGameBuilder};
