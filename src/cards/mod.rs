//! Card model: pair cards, attribute cards and decks.
//!
//! ## Key Types
//!
//! - `PairCard`: Concentration card (unique id, shared pair key, flags)
//! - `SetCard`: Set card (four ternary features, structural identity)
//! - `Deck`: the card universe of one game, with explicit shuffle
//!
//! `pair_deck` and `set_deck` are the two deck factories.

pub mod attributes;
pub mod deck;
pub mod pair;

pub use attributes::{set_deck, SetCard, Variant, FEATURE_COUNT, SET_DECK_SIZE};
pub use deck::Deck;
pub use pair::{pair_deck, PairCard};
