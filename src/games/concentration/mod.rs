//! Concentration: the pair-matching memory game.
//!
//! All cards start face down. Each turn turns up two cards:
//! - If they share a pair key they are matched and stay out of play
//! - Otherwise they stay up until the next choice turns them back down
//! - Mismatching a card that was already seen costs points
//!
//! Score and flip count are tracked per game.

mod game;

pub use game::{ChooseOutcome, ConcentrationBuilder, ConcentrationGame};
