//! Set: the three-card attribute-matching game.
//!
//! The deck holds one card per combination of four ternary features.
//! Cards are drawn at random into the open layout; three open cards form a
//! set when every feature is all-same or all-different across them.
//! - A found set leaves play permanently and scores
//! - A wrong guess costs points and leaves the cards open

mod game;

pub use game::{SetGame, SetGameBuilder};
