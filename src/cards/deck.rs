//! The card universe of one game instance.
//!
//! A `Deck` is built once and never gains cards. Shuffling is always an
//! explicit call; nothing shuffles behind the caller's back.

use serde::{Deserialize, Serialize};

use crate::core::rng::GameRng;

/// Ordered collection of cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck<C> {
    cards: Vec<C>,
}

impl<C> Deck<C> {
    /// Wrap a list of cards.
    #[must_use]
    pub fn new(cards: Vec<C>) -> Self {
        Self { cards }
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the deck has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over the cards in order.
    pub fn iter(&self) -> std::slice::Iter<'_, C> {
        self.cards.iter()
    }

    /// Cards in order.
    #[must_use]
    pub fn as_slice(&self) -> &[C] {
        &self.cards
    }

    /// Unwrap into the card list.
    #[must_use]
    pub fn into_vec(self) -> Vec<C> {
        self.cards
    }

    /// Put the cards in a uniformly random order.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Shuffled copy, for builder-style use.
    #[must_use]
    pub fn shuffled(mut self, rng: &mut GameRng) -> Self {
        self.shuffle(rng);
        self
    }
}

impl<C> IntoIterator for Deck<C> {
    type Item = C;
    type IntoIter = std::vec::IntoIter<C>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

impl<'a, C> IntoIterator for &'a Deck<C> {
    type Item = &'a C;
    type IntoIter = std::slice::Iter<'a, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
