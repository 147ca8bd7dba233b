//! Pair cards for the Concentration variant.
//!
//! Two distinct cards share each `PairKey`; a card's own `CardId` is unique.
//! The face-up and matched flags are part of the engine's state for this
//! variant.

use serde::{Deserialize, Serialize};

use super::deck::Deck;
use crate::core::error::{GameError, Result};
use crate::core::id::{CardId, IdSequence, PairKey};

/// A Concentration card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PairCard {
    /// Unique identity of this card.
    pub id: CardId,

    /// Key shared with the card's partner.
    pub pair_key: PairKey,

    /// Is the card currently showing?
    pub is_face_up: bool,

    /// Has the card's pair been found? Matched cards are out of play.
    pub is_matched: bool,
}

impl PairCard {
    /// Create a face-down, unmatched card.
    #[must_use]
    pub const fn new(id: CardId, pair_key: PairKey) -> Self {
        Self {
            id,
            pair_key,
            is_face_up: false,
            is_matched: false,
        }
    }

    /// Check if two cards form a pair.
    #[must_use]
    pub fn pairs_with(&self, other: &PairCard) -> bool {
        self.id != other.id && self.pair_key == other.pair_key
    }
}

/// Build `2 * pairs` cards, each pair adjacent and sharing a fresh key.
///
/// Ids come from `ids`, which the caller keeps across games.
///
/// ```
/// use matching_engine::cards::pair_deck;
/// use matching_engine::core::IdSequence;
///
/// let mut ids = IdSequence::new();
/// let deck = pair_deck(6, &mut ids).unwrap();
/// assert_eq!(deck.len(), 12);
///
/// assert!(pair_deck(0, &mut ids).is_err());
/// ```
pub fn pair_deck(pairs: usize, ids: &mut IdSequence) -> Result<Deck<PairCard>> {
    if pairs == 0 {
        return Err(GameError::InvalidPairCount(pairs));
    }

    let mut cards = Vec::with_capacity(pairs * 2);
    for _ in 0..pairs {
        let key = ids.next_pair_key();
        cards.push(PairCard::new(ids.next_card_id(), key));
        cards.push(PairCard::new(ids.next_card_id(), key));
    }
    Ok(Deck::new(cards))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::{FxHashMap, FxHashSet};

    #[test]
    fn test_pair_deck_shape() {
        let mut ids = IdSequence::new();
        let deck = pair_deck(6, &mut ids).unwrap();

        assert_eq!(deck.len(), 12);

        let mut key_counts: FxHashMap<PairKey, usize> = FxHashMap::default();
        for card in &deck {
            *key_counts.entry(card.pair_key).or_default() += 1;
        }
        assert_eq!(key_counts.len(), 6);
        assert!(key_counts.values().all(|&n| n == 2));

        let unique_ids: FxHashSet<_> = deck.iter().map(|c| c.id).collect();
        assert_eq!(unique_ids.len(), 12);
    }

    #[test]
    fn test_cards_start_hidden() {
        let mut ids = IdSequence::new();
        let deck = pair_deck(2, &mut ids).unwrap();
        assert!(deck.iter().all(|c| !c.is_face_up && !c.is_matched));
    }

    #[test]
    fn test_zero_pairs_rejected() {
        let mut ids = IdSequence::new();
        assert_eq!(pair_deck(0, &mut ids), Err(GameError::InvalidPairCount(0)));
        assert_eq!(ids.peek(), 1); // nothing allocated
    }

    #[test]
    fn test_sequence_not_reset_between_decks() {
        let mut ids = IdSequence::new();
        let first = pair_deck(3, &mut ids).unwrap();
        let second = pair_deck(3, &mut ids).unwrap();

        let first_keys: FxHashSet<_> = first.iter().map(|c| c.pair_key).collect();
        let second_keys: FxHashSet<_> = second.iter().map(|c| c.pair_key).collect();
        assert!(first_keys.is_disjoint(&second_keys));

        let first_ids: FxHashSet<_> = first.iter().map(|c| c.id).collect();
        assert!(second.iter().all(|c| !first_ids.contains(&c.id)));
    }

    #[test]
    fn test_pairs_with() {
        let mut ids = IdSequence::new();
        let cards = pair_deck(2, &mut ids).unwrap().into_vec();

        assert!(cards[0].pairs_with(&cards[1]));
        assert!(!cards[0].pairs_with(&cards[0]));
        assert!(!cards[0].pairs_with(&cards[2]));
    }
}
