//! Zone manager for card locations and movement.
//!
//! `CardZones` tracks which zone every card is in. It supports:
//! - Lookup of a card's zone by key
//! - Movement between zones
//! - Uniform random removal from a zone
//! - Zone iteration in arrival order
//!
//! A card is always in exactly one zone, so the zones partition the cards.

use std::hash::Hash;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::rng::GameRng;

/// Where a card currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    /// Not yet drawn.
    Deck,
    /// Drawn and available for evaluation.
    Open,
    /// Part of a found match; permanently out of play.
    Matched,
}

impl Zone {
    /// All zones.
    pub const ALL: [Zone; 3] = [Zone::Deck, Zone::Open, Zone::Matched];

    const fn slot(self) -> usize {
        match self {
            Zone::Deck => 0,
            Zone::Open => 1,
            Zone::Matched => 2,
        }
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Zone::Deck => "deck",
            Zone::Open => "open",
            Zone::Matched => "matched",
        };
        f.write_str(name)
    }
}

/// Manages card locations across zones.
///
/// ## Usage
///
/// ```
/// use matching_engine::zones::{CardZones, Zone};
///
/// let mut zones = CardZones::new([10, 11, 12]);
/// assert_eq!(zones.len(Zone::Deck), 3);
///
/// zones.move_to(11, Zone::Open);
/// assert_eq!(zones.zone_of(11), Some(Zone::Open));
/// assert_eq!(zones.cards_in(Zone::Open), &[11]);
/// ```
#[derive(Clone, Debug)]
pub struct CardZones<K> {
    /// Card locations: key -> zone
    locations: FxHashMap<K, Zone>,

    /// Members of each zone, indexed by `Zone::slot`.
    members: [Vec<K>; 3],
}

impl<K: Copy + Eq + Hash> CardZones<K> {
    /// Put every card into the deck, in the given order.
    ///
    /// Panics if a key appears twice.
    pub fn new(cards: impl IntoIterator<Item = K>) -> Self {
        let mut locations = FxHashMap::default();
        let mut deck = Vec::new();
        for card in cards {
            let previous = locations.insert(card, Zone::Deck);
            assert!(previous.is_none(), "card added to zones twice");
            deck.push(card);
        }
        Self {
            locations,
            members: [deck, Vec::new(), Vec::new()],
        }
    }

    /// Get the zone a card is in, or `None` for an unknown card.
    #[must_use]
    pub fn zone_of(&self, card: K) -> Option<Zone> {
        self.locations.get(&card).copied()
    }

    /// Check if a card is in a specific zone.
    #[must_use]
    pub fn is_in(&self, card: K, zone: Zone) -> bool {
        self.locations.get(&card) == Some(&zone)
    }

    /// Cards in a zone, in the order they arrived.
    #[must_use]
    pub fn cards_in(&self, zone: Zone) -> &[K] {
        &self.members[zone.slot()]
    }

    /// Number of cards in a zone.
    #[must_use]
    pub fn len(&self, zone: Zone) -> usize {
        self.members[zone.slot()].len()
    }

    /// Check if a zone is empty.
    #[must_use]
    pub fn is_empty(&self, zone: Zone) -> bool {
        self.members[zone.slot()].is_empty()
    }

    /// Total number of cards tracked.
    #[must_use]
    pub fn total(&self) -> usize {
        self.locations.len()
    }

    /// Move a card to `zone`, appending it to the zone's order.
    ///
    /// Returns the previous zone, or `None` if the card is unknown.
    pub fn move_to(&mut self, card: K, zone: Zone) -> Option<Zone> {
        let old = self.locations.get(&card).copied()?;
        if old == zone {
            return Some(old);
        }

        self.members[old.slot()].retain(|&k| k != card);
        self.members[zone.slot()].push(card);
        self.locations.insert(card, zone);

        Some(old)
    }

    /// Move a uniformly random card out of `from` and into `to`.
    ///
    /// Returns `None` when `from` is empty.
    pub fn move_random(&mut self, from: Zone, to: Zone, rng: &mut GameRng) -> Option<K> {
        let source = &mut self.members[from.slot()];
        if source.is_empty() {
            return None;
        }

        let index = rng.gen_range_usize(0..source.len());
        let card = source.swap_remove(index);
        self.members[to.slot()].push(card);
        self.locations.insert(card, to);

        Some(card)
    }
}
