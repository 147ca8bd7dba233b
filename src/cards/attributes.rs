//! Attribute cards for the Set variant.
//!
//! A `SetCard` is four independent features, each taking one of three
//! variants. The features are generic; a classic deck reads them as
//! color, shape, shading and number, but the engine never interprets them.
//!
//! Equality and hashing are structural, so the tuple of variants is the
//! card's identity and there is exactly one card per combination.

use serde::{Deserialize, Serialize};

use super::deck::Deck;
use crate::core::error::{GameError, Result};

/// Number of features on a card.
pub const FEATURE_COUNT: usize = 4;

/// Cards in a complete deck (3^4).
pub const SET_DECK_SIZE: usize = 81;

/// One of the three values a feature can take.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Variant {
    V1 = 1,
    V2 = 2,
    V3 = 3,
}

impl Variant {
    /// All variants in ascending order.
    pub const ALL: [Variant; 3] = [Variant::V1, Variant::V2, Variant::V3];

    /// Numeric value (1, 2 or 3).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Variant {
    type Error = GameError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            1 => Ok(Variant::V1),
            2 => Ok(Variant::V2),
            3 => Ok(Variant::V3),
            other => Err(GameError::InvalidVariant(other)),
        }
    }
}

/// A card identified by its four feature variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SetCard {
    features: [Variant; FEATURE_COUNT],
}

impl SetCard {
    /// Create a card from its four features.
    #[must_use]
    pub const fn new(f1: Variant, f2: Variant, f3: Variant, f4: Variant) -> Self {
        Self {
            features: [f1, f2, f3, f4],
        }
    }

    /// Create a card from raw values in `1..=3`.
    ///
    /// ```
    /// use matching_engine::cards::SetCard;
    ///
    /// let card = SetCard::from_values([1, 2, 3, 1]).unwrap();
    /// assert_eq!(card.to_string(), "[1, 2, 3, 1]");
    /// assert!(SetCard::from_values([0, 1, 1, 1]).is_err());
    /// ```
    pub fn from_values(values: [u8; FEATURE_COUNT]) -> Result<Self> {
        Ok(Self::new(
            Variant::try_from(values[0])?,
            Variant::try_from(values[1])?,
            Variant::try_from(values[2])?,
            Variant::try_from(values[3])?,
        ))
    }

    /// Variant of feature `index` (0-based).
    ///
    /// Panics if `index >= FEATURE_COUNT`.
    #[must_use]
    pub fn feature(&self, index: usize) -> Variant {
        self.features[index]
    }

    /// All four features.
    #[must_use]
    pub fn features(&self) -> &[Variant; FEATURE_COUNT] {
        &self.features
    }
}

impl std::fmt::Display for SetCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c, d] = self.features;
        write!(f, "[{}, {}, {}, {}]", a.value(), b.value(), c.value(), d.value())
    }
}

/// Build the complete 81-card deck, in lexicographic feature order.
#[must_use]
pub fn set_deck() -> Deck<SetCard> {
    let mut cards = Vec::with_capacity(SET_DECK_SIZE);
    for f1 in Variant::ALL {
        for f2 in Variant::ALL {
            for f3 in Variant::ALL {
                for f4 in Variant::ALL {
                    cards.push(SetCard::new(f1, f2, f3, f4));
                }
            }
        }
    }
    Deck::new(cards)
}
