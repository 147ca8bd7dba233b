//! Card identification.
//!
//! Every card has a unique `CardId`. Concentration cards additionally carry
//! a `PairKey` shared by the two cards of a pair.
//!
//! ## Allocation
//!
//! Ids come from an `IdSequence` owned by the caller and threaded through
//! deck construction. The sequence is never reset, so several games built
//! from the same sequence never share an id.
//!
//! ```
//! use matching_engine::core::IdSequence;
//!
//! let mut ids = IdSequence::new();
//!
//! let key = ids.next_pair_key();
//! let a = ids.next_card_id();
//! let b = ids.next_card_id();
//!
//! assert_ne!(a, b);
//! assert_eq!(key.raw() + 1, a.raw());
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for CardId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Matching key shared by both cards of a Concentration pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PairKey(pub u32);

impl PairKey {
    /// Get the raw key value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PairKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pair({})", self.0)
    }
}

/// Monotonically increasing id counter.
///
/// Card ids and pair keys are drawn from the same counter, so every value
/// handed out by one sequence is distinct.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdSequence {
    next: u32,
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSequence {
    /// Create a sequence whose first value is 1.
    #[must_use]
    pub const fn new() -> Self {
        Self { next: 1 }
    }

    /// Create a sequence starting at `first`.
    #[must_use]
    pub const fn starting_at(first: u32) -> Self {
        Self { next: first }
    }

    /// The value the next allocation will return.
    #[must_use]
    pub const fn peek(&self) -> u32 {
        self.next
    }

    fn advance(&mut self) -> u32 {
        let value = self.next;
        self.next = self
            .next
            .checked_add(1)
            .expect("id sequence exhausted");
        value
    }

    /// Allocate a new card ID.
    pub fn next_card_id(&mut self) -> CardId {
        CardId(self.advance())
    }

    /// Allocate a new pair key.
    pub fn next_pair_key(&mut self) -> PairKey {
        PairKey(self.advance())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_is_monotonic() {
        let mut ids = IdSequence::new();

        let a = ids.next_card_id();
        let b = ids.next_card_id();
        let c = ids.next_card_id();

        assert_eq!(a, CardId(1));
        assert_eq!(b, CardId(2));
        assert_eq!(c, CardId(3));
        assert_eq!(ids.peek(), 4);
    }

    #[test]
    fn test_keys_and_ids_share_counter() {
        let mut ids = IdSequence::starting_at(10);

        let key = ids.next_pair_key();
        let card = ids.next_card_id();

        assert_eq!(key.raw(), 10);
        assert_eq!(card.raw(), 11);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", CardId(42)), "Card(42)");
        assert_eq!(format!("{}", PairKey(7)), "Pair(7)");
    }

    #[test]
    #[should_panic(expected = "exhausted")]
    fn test_exhausted_sequence_panics() {
        let mut ids = IdSequence::starting_at(u32::MAX);
        ids.next_card_id();
    }

    #[test]
    fn test_serialization() {
        let id = CardId(123);
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: CardId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
