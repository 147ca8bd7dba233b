//! Pending card selection.
//!
//! A `Selection` accumulates the cards a player has picked before they are
//! evaluated together. Picking a selected card again deselects it.
//!
//! ```
//! use matching_engine::core::Selection;
//!
//! let mut selection = Selection::new(3);
//! assert!(selection.toggle(7));
//! assert!(selection.toggle(9));
//! assert!(!selection.toggle(7)); // deselected
//! assert_eq!(selection.as_slice(), &[9]);
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Up to `capacity` distinct keys, in pick order.
///
/// SmallVec keeps the common sizes (2 and 3) off the heap.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection<K> {
    picks: SmallVec<[K; 3]>,
    capacity: usize,
}

impl<K: Copy + PartialEq> Selection<K> {
    /// Create an empty selection holding at most `capacity` keys.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "selection capacity must be positive");
        Self {
            picks: SmallVec::new(),
            capacity,
        }
    }

    /// Select `key`, or deselect it if already selected.
    ///
    /// Returns whether `key` is selected afterwards. Selecting into a full
    /// selection is refused and returns false.
    pub fn toggle(&mut self, key: K) -> bool {
        if let Some(pos) = self.picks.iter().position(|&k| k == key) {
            self.picks.remove(pos);
            return false;
        }
        if self.is_full() {
            return false;
        }
        self.picks.push(key);
        true
    }

    /// Check if `key` is selected.
    #[must_use]
    pub fn contains(&self, key: K) -> bool {
        self.picks.contains(&key)
    }

    /// Number of selected keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.picks.len()
    }

    /// Check if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }

    /// Maximum number of keys.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Check if the selection is ready for evaluation.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.picks.len() >= self.capacity
    }

    /// Remove every key for which `keep` returns false.
    pub fn retain(&mut self, mut keep: impl FnMut(K) -> bool) {
        self.picks.retain(|k| keep(*k));
    }

    /// Deselect everything.
    pub fn clear(&mut self) {
        self.picks.clear();
    }

    /// Take the selected keys, leaving the selection empty.
    pub fn take(&mut self) -> SmallVec<[K; 3]> {
        std::mem::take(&mut self.picks)
    }

    /// Selected keys in pick order.
    #[must_use]
    pub fn as_slice(&self) -> &[K] {
        &self.picks
    }
}
