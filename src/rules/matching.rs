//! Matching predicates.
//!
//! A `MatchRule` decides whether a group of cards of a fixed size is a
//! match. Pairs match on a shared key; Set trios match when every feature
//! is all-same or all-different.

use smallvec::SmallVec;

use crate::cards::{PairCard, SetCard, Variant, FEATURE_COUNT};

/// Predicate over a group of `GROUP_SIZE` cards.
pub trait MatchRule {
    /// Card type the rule inspects.
    type Card;

    /// Number of cards evaluated together.
    const GROUP_SIZE: usize;

    /// Check whether `group` is a match.
    ///
    /// Groups of the wrong size never match.
    fn is_match(&self, group: &[Self::Card]) -> bool;
}

/// Two distinct cards sharing a pair key.
#[derive(Clone, Copy, Debug, Default)]
pub struct PairRule;

impl MatchRule for PairRule {
    type Card = PairCard;
    const GROUP_SIZE: usize = 2;

    fn is_match(&self, group: &[PairCard]) -> bool {
        match group {
            [a, b] => a.pairs_with(b),
            _ => false,
        }
    }
}

/// Three cards whose features are each all-same or all-distinct.
#[derive(Clone, Copy, Debug, Default)]
pub struct SetRule;

impl MatchRule for SetRule {
    type Card = SetCard;
    const GROUP_SIZE: usize = 3;

    fn is_match(&self, group: &[SetCard]) -> bool {
        match group {
            [a, b, c] => (0..FEATURE_COUNT)
                .all(|i| all_same_or_all_distinct(a.feature(i), b.feature(i), c.feature(i))),
            _ => false,
        }
    }
}

/// True iff the three values are all equal or pairwise different.
///
/// Symmetric in its arguments.
#[must_use]
pub fn all_same_or_all_distinct(a: Variant, b: Variant, c: Variant) -> bool {
    (a == b && b == c) || (a != b && a != c && b != c)
}

/// First matching group among `cards`, in combination order.
///
/// ```
/// use matching_engine::cards::SetCard;
/// use matching_engine::rules::{find_match, SetRule};
///
/// let cards = [
///     SetCard::from_values([1, 1, 1, 1]).unwrap(),
///     SetCard::from_values([1, 1, 1, 2]).unwrap(),
///     SetCard::from_values([2, 2, 2, 2]).unwrap(),
///     SetCard::from_values([3, 3, 3, 3]).unwrap(),
/// ];
/// let found = find_match(&SetRule, &cards).unwrap();
/// assert_eq!(found.as_slice(), &[cards[0], cards[2], cards[3]]);
/// ```
pub fn find_match<R>(rule: &R, cards: &[R::Card]) -> Option<SmallVec<[R::Card; 3]>>
where
    R: MatchRule,
    R::Card: Copy,
{
    let mut group = SmallVec::new();
    search(rule, cards, 0, &mut group)
}

fn search<R>(
    rule: &R,
    cards: &[R::Card],
    start: usize,
    group: &mut SmallVec<[R::Card; 3]>,
) -> Option<SmallVec<[R::Card; 3]>>
where
    R: MatchRule,
    R::Card: Copy,
{
    if group.len() == R::GROUP_SIZE {
        return rule.is_match(&group[..]).then(|| group.clone());
    }

    let needed = R::GROUP_SIZE - group.len();
    if cards.len() < start + needed {
        return None;
    }

    for i in start..=cards.len() - needed {
        group.push(cards[i]);
        let found = search(rule, cards, i + 1, group);
        group.pop();
        if found.is_some() {
            return found;
        }
    }
    None
}
