//! Property-based tests for engine invariants.

use proptest::prelude::*;

use matching_engine::cards::{set_deck, SetCard, SET_DECK_SIZE};
use matching_engine::games::concentration::ConcentrationBuilder;
use matching_engine::games::set::SetGame;
use matching_engine::rules::{MatchRule, MatchingGame, SetRule};
use matching_engine::{pair_deck, GameRng, IdSequence};
use rustc_hash::{FxHashMap, FxHashSet};

fn set_card() -> impl Strategy<Value = SetCard> {
    prop::array::uniform4(1u8..=3).prop_map(|v| SetCard::from_values(v).unwrap())
}

proptest! {
    /// Property: evaluation ignores argument order.
    #[test]
    fn prop_set_rule_symmetric(a in set_card(), b in set_card(), c in set_card()) {
        let expected = SetRule.is_match(&[a, b, c]);
        for group in [[a, c, b], [b, a, c], [b, c, a], [c, a, b], [c, b, a]] {
            prop_assert_eq!(SetRule.is_match(&group), expected);
        }
    }

    /// Property: any two distinct cards are completed by exactly one third.
    #[test]
    fn prop_unique_completion(a in set_card(), b in set_card()) {
        prop_assume!(a != b);
        let completions = set_deck()
            .iter()
            .filter(|&&c| c != a && c != b && SetRule.is_match(&[a, b, c]))
            .count();
        prop_assert_eq!(completions, 1);
    }

    /// Property: deck / open / matched always partition the 81 cards.
    #[test]
    fn prop_partition_under_random_play(
        seed in any::<u64>(),
        moves in prop::collection::vec((0usize..4, any::<prop::sample::Index>(), any::<prop::sample::Index>(), any::<prop::sample::Index>()), 1..60),
    ) {
        let mut game = SetGame::new(seed);
        let mut expected_score = 0i64;

        for (draw, i, j, k) in moves {
            game.draw(draw);
            let open = game.open_cards().to_vec();
            if open.len() >= 3 {
                let (a, b, c) = (open[i.index(open.len())], open[j.index(open.len())], open[k.index(open.len())]);
                match game.evaluate_set(a, b, c) {
                    Ok(true) => expected_score += 3,
                    Ok(false) => expected_score -= 5,
                    Err(_) => {}
                }
            }

            let deck: FxHashSet<_> = game.deck().iter().copied().collect();
            let open: FxHashSet<_> = game.open_cards().iter().copied().collect();
            let matched: FxHashSet<_> = game.matched_cards().iter().copied().collect();
            prop_assert!(deck.is_disjoint(&open));
            prop_assert!(deck.is_disjoint(&matched));
            prop_assert!(open.is_disjoint(&matched));
            prop_assert_eq!(deck.len() + open.len() + matched.len(), SET_DECK_SIZE);
            prop_assert_eq!(matched.len() % 3, 0);
        }

        prop_assert_eq!(game.score(), expected_score);
    }

    /// Property: shuffling is a permutation.
    #[test]
    fn prop_shuffle_is_permutation(seed in any::<u64>()) {
        let deck = set_deck();
        let mut shuffled = deck.clone();
        shuffled.shuffle(&mut GameRng::new(seed));

        let mut a = deck.into_vec();
        let mut b = shuffled.into_vec();
        a.sort_unstable();
        b.sort_unstable();
        prop_assert_eq!(a, b);
    }

    /// Property: n pairs give 2n cards, every key exactly twice.
    #[test]
    fn prop_pair_deck_shape(pairs in 1usize..40, start in 1u32..1000) {
        let mut ids = IdSequence::starting_at(start);
        let deck = pair_deck(pairs, &mut ids).unwrap();

        prop_assert_eq!(deck.len(), pairs * 2);
        let mut counts = FxHashMap::default();
        for card in &deck {
            *counts.entry(card.pair_key).or_insert(0usize) += 1;
        }
        prop_assert_eq!(counts.len(), pairs);
        prop_assert!(counts.values().all(|&n| n == 2));
    }

    /// Property: flip count never decreases and at most one unmatched
    /// card is pending between choices.
    #[test]
    fn prop_concentration_choices(
        seed in any::<u64>(),
        choices in prop::collection::vec(any::<prop::sample::Index>(), 1..80),
    ) {
        let mut ids = IdSequence::new();
        let mut game = ConcentrationBuilder::new().pairs(6).seed(seed).build(&mut ids).unwrap();
        let mut last_flips = 0;

        for choice in choices {
            let index = choice.index(game.len());
            let was_matched = game.cards()[index].is_matched;
            let score_before = game.score();

            game.choose_card(index);

            prop_assert!(game.flip_count() >= last_flips);
            if was_matched {
                prop_assert_eq!(game.flip_count(), last_flips);
                prop_assert_eq!(game.score(), score_before);
            }
            last_flips = game.flip_count();

            let pending = game.cards().iter().filter(|c| c.is_face_up && !c.is_matched).count();
            prop_assert!(pending <= 2);
            prop_assert_eq!(game.matched_pairs() * 2, game.cards().iter().filter(|c| c.is_matched).count());
        }
    }
}
