//! Concentration game implementation.

use im::Vector;
use log::{debug, trace};
use rustc_hash::FxHashSet;

use crate::cards::{pair_deck, Deck, PairCard};
use crate::core::{ConcentrationConfig, GameRng, IdSequence, Result};
use crate::rules::{GameStatus, MatchRule, MatchingGame, PairRule};
use crate::scoring::{ScoreEvent, ScoreKeeper, ScoreRecord, ScoreTable, ScoringPolicy};

/// What a call to `choose_card` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChooseOutcome {
    /// The card was already matched; nothing changed.
    Ignored,
    /// The card was turned up as the first of a pair.
    Flipped(usize),
    /// The card completed a pair.
    Matched { first: usize, second: usize },
    /// The card did not pair with the one already showing.
    Mismatched {
        first: usize,
        second: usize,
        /// Repeated-mismatch penalties applied (0, 1 or 2).
        penalties: u8,
    },
}

/// Concentration game state.
#[derive(Clone, Debug)]
pub struct ConcentrationGame<P = ScoreTable> {
    cards: Vec<PairCard>,
    /// Indices of cards that have been part of a mismatch.
    seen: FxHashSet<usize>,
    scores: ScoreKeeper,
    flip_count: u32,
    policy: P,
}

/// Builder for creating a ConcentrationGame.
pub struct ConcentrationBuilder {
    config: ConcentrationConfig,
}

impl Default for ConcentrationBuilder {
    fn default() -> Self {
        Self {
            config: ConcentrationConfig::default(),
        }
    }
}

impl ConcentrationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: ConcentrationConfig) -> Self {
        Self { config }
    }

    pub fn pairs(mut self, pairs: usize) -> Self {
        self.config.pairs = pairs;
        self
    }

    pub fn shuffle(mut self, shuffle: bool) -> Self {
        self.config.shuffle = shuffle;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn scoring(mut self, scoring: ScoreTable) -> Self {
        self.config.scoring = scoring;
        self
    }

    /// Build the game, drawing card ids from `ids`.
    ///
    /// Fails if the pair count is zero.
    pub fn build(self, ids: &mut IdSequence) -> Result<ConcentrationGame> {
        let mut deck = pair_deck(self.config.pairs, ids)?;
        if self.config.shuffle {
            deck.shuffle(&mut GameRng::new(self.config.seed));
        }

        debug!(
            "new concentration game: {} pairs, shuffled={}, seed={}",
            self.config.pairs, self.config.shuffle, self.config.seed
        );
        Ok(ConcentrationGame::from_deck(deck, self.config.scoring))
    }
}

impl<P: ScoringPolicy> ConcentrationGame<P> {
    /// Start a game over an already built deck, in deck order.
    #[must_use]
    pub fn from_deck(deck: Deck<PairCard>, policy: P) -> Self {
        Self {
            cards: deck.into_vec(),
            seen: FxHashSet::default(),
            scores: ScoreKeeper::new(),
            flip_count: 0,
            policy,
        }
    }

    /// Choose the card at `index`.
    ///
    /// Panics if `index` is out of range.
    pub fn choose_card(&mut self, index: usize) -> ChooseOutcome {
        assert!(
            index < self.cards.len(),
            "card index {} out of range for {} cards",
            index,
            self.cards.len()
        );

        if self.cards[index].is_matched {
            trace!("card {} already matched, ignoring", index);
            return ChooseOutcome::Ignored;
        }

        self.flip_count += 1;

        match self.index_of_one_and_only_face_up_card() {
            Some(first) if first != index => {
                let outcome = if PairRule.is_match(&[self.cards[first], self.cards[index]]) {
                    self.cards[first].is_matched = true;
                    self.cards[index].is_matched = true;
                    self.scores.apply(ScoreEvent::MatchFound, &self.policy);
                    debug!("cards {} and {} matched, score {}", first, index, self.scores.score());
                    ChooseOutcome::Matched { first, second: index }
                } else {
                    let mut penalties = 0;
                    for card in [first, index] {
                        if self.seen.contains(&card) {
                            self.scores.apply(ScoreEvent::RepeatedMismatchPenalty, &self.policy);
                            penalties += 1;
                        }
                    }
                    self.seen.insert(first);
                    self.seen.insert(index);
                    debug!(
                        "cards {} and {} mismatched, {} penalties, score {}",
                        first,
                        index,
                        penalties,
                        self.scores.score()
                    );
                    ChooseOutcome::Mismatched { first, second: index, penalties }
                };
                self.cards[index].is_face_up = true;
                outcome
            }
            _ => {
                for card in self.cards.iter_mut().filter(|c| !c.is_matched) {
                    card.is_face_up = false;
                }
                self.cards[index].is_face_up = true;
                trace!("card {} flipped up", index);
                ChooseOutcome::Flipped(index)
            }
        }
    }

    /// Index of the single face-up, unmatched card, if exactly one exists.
    ///
    /// Derived from the card flags on every call.
    #[must_use]
    pub fn index_of_one_and_only_face_up_card(&self) -> Option<usize> {
        let mut face_up = self
            .cards
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_face_up && !c.is_matched)
            .map(|(i, _)| i);

        match (face_up.next(), face_up.next()) {
            (Some(only), None) => Some(only),
            _ => None,
        }
    }

    /// All cards, in board order.
    #[must_use]
    pub fn cards(&self) -> &[PairCard] {
        &self.cards
    }

    /// Card at `index`.
    #[must_use]
    pub fn card(&self, index: usize) -> Option<&PairCard> {
        self.cards.get(index)
    }

    /// Number of cards on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of times an unmatched card was chosen.
    #[must_use]
    pub fn flip_count(&self) -> u32 {
        self.flip_count
    }

    /// Check if the card at `index` has been part of a mismatch.
    #[must_use]
    pub fn is_seen(&self, index: usize) -> bool {
        self.seen.contains(&index)
    }

    /// Number of pairs found so far.
    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.cards.iter().filter(|c| c.is_matched).count() / 2
    }

    /// Check if every card is matched.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cards.iter().all(|c| c.is_matched)
    }

    /// Scoring policy in use.
    #[must_use]
    pub fn policy(&self) -> &P {
        &self.policy
    }
}

impl<P: ScoringPolicy> MatchingGame for ConcentrationGame<P> {
    type Card = PairCard;

    fn score(&self) -> i64 {
        self.scores.score()
    }

    fn score_history(&self) -> &Vector<ScoreRecord> {
        self.scores.history()
    }

    fn status(&self) -> GameStatus {
        if self.is_complete() {
            GameStatus::Complete { score: self.score() }
        } else {
            GameStatus::InProgress
        }
    }
}
