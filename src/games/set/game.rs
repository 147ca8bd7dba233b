//! Set game implementation.

use im::Vector;
use log::{debug, trace, warn};

use crate::cards::{set_deck, SetCard};
use crate::core::{GameError, GameRng, GameRngState, Result, Selection, SetConfig};
use crate::rules::{find_match, GameStatus, MatchRule, MatchingGame, SetRule};
use crate::scoring::{ScoreEvent, ScoreKeeper, ScoreRecord, ScoreTable, ScoringPolicy};
use crate::zones::{CardZones, Zone};

/// Set game state.
///
/// Every card is in exactly one of the deck, the open cards, or the
/// matched pile.
#[derive(Clone, Debug)]
pub struct SetGame<P = ScoreTable> {
    zones: CardZones<SetCard>,
    scores: ScoreKeeper,
    rng: GameRng,
    policy: P,
    selection: Selection<SetCard>,
}

/// Builder for creating a SetGame.
pub struct SetGameBuilder {
    config: SetConfig,
}

impl Default for SetGameBuilder {
    fn default() -> Self {
        Self {
            config: SetConfig::default(),
        }
    }
}

impl SetGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: SetConfig) -> Self {
        Self { config }
    }

    pub fn initial_deal(mut self, cards: usize) -> Self {
        self.config.initial_deal = cards;
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

    /// Build the game and deal the opening cards.
    pub fn build(self) -> SetGame {
        let mut game = SetGame::with_policy(self.config.seed, self.config.scoring);
        game.draw(self.config.initial_deal);
        debug!(
            "new set game: dealt {}, seed={}",
            game.open_cards().len(),
            self.config.seed
        );
        game
    }
}

impl SetGame {
    /// Full deck, nothing open, stock Set scoring.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_policy(seed, ScoreTable::set_game())
    }
}

impl<P: ScoringPolicy> SetGame<P> {
    /// Full deck, nothing open, custom scoring.
    #[must_use]
    pub fn with_policy(seed: u64, policy: P) -> Self {
        Self {
            zones: CardZones::new(set_deck()),
            scores: ScoreKeeper::new(),
            rng: GameRng::new(seed),
            policy,
            selection: Selection::new(SetRule::GROUP_SIZE),
        }
    }

    /// Open up to `n` random cards from the deck.
    ///
    /// Returns the cards opened; fewer than `n` once the deck runs out.
    pub fn draw(&mut self, n: usize) -> Vec<SetCard> {
        let mut drawn = Vec::with_capacity(n.min(self.deck_len()));
        for _ in 0..n {
            match self.draw_one() {
                Some(card) => drawn.push(card),
                None => break,
            }
        }
        drawn
    }

    /// Open one random card, or `None` if the deck is empty.
    pub fn draw_one(&mut self) -> Option<SetCard> {
        let card = self.zones.move_random(Zone::Deck, Zone::Open, &mut self.rng)?;
        trace!("drew {}, {} left in deck", card, self.deck_len());
        Some(card)
    }

    /// Evaluate three open cards as a set.
    ///
    /// On a match the cards leave play for good; on a mismatch they stay
    /// open. Either way the score moves once. Duplicate or non-open cards
    /// are rejected without touching any state.
    pub fn evaluate_set(&mut self, a: SetCard, b: SetCard, c: SetCard) -> Result<bool> {
        if a == b || a == c {
            return Err(GameError::DuplicateCard(a));
        }
        if b == c {
            return Err(GameError::DuplicateCard(b));
        }
        for card in [a, b, c] {
            if !self.zones.is_in(card, Zone::Open) {
                warn!("evaluate_set: {} is not in play", card);
                return Err(GameError::CardNotOpen(card));
            }
        }

        let is_set = SetRule.is_match(&[a, b, c]);
        if is_set {
            self.scores.apply(ScoreEvent::MatchFound, &self.policy);
            for card in [a, b, c] {
                self.zones.move_to(card, Zone::Matched);
            }
            let zones = &self.zones;
            self.selection.retain(|k| zones.is_in(k, Zone::Open));
        } else {
            self.scores.apply(ScoreEvent::MismatchFound, &self.policy);
        }

        debug!(
            "{} {} {} -> {}, score {}",
            a,
            b,
            c,
            if is_set { "set" } else { "no set" },
            self.scores.score()
        );
        Ok(is_set)
    }

    /// Toggle `card` in the pending selection.
    ///
    /// When the third card is selected the trio is evaluated, the
    /// selection is cleared and the result is returned.
    pub fn select(&mut self, card: SetCard) -> Result<Option<bool>> {
        if !self.zones.is_in(card, Zone::Open) {
            warn!("select: {} is not in play", card);
            return Err(GameError::CardNotOpen(card));
        }

        self.selection.toggle(card);
        if !self.selection.is_full() {
            return Ok(None);
        }

        let picks = self.selection.take();
        self.evaluate_set(picks[0], picks[1], picks[2]).map(Some)
    }

    /// Some set among the open cards, if one exists.
    #[must_use]
    pub fn find_set(&self) -> Option<[SetCard; 3]> {
        find_match(&SetRule, self.open_cards()).map(|g| [g[0], g[1], g[2]])
    }

    /// Check if the deck is empty and no set remains on the table.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.zones.is_empty(Zone::Deck) && self.find_set().is_none()
    }

    /// Clone with an independent random stream for future draws.
    #[must_use]
    pub fn branch(&mut self) -> Self
    where
        P: Clone,
    {
        let mut branch = self.clone();
        branch.rng = self.rng.fork();
        branch
    }

    /// Number of cards not yet drawn.
    #[must_use]
    pub fn deck_len(&self) -> usize {
        self.zones.len(Zone::Deck)
    }

    /// Cards not yet drawn, in no meaningful order.
    #[must_use]
    pub fn deck(&self) -> &[SetCard] {
        self.zones.cards_in(Zone::Deck)
    }

    /// Open cards, in the order they were drawn.
    #[must_use]
    pub fn open_cards(&self) -> &[SetCard] {
        self.zones.cards_in(Zone::Open)
    }

    /// Cards removed by found sets, in the order they were found.
    #[must_use]
    pub fn matched_cards(&self) -> &[SetCard] {
        self.zones.cards_in(Zone::Matched)
    }

    /// Check if `card` is open.
    #[must_use]
    pub fn is_open(&self, card: SetCard) -> bool {
        self.zones.is_in(card, Zone::Open)
    }

    /// Zone `card` is in.
    #[must_use]
    pub fn zone_of(&self, card: SetCard) -> Zone {
        self.zones
            .zone_of(card)
            .expect("every card of the full deck is tracked")
    }

    /// Pending selection.
    #[must_use]
    pub fn selection(&self) -> &Selection<SetCard> {
        &self.selection
    }

    /// Random stream position, for reproducing later draws.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Scoring policy in use.
    #[must_use]
    pub fn policy(&self) -> &P {
        &self.policy
    }
}

impl<P: ScoringPolicy> MatchingGame for SetGame<P> {
    type Card = SetCard;

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
