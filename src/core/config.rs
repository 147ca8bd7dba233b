//! Game configuration types.
//!
//! Each variant is configured by a plain serde struct, so a front end can
//! keep its settings in whatever format it likes:
//! - `ConcentrationConfig`: pair count, shuffle flag, seed, scoring
//! - `SetConfig`: initial deal, seed, scoring
//!
//! Missing fields fall back to the variant's defaults.

use serde::{Deserialize, Serialize};

use crate::scoring::ScoreTable;

fn default_pairs() -> usize {
    6
}

fn default_shuffle() -> bool {
    true
}

fn default_initial_deal() -> usize {
    12
}

fn concentration_scoring() -> ScoreTable {
    ScoreTable::concentration()
}

fn set_scoring() -> ScoreTable {
    ScoreTable::set_game()
}

/// Configuration for a Concentration game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConcentrationConfig {
    /// Number of pairs on the board. Must be positive.
    #[serde(default = "default_pairs")]
    pub pairs: usize,

    /// Shuffle the deck before play. Off leaves pairs adjacent.
    #[serde(default = "default_shuffle")]
    pub shuffle: bool,

    /// Seed for the shuffle.
    #[serde(default)]
    pub seed: u64,

    /// Score deltas.
    #[serde(default = "concentration_scoring")]
    pub scoring: ScoreTable,
}

impl Default for ConcentrationConfig {
    fn default() -> Self {
        Self {
            pairs: default_pairs(),
            shuffle: default_shuffle(),
            seed: 0,
            scoring: ScoreTable::concentration(),
        }
    }
}

/// Configuration for a Set game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetConfig {
    /// Cards opened when the game starts.
    #[serde(default = "default_initial_deal")]
    pub initial_deal: usize,

    /// Seed for random draws.
    #[serde(default)]
    pub seed: u64,

    /// Score deltas.
    #[serde(default = "set_scoring")]
    pub scoring: ScoreTable,
}

impl Default for SetConfig {
    fn default() -> Self {
        Self {
            initial_deal: default_initial_deal(),
            seed: 0,
            scoring: ScoreTable::set_game(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concentration_defaults() {
        let config = ConcentrationConfig::default();
        assert_eq!(config.pairs, 6);
        assert!(config.shuffle);
        assert_eq!(config.scoring, ScoreTable::concentration());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: ConcentrationConfig = serde_json::from_str(r#"{"pairs": 10}"#).unwrap();
        assert_eq!(config.pairs, 10);
        assert!(config.shuffle);
        assert_eq!(config.seed, 0);

        let config: SetConfig = serde_json::from_str(r#"{"seed": 7}"#).unwrap();
        assert_eq!(config.initial_deal, 12);
        assert_eq!(config.seed, 7);
        assert_eq!(config.scoring, ScoreTable::set_game());
    }

    #[test]
    fn test_custom_scoring_from_json() {
        let json = r#"{
            "initial_deal": 9,
            "scoring": { "match_found": 5, "mismatch_found": -1, "repeated_mismatch_penalty": 0 }
        }"#;
        let config: SetConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.initial_deal, 9);
        assert_eq!(config.scoring.match_found, 5);
        assert_eq!(config.scoring.mismatch_found, -1);
    }

    #[test]
    fn test_config_roundtrip() {
        let config = ConcentrationConfig {
            pairs: 8,
            shuffle: false,
            seed: 99,
            scoring: ScoreTable::concentration(),
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: ConcentrationConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
