//! Core engine types: ids, RNG, errors, configuration, selection.
//!
//! These building blocks are shared by both game variants.

pub mod id;
pub mod rng;
pub mod error;
pub mod config;
pub mod selection;

pub use id::{CardId, IdSequence, PairKey};
pub use rng::{GameRng, GameRngState};
pub use error::{GameError, Result};
pub use config::{ConcentrationConfig, SetConfig};
pub use selection::Selection;
