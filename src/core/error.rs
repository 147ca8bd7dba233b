//! Recoverable engine errors.
//!
//! Caller bugs (an out-of-range card index) panic instead; an exhausted deck
//! is not an error at all and shows up as fewer cards drawn.

use thiserror::Error;

use crate::cards::SetCard;

/// Errors returned by fallible engine operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// Concentration needs at least one pair.
    #[error("pair count must be positive, got {0}")]
    InvalidPairCount(usize),

    /// Feature values are 1, 2 or 3.
    #[error("feature value must be 1, 2 or 3, got {0}")]
    InvalidVariant(u8),

    /// The card is not among the open cards; the caller's view is stale.
    #[error("card {0} is not in play")]
    CardNotOpen(SetCard),

    /// The same card was given more than once in one evaluation.
    #[error("card {0} was given more than once")]
    DuplicateCard(SetCard),
}

/// Result alias for engine operations.
pub type Result<T> = std::result::Result<T, GameError>;
