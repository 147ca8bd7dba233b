//! Zone system for card locations.
//!
//! Cards of the Set variant live in one of three zones: the undrawn deck,
//! the open cards, or the matched pile. `CardZones` keeps that partition.
//!
//! ## Key Types
//!
//! - `Zone`: Deck, Open or Matched
//! - `CardZones`: Card location tracking and movement

pub mod manager;

pub use manager::{CardZones, Zone};
