//! Game implementations.
//!
//! - `concentration`: pair matching over face-down cards
//! - `set`: three-card attribute matching over a random layout

pub mod concentration;
pub mod set;
