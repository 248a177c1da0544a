//! Player roster.
//!
//! Owns the ordered player list and enforces size bounds. Mutated only
//! through `Roster` methods, which the game calls during setup.

pub mod manager;

pub use manager::{Roster, StartBlocker};
