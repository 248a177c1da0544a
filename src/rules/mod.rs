//! Turn coordination.
//!
//! `Game` is the state machine tying the other modules together:
//! - validates each command against the phase and its preconditions
//! - rotates storyteller and judge after every verdict
//! - draws prompts from the deck
//! - ends the game when the session clock runs out
//!
//! Front ends issue commands and read snapshots; they never reach into
//! the roster, deck or clock directly.

pub mod engine;

pub use engine::{Game, QuantumReport};
