//! Core engine types: players, configuration, RNG, commands, session state.
//!
//! These are the building blocks every other module works with. Nothing in
//! here knows about turn rotation or scoring; those live in their own
//! modules and operate on these types.

pub mod action;
pub mod config;
pub mod display;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Command, CommandKind, CommandRecord};
pub use config::{
    GameConfig, DEFAULT_DURATION_SECS, DEFAULT_PLACEHOLDER, MAX_PLAYERS, MIN_PLAYERS,
};
pub use display::{format_clock, personalize};
pub use player::{Player, PlayerId};
pub use rng::GameRng;
pub use state::{Phase, Session, Snapshot};
