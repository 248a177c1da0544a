//! Turn and judge rotation.
//!
//! The judge is always the seat after the storyteller. Both advance one
//! seat per round, so with N ≥ 2 players every seat takes both roles in
//! round-robin order and the two are never the same seat.

pub mod order;

pub use order::TurnOrder;
