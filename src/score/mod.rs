//! Score resolver.
//!
//! Applies verdicts to tallies and works out who won once time is up.
//! A winner set is empty when nobody was judged at all, and may hold
//! several players on a tie.

pub mod resolver;

pub use resolver::{compute_winners, record_verdict, standings, GameResult, WinnerSet};
