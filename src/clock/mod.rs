//! Session clock.
//!
//! - `SessionClock`: the countdown that ends a game
//! - `Metronome`: converts elapsed wall-clock time into one-second ticks

pub mod metronome;
pub mod session;

pub use metronome::Metronome;
pub use session::{ClockTick, SessionClock};
