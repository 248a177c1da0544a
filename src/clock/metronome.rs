//! Turns elapsed wall-clock time into whole clock ticks.
//!
//! Front ends rarely wake up exactly once per second. They report how much
//! time passed and the metronome says how many one-second ticks are due,
//! carrying the fractional remainder to the next call.

use std::time::Duration;

const TICK: Duration = Duration::from_secs(1);

/// Elapsed-time accumulator.
///
/// ```
/// use std::time::Duration;
/// use aita_engine::clock::Metronome;
///
/// let mut m = Metronome::new();
/// assert_eq!(m.advance(Duration::from_millis(700)), 0);
/// assert_eq!(m.advance(Duration::from_millis(700)), 1);
/// assert_eq!(m.advance(Duration::from_millis(2600)), 3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Metronome {
    carry: Duration,
}

impl Default for Metronome {
    fn default() -> Self {
        Self::new()
    }
}

impl Metronome {
    /// One tick per second.
    #[must_use]
    pub fn new() -> Self {
        Self {
            carry: Duration::ZERO,
        }
    }

    /// Add `elapsed` and return the number of whole ticks now due.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        let total = self.carry + elapsed;
        let ticks = total.as_nanos() / TICK.as_nanos();
        let consumed = TICK.as_nanos() * ticks;
        // Remainder is below one period, so it always fits in u64 nanos.
        let leftover = u64::try_from(total.as_nanos() - consumed).unwrap_or(0);
        self.carry = Duration::from_nanos(leftover);
        u32::try_from(ticks).unwrap_or(u32::MAX)
    }

    /// Drop any carried fraction.
    pub fn reset(&mut self) {
        self.carry = Duration::ZERO;
    }

    /// Time accumulated towards the next tick.
    #[must_use]
    pub fn carry(&self) -> Duration {
        self.carry
    }
}
