//! Countdown timer bounding a game.

use serde::{Deserialize, Serialize};
use tracing::trace;

/// Result of delivering one tick to the clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClockTick {
    /// The clock is stopped; nothing changed.
    Idle,
    /// One second elapsed, time remains.
    Running { remaining: u32 },
    /// This tick took the clock to zero. The clock stops itself.
    Expired,
}

/// One-second countdown.
///
/// Runs only while a game is in progress. Moving between the storytelling
/// and judging phases leaves it untouched; starting a game restarts it
/// from the full duration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClock {
    duration: u32,
    remaining: u32,
    running: bool,
}

impl SessionClock {
    /// Stopped clock showing the full duration.
    #[must_use]
    pub fn new(duration: u32) -> Self {
        Self {
            duration,
            remaining: duration,
            running: false,
        }
    }

    /// Change the duration and show it. Has no effect on a running clock's
    /// remaining time until the next `start`.
    pub fn set_duration(&mut self, duration: u32) {
        self.duration = duration;
        if !self.running {
            self.remaining = duration;
        }
    }

    /// Start from the full duration.
    pub fn start(&mut self) {
        self.remaining = self.duration;
        self.running = true;
    }

    /// Stop delivering ticks. Remaining time is kept for display.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Stop and reset to `duration`.
    pub fn reset(&mut self, duration: u32) {
        self.running = false;
        self.duration = duration;
        self.remaining = duration;
    }

    /// Deliver one second.
    pub fn tick(&mut self) -> ClockTick {
        if !self.running {
            return ClockTick::Idle;
        }

        self.remaining = self.remaining.saturating_sub(1);
        trace!(remaining = self.remaining, "Clock tick");

        if self.remaining == 0 {
            self.running = false;
            ClockTick::Expired
        } else {
            ClockTick::Running {
                remaining: self.remaining,
            }
        }
    }

    /// Seconds left.
    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Configured length.
    #[must_use]
    pub fn duration(&self) -> u32 {
        self.duration
    }

    /// True while ticks are being counted.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// True once the countdown has reached zero.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.remaining == 0
    }
}
