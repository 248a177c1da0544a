//! Session state and the read-only snapshot handed to front ends.
//!
//! ## Session
//!
//! The mutable half of a game: phase, turn order, current prompt, round
//! counter and clock. Owned exclusively by `Game`.
//!
//! ## Snapshot
//!
//! Everything a renderer needs, detached from the engine. Players are held
//! in an `im::Vector`, so taking a snapshot after every command is O(1) in
//! roster size.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::player::{Player, PlayerId};
use crate::clock::SessionClock;
use crate::deck::ContentMode;
use crate::score::WinnerSet;
use crate::turn::TurnOrder;

/// Game phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Editing the roster and duration.
    #[default]
    Setup,
    /// The active player is telling their story.
    PlayerTurn,
    /// The judge is deciding.
    Judging,
    /// Time ran out.
    GameOver,
}

impl Phase {
    /// Every phase, in lifecycle order.
    pub const ALL: [Phase; 4] = [Phase::Setup, Phase::PlayerTurn, Phase::Judging, Phase::GameOver];

    /// True while rounds are being played and the clock runs.
    #[must_use]
    pub const fn is_in_progress(self) -> bool {
        matches!(self, Phase::PlayerTurn | Phase::Judging)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Setup => "setup",
            Phase::PlayerTurn => "player_turn",
            Phase::Judging => "judging",
            Phase::GameOver => "game_over",
        };
        f.write_str(name)
    }
}

/// Mutable per-game session.
#[derive(Clone, Debug)]
pub struct Session {
    /// Current phase.
    pub phase: Phase,

    /// Active/judge indices. `None` in setup.
    pub turn: Option<TurnOrder>,

    /// Prompt shown to the active player. `None` until the first draw.
    pub current_prompt: Option<String>,

    /// Round number (starts at 1 on `start_game`, 0 in setup).
    pub round: u32,

    /// Countdown timer.
    pub clock: SessionClock,
}

impl Session {
    /// Create a session in setup with the given duration.
    #[must_use]
    pub fn new(duration_secs: u32) -> Self {
        Self {
            phase: Phase::Setup,
            turn: None,
            current_prompt: None,
            round: 0,
            clock: SessionClock::new(duration_secs),
        }
    }

    /// Back to setup with a stopped clock showing `duration_secs`.
    pub fn reset(&mut self, duration_secs: u32) {
        self.phase = Phase::Setup;
        self.turn = None;
        self.current_prompt = None;
        self.round = 0;
        self.clock.reset(duration_secs);
    }
}

/// Read-only view of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Current phase.
    pub phase: Phase,
    /// Roster in seat order.
    pub players: Vector<Player>,
    /// Storyteller index, when a game has started.
    pub active_player_index: Option<usize>,
    /// Judge index, when a game has started.
    pub judge_index: Option<usize>,
    /// Prompt for the active player, raw (placeholder not substituted).
    pub current_prompt: Option<String>,
    /// Seconds left on the clock.
    pub time_remaining: u32,
    /// Configured session length.
    pub duration: u32,
    /// Prompt set being dealt from.
    pub content_mode: ContentMode,
    /// Round number.
    pub round: u32,
    /// Players with the top tally. Only populated in `GameOver`.
    pub winners: WinnerSet,
}

impl Snapshot {
    /// The storyteller, if any.
    #[must_use]
    pub fn active_player(&self) -> Option<&Player> {
        self.active_player_index.and_then(|i| self.players.get(i))
    }

    /// The judge, if any.
    #[must_use]
    pub fn judge(&self) -> Option<&Player> {
        self.judge_index.and_then(|i| self.players.get(i))
    }

    /// Look up a player by id.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Tallies in seat order.
    #[must_use]
    pub fn tallies(&self) -> Vec<u32> {
        self.players.iter().map(|p| p.tally).collect()
    }
}
