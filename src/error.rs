//! Error taxonomy for the engine.
//!
//! Every fallible operation returns [`GameError`]. Errors are local and
//! recoverable: a rejected command leaves the game exactly as it was.

use thiserror::Error;

use crate::core::{CommandKind, Phase, PlayerId};
use crate::deck::ContentMode;
use crate::roster::StartBlocker;

/// Result alias used throughout the crate.
pub type Result<T, E = GameError> = std::result::Result<T, E>;

/// Top-level engine error.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GameError {
    /// Static configuration is unusable; a game cannot be constructed.
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigError),

    /// A command was refused because its precondition does not hold.
    #[error("command rejected: {0}")]
    Precondition(#[from] Precondition),

    /// A turn index no longer points into the roster.
    #[error("index {index} out of range for roster of {len} players")]
    IndexOutOfRange {
        /// Offending index.
        index: usize,
        /// Roster length at the time of the access.
        len: usize,
    },
}

impl GameError {
    /// True if this is a rejected command rather than a configuration fault.
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(self, GameError::Precondition(_))
    }
}

/// Configuration faults detected at construction time.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("prompt corpus is empty")]
    EmptyCorpus,

    #[error("prompt {index} is blank")]
    BlankPrompt { index: usize },

    #[error("invalid player bounds: min {min}, max {max} (need 2 <= min <= max)")]
    InvalidPlayerBounds { min: usize, max: usize },

    #[error("invalid duration: {0}s")]
    InvalidDuration(u32),

    #[error("placeholder token is empty")]
    EmptyPlaceholder,

    #[error("no prompts configured for {0} mode")]
    MissingContent(ContentMode),
}

/// Reasons a command is refused.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Precondition {
    #[error("{command} is not accepted during {phase}")]
    WrongPhase { command: CommandKind, phase: Phase },

    #[error("roster is full ({max} players)")]
    RosterFull { max: usize },

    #[error("roster cannot shrink below {min} players")]
    RosterMinimum { min: usize },

    #[error("no player with id {0}")]
    UnknownPlayer(PlayerId),

    #[error("roster is locked while a game is in progress")]
    RosterLocked,

    #[error("game cannot start: {0}")]
    NotReady(StartBlocker),

    #[error("duration must be positive, got {0}s")]
    InvalidDuration(u32),

    #[error("no prompts available for {0} mode")]
    ContentUnavailable(ContentMode),

    #[error("player ids exhausted")]
    IdsExhausted,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_conversions() {
        let err: GameError = ConfigError::EmptyCorpus.into();
        assert_eq!(err, GameError::Configuration(ConfigError::EmptyCorpus));
        assert!(!err.is_rejection());

        let err: GameError = Precondition::RosterLocked.into();
        assert!(err.is_rejection());
    }

    #[test]
    fn test_messages() {
        let err = GameError::from(Precondition::WrongPhase {
            command: CommandKind::FinishTurn,
            phase: Phase::Setup,
        });
        assert_eq!(
            err.to_string(),
            "command rejected: finish_turn is not accepted during setup"
        );

        let err = GameError::IndexOutOfRange { index: 3, len: 2 };
        assert_eq!(err.to_string(), "index 3 out of range for roster of 2 players");
    }
}
