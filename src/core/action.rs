//! Commands accepted by the engine.
//!
//! A front end never mutates game state directly; it issues one of the
//! commands below through `Game::apply` (or the matching convenience
//! method). Commands are plain data so they can be logged, replayed or
//! sent across a process boundary.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use super::state::Phase;
use crate::deck::ContentMode;

/// A command issued by the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    /// Append a blank player.
    AddPlayer,
    /// Remove a player by id.
    RemovePlayer { id: PlayerId },
    /// Replace a player's display name.
    RenamePlayer { id: PlayerId, name: String },
    /// Change the session length.
    SetDuration { seconds: u32 },
    /// Choose which prompt set to deal from.
    SetContentMode { mode: ContentMode },
    /// Leave setup and deal the first prompt.
    StartGame,
    /// The storyteller is done; hand over to the judge.
    FinishTurn,
    /// The judge rules on the storyteller.
    SubmitVerdict { is_asshole: bool },
    /// Return to setup.
    RestartGame,
}

impl Command {
    /// Discriminant without payload.
    #[must_use]
    pub fn kind(&self) -> CommandKind {
        match self {
            Command::AddPlayer => CommandKind::AddPlayer,
            Command::RemovePlayer { .. } => CommandKind::RemovePlayer,
            Command::RenamePlayer { .. } => CommandKind::RenamePlayer,
            Command::SetDuration { .. } => CommandKind::SetDuration,
            Command::SetContentMode { .. } => CommandKind::SetContentMode,
            Command::StartGame => CommandKind::StartGame,
            Command::FinishTurn => CommandKind::FinishTurn,
            Command::SubmitVerdict { .. } => CommandKind::SubmitVerdict,
            Command::RestartGame => CommandKind::RestartGame,
        }
    }
}

/// Payload-free command discriminant, used for legality checks and errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandKind {
    AddPlayer,
    RemovePlayer,
    RenamePlayer,
    SetDuration,
    SetContentMode,
    StartGame,
    FinishTurn,
    SubmitVerdict,
    RestartGame,
}

impl CommandKind {
    /// Every command kind, in declaration order.
    pub const ALL: [CommandKind; 9] = [
        CommandKind::AddPlayer,
        CommandKind::RemovePlayer,
        CommandKind::RenamePlayer,
        CommandKind::SetDuration,
        CommandKind::SetContentMode,
        CommandKind::StartGame,
        CommandKind::FinishTurn,
        CommandKind::SubmitVerdict,
        CommandKind::RestartGame,
    ];

    /// Snake-case name, as used in logs and error messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            CommandKind::AddPlayer => "add_player",
            CommandKind::RemovePlayer => "remove_player",
            CommandKind::RenamePlayer => "rename_player",
            CommandKind::SetDuration => "set_duration",
            CommandKind::SetContentMode => "set_content_mode",
            CommandKind::StartGame => "start_game",
            CommandKind::FinishTurn => "finish_turn",
            CommandKind::SubmitVerdict => "submit_verdict",
            CommandKind::RestartGame => "restart_game",
        }
    }

    /// Phases in which this command can be accepted at all.
    ///
    /// Phase is necessary but not sufficient: `StartGame` also needs a
    /// ready roster, roster edits need bounds to hold, and so on.
    #[must_use]
    pub fn accepted_in(self, phase: Phase) -> bool {
        match self {
            CommandKind::AddPlayer
            | CommandKind::RemovePlayer
            | CommandKind::RenamePlayer
            | CommandKind::SetDuration
            | CommandKind::SetContentMode
            | CommandKind::StartGame => phase == Phase::Setup,
            CommandKind::FinishTurn => phase == Phase::PlayerTurn,
            CommandKind::SubmitVerdict => phase == Phase::Judging,
            CommandKind::RestartGame => true,
        }
    }
}

impl std::fmt::Display for CommandKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A command that was accepted, with the context it was applied in.
///
/// Kept in the game's history for replay and debugging.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRecord {
    /// Round number at the time the command was applied (0 during setup).
    pub round: u32,
    /// Phase the command was applied in.
    pub phase: Phase,
    /// The command itself.
    pub command: Command,
}

impl CommandRecord {
    /// Create a new record.
    #[must_use]
    pub fn new(round: u32, phase: Phase, command: Command) -> Self {
        Self {
            round,
            phase,
            command,
        }
    }
}
