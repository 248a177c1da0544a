//! Game event types.
//!
//! Events describe what a command (or a clock tick) changed. They are
//! emitted after the change has been applied, together with the new
//! snapshot, so a renderer can redraw or animate just the affected part.

use serde::{Deserialize, Serialize};

use crate::core::{Phase, PlayerId};
use crate::deck::ContentMode;
use crate::score::WinnerSet;

/// Something that happened in a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    PlayerAdded { id: PlayerId },
    PlayerRemoved { id: PlayerId },
    PlayerRenamed { id: PlayerId, name: String },
    DurationChanged { seconds: u32 },

    /// Setup switched prompt sets; the deck was rebuilt.
    ContentModeChanged { mode: ContentMode },

    /// Setup ended; round one begins.
    GameStarted { players: usize, duration: u32 },

    /// A new prompt is in front of the storyteller.
    PromptDrawn {
        round: u32,
        active: PlayerId,
        judge: PlayerId,
    },

    /// The deck ran out and was reshuffled before the latest draw.
    DeckReshuffled { cycle: u32 },

    TurnFinished { active: PlayerId },

    VerdictRecorded {
        active: PlayerId,
        is_asshole: bool,
        tally: u32,
    },

    /// One second passed on a running clock.
    Ticked { remaining: u32 },

    /// Time ran out.
    GameOver { winners: WinnerSet },

    /// Back to setup.
    Restarted { from: Phase },
}

impl GameEvent {
    /// Short name for logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            GameEvent::PlayerAdded { .. } => "player_added",
            GameEvent::PlayerRemoved { .. } => "player_removed",
            GameEvent::PlayerRenamed { .. } => "player_renamed",
            GameEvent::DurationChanged { .. } => "duration_changed",
            GameEvent::ContentModeChanged { .. } => "content_mode_changed",
            GameEvent::GameStarted { .. } => "game_started",
            GameEvent::PromptDrawn { .. } => "prompt_drawn",
            GameEvent::DeckReshuffled { .. } => "deck_reshuffled",
            GameEvent::TurnFinished { .. } => "turn_finished",
            GameEvent::VerdictRecorded { .. } => "verdict_recorded",
            GameEvent::Ticked { .. } => "ticked",
            GameEvent::GameOver { .. } => "game_over",
            GameEvent::Restarted { .. } => "restarted",
        }
    }

    /// True for events that change the phase.
    #[must_use]
    pub fn is_transition(&self) -> bool {
        matches!(
            self,
            GameEvent::GameStarted { .. }
                | GameEvent::TurnFinished { .. }
                | GameEvent::VerdictRecorded { .. }
                | GameEvent::GameOver { .. }
                | GameEvent::Restarted { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_match_serde_tag() {
        let events = [
            GameEvent::PlayerAdded { id: PlayerId::new(1) },
            GameEvent::Ticked { remaining: 3 },
            GameEvent::ContentModeChanged {
                mode: ContentMode::Sfw,
            },
            GameEvent::GameOver {
                winners: WinnerSet::new(),
            },
            GameEvent::Restarted { from: Phase::GameOver },
        ];
        for event in events {
            let value = serde_json::to_value(&event).unwrap();
            assert_eq!(value["event"], event.name());
        }
    }

    #[test]
    fn test_transitions() {
        assert!(GameEvent::TurnFinished { active: PlayerId::new(1) }.is_transition());
        assert!(!GameEvent::Ticked { remaining: 1 }.is_transition());
        assert!(!GameEvent::DeckReshuffled { cycle: 1 }.is_transition());
    }
}
