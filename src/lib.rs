//! # aita-engine
//!
//! Game-progression engine for a turn-based storytelling party game.
//!
//! Players take turns reading a prompt and telling a story about it. The
//! next player in the rotation judges whether the storyteller was the
//! asshole; a "yes" adds one to the storyteller's tally. A countdown ends
//! the session, and whoever has the highest tally wins.
//!
//! ## Design Principles
//!
//! 1. **One owner**: `Game` owns all mutable state. There are no globals
//!    and no implicit reactivity.
//!
//! 2. **Commands in, snapshots out**: front ends issue [`Command`]s and
//!    read [`Snapshot`]s. Observers are notified with [`GameEvent`]s.
//!
//! 3. **Reject, never corrupt**: an invalid command returns an error and
//!    leaves the game untouched.
//!
//! ## Modules
//!
//! - `core`: players, configuration, RNG, commands, session state
//! - `deck`: prompt corpora, content modes and non-repeating draw
//! - `roster`: player list with size bounds
//! - `turn`: storyteller/judge rotation
//! - `clock`: session countdown
//! - `score`: verdicts, winners, results
//! - `events`: change notification
//! - `rules`: the `Game` state machine
//!
//! ## Example
//!
//! ```
//! use aita_engine::{Game, GameConfig, Phase, PromptCorpus};
//!
//! let corpus = PromptCorpus::from_static(&["%% ate a coworker's lunch"]).unwrap();
//! let mut game = Game::new(GameConfig::new().with_seed(7), corpus).unwrap();
//!
//! let ids: Vec<_> = game.roster().iter().map(|p| p.id).collect();
//! game.rename_player(ids[0], "Alice").unwrap();
//! game.rename_player(ids[1], "Bob").unwrap();
//!
//! let snapshot = game.start_game().unwrap();
//! assert_eq!(snapshot.phase, Phase::PlayerTurn);
//! assert_eq!(game.personalized_prompt().as_deref(), Some("Alice ate a coworker's lunch"));
//!
//! game.finish_turn().unwrap();
//! let snapshot = game.submit_verdict(true).unwrap();
//! assert_eq!(snapshot.tallies(), vec![1, 0]);
//! assert_eq!(snapshot.active_player().map(|p| p.name.as_str()), Some("Bob"));
//! ```

pub mod clock;
pub mod core;
pub mod deck;
pub mod error;
pub mod events;
pub mod roster;
pub mod rules;
pub mod score;
pub mod turn;

// Re-export commonly used types
pub use crate::core::{
    format_clock, personalize, Command, CommandKind, CommandRecord, GameConfig, GameRng, Phase,
    Player, PlayerId, Snapshot,
};

pub use crate::clock::{ClockTick, Metronome, SessionClock};
pub use crate::deck::{ContentMode, Deck, PromptCorpus, PromptLibrary};
pub use crate::error::{ConfigError, GameError, Precondition, Result};
pub use crate::events::{ChannelObserver, EventLog, GameEvent, SessionObserver};
pub use crate::roster::{Roster, StartBlocker};
pub use crate::rules::{Game, QuantumReport};
pub use crate::score::{compute_winners, record_verdict, standings, GameResult, WinnerSet};
pub use crate::turn::TurnOrder;
