//! Player identification and per-player data.
//!
//! ## PlayerId
//!
//! Opaque identifier handed out by the roster. Ids are allocated
//! monotonically and never reused, so a presentation layer can key
//! widgets on them across edits and restarts.
//!
//! ## Player
//!
//! A roster entry: id, display name and tally (number of rounds the
//! player was judged the asshole).

use serde::{Deserialize, Serialize};

/// Unique player identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The id following this one in allocation order, or `None` once the
    /// id space is used up.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(raw) => Some(Self(raw)),
            None => None,
        }
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player#{}", self.0)
    }
}

/// A single roster entry.
///
/// Names may be blank while the roster is being edited; the game refuses
/// to start until every name has visible characters.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    /// Immutable identifier.
    pub id: PlayerId,
    /// Display name.
    pub name: String,
    /// Times judged the asshole this session.
    pub tally: u32,
}

impl Player {
    /// Create a blank player with zero tally.
    #[must_use]
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            name: String::new(),
            tally: 0,
        }
    }

    /// Create a named player (used by tests and preset rosters).
    #[must_use]
    pub fn named(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            tally: 0,
        }
    }

    /// True if the name contains something other than whitespace.
    #[must_use]
    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }
}
