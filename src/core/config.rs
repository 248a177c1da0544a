//! Game configuration.
//!
//! `GameConfig` carries the tunables a front end may want to change:
//! roster bounds, the default session length, the prompt placeholder token
//! and an optional RNG seed. Everything has a sensible default so most
//! callers only need `GameConfig::default()`.

use serde::{Deserialize, Serialize};

use crate::deck::ContentMode;
use crate::error::ConfigError;

/// Default session length: five minutes.
pub const DEFAULT_DURATION_SECS: u32 = 300;

/// Token replaced by the active player's name when a prompt is shown.
pub const DEFAULT_PLACEHOLDER: &str = "%%";

/// Fewest players a game can run with (one storyteller, one judge).
pub const MIN_PLAYERS: usize = 2;

/// Largest roster the setup surface accepts.
pub const MAX_PLAYERS: usize = 10;

/// Engine configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Minimum roster size (also the size of a freshly reset roster).
    pub min_players: usize,

    /// Maximum roster size.
    pub max_players: usize,

    /// Session length used at construction and after a restart.
    pub default_duration_secs: u32,

    /// Durations a setup screen offers. Informational; any positive
    /// duration is accepted by `set_duration`.
    pub duration_presets_secs: Vec<u32>,

    /// Placeholder token embedded in prompts.
    pub placeholder: String,

    /// RNG seed. `None` draws one from entropy.
    pub seed: Option<u64>,

    /// Keep player names when restarting instead of resetting to a blank
    /// minimal roster.
    pub preserve_roster_on_restart: bool,

    /// Prompt set dealt from when the game is created.
    pub content_mode: ContentMode,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_players: MIN_PLAYERS,
            max_players: MAX_PLAYERS,
            default_duration_secs: DEFAULT_DURATION_SECS,
            duration_presets_secs: vec![300, 600, 1200],
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            seed: None,
            preserve_roster_on_restart: false,
            content_mode: ContentMode::Normal,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set roster bounds.
    #[must_use]
    pub fn with_player_bounds(mut self, min: usize, max: usize) -> Self {
        self.min_players = min;
        self.max_players = max;
        self
    }

    /// Set the default session length.
    #[must_use]
    pub fn with_duration(mut self, secs: u32) -> Self {
        self.default_duration_secs = secs;
        self
    }

    /// Set the RNG seed for reproducible decks.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the placeholder token.
    #[must_use]
    pub fn with_placeholder(mut self, token: impl Into<String>) -> Self {
        self.placeholder = token.into();
        self
    }

    /// Keep names across restarts.
    #[must_use]
    pub fn preserving_roster(mut self) -> Self {
        self.preserve_roster_on_restart = true;
        self
    }

    /// Check the configuration is usable.
    #[must_use]
    pub fn with_content_mode(mut self, mode: ContentMode) -> Self {
        self.content_mode = mode;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_players < MIN_PLAYERS || self.max_players < self.min_players {
            return Err(ConfigError::InvalidPlayerBounds {
                min: self.min_players,
                max: self.max_players,
            });
        }
        if self.default_duration_secs == 0 {
            return Err(ConfigError::InvalidDuration(self.default_duration_secs));
        }
        if let Some(&bad) = self.duration_presets_secs.iter().find(|&&d| d == 0) {
            return Err(ConfigError::InvalidDuration(bad));
        }
        if self.placeholder.is_empty() {
            return Err(ConfigError::EmptyPlaceholder);
        }
        Ok(())
    }
}
