//! Roster manager: the ordered list of players.
//!
//! The roster is the only state shared between the setup surface and a
//! running game. It enforces its own size bounds; whether it may be edited
//! at all (only during setup) is decided by the game, which is the only
//! caller of the mutating methods below.

use im::Vector;
use thiserror::Error;
use tracing::debug;

use crate::core::player::{Player, PlayerId};
use crate::error::{GameError, Precondition, Result};

/// Why a roster is not ready to start a game.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StartBlocker {
    #[error("need at least {need} players, have {have}")]
    TooFewPlayers { have: usize, need: usize },

    #[error("{id} has no name")]
    UnnamedPlayer { id: PlayerId },
}

/// Ordered players with min/max bounds.
///
/// Players are stored in an `im::Vector` so snapshots share structure with
/// the live roster instead of copying it.
#[derive(Clone, Debug)]
pub struct Roster {
    players: Vector<Player>,
    /// Next id to hand out; `None` once the id space is spent.
    next_id: Option<PlayerId>,
    min: usize,
    max: usize,
}

impl Roster {
    /// Create a roster holding `min` blank players.
    pub fn new(min: usize, max: usize) -> Result<Self> {
        let mut roster = Self {
            players: Vector::new(),
            next_id: Some(PlayerId::new(1)),
            min,
            max,
        };
        roster.reset_to_minimum()?;
        Ok(roster)
    }

    /// `count` blank players with fresh ids, plus the id to resume from.
    /// Nothing is committed, so a failure leaves the roster untouched.
    fn fresh_players(&self, count: usize) -> Result<(Vector<Player>, Option<PlayerId>)> {
        let mut players = Vector::new();
        let mut next = self.next_id;
        for _ in 0..count {
            let id = next.ok_or(Precondition::IdsExhausted)?;
            next = id.next();
            players.push_back(Player::new(id));
        }
        Ok((players, next))
    }

    /// Append a blank player.
    pub fn add_player(&mut self) -> Result<Player> {
        if self.players.len() >= self.max {
            return Err(Precondition::RosterFull { max: self.max }.into());
        }

        let id = self.next_id.ok_or(Precondition::IdsExhausted)?;
        let player = Player::new(id);
        self.next_id = id.next();
        self.players.push_back(player.clone());
        debug!(player_id = %player.id, size = self.players.len(), "Added player");
        Ok(player)
    }

    /// Remove a player by id.
    ///
    /// Refused if the id is unknown or the roster is already at its floor.
    pub fn remove_player(&mut self, id: PlayerId) -> Result<Player> {
        let index = self.index_of(id).ok_or(Precondition::UnknownPlayer(id))?;
        if self.players.len() <= self.min {
            return Err(Precondition::RosterMinimum { min: self.min }.into());
        }

        let removed = self.players.remove(index);
        debug!(player_id = %id, size = self.players.len(), "Removed player");
        Ok(removed)
    }

    /// Replace a player's display name.
    ///
    /// Empty names are allowed here; `can_start` is where they matter.
    pub fn rename_player(&mut self, id: PlayerId, name: impl Into<String>) -> Result<()> {
        let index = self.index_of(id).ok_or(Precondition::UnknownPlayer(id))?;
        if let Some(player) = self.players.get_mut(index) {
            player.name = name.into();
        }
        Ok(())
    }

    /// First reason the roster cannot start a game, if any.
    #[must_use]
    pub fn start_blocker(&self) -> Option<StartBlocker> {
        if self.players.len() < self.min {
            return Some(StartBlocker::TooFewPlayers {
                have: self.players.len(),
                need: self.min,
            });
        }
        self.players
            .iter()
            .find(|p| !p.has_name())
            .map(|p| StartBlocker::UnnamedPlayer { id: p.id })
    }

    /// True iff the roster is large enough and every player is named.
    #[must_use]
    pub fn can_start(&self) -> bool {
        self.start_blocker().is_none()
    }

    /// Zero every tally, keeping names.
    pub fn reset_tallies(&mut self) {
        for player in self.players.iter_mut() {
            player.tally = 0;
        }
    }

    /// Replace everyone with `min` fresh blank players.
    ///
    /// Ids keep counting up; no id is handed out twice.
    pub fn reset_to_minimum(&mut self) -> Result<()> {
        let (players, next) = self.fresh_players(self.min)?;
        self.players = players;
        self.next_id = next;
        Ok(())
    }

    /// Add one to the tally of the player at `index`, returning the new tally.
    pub fn increment_tally(&mut self, index: usize) -> Result<u32> {
        let len = self.players.len();
        let player = self
            .players
            .get_mut(index)
            .ok_or(GameError::IndexOutOfRange { index, len })?;
        player.tally += 1;
        Ok(player.tally)
    }

    /// Player at a seat index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    /// Player by id.
    #[must_use]
    pub fn find(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Seat index of a player.
    #[must_use]
    pub fn index_of(&self, id: PlayerId) -> Option<usize> {
        self.players.iter().position(|p| p.id == id)
    }

    /// Iterate players in seat order.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    /// Structural-sharing copy of the players.
    #[must_use]
    pub fn players(&self) -> Vector<Player> {
        self.players.clone()
    }

    /// Number of players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// True if the roster has no players (only possible with a zero floor).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Minimum size.
    #[must_use]
    pub fn min(&self) -> usize {
        self.min
    }

    /// Maximum size.
    #[must_use]
    pub fn max(&self) -> usize {
        self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(names: &[&str]) -> Roster {
        let mut roster = Roster::new(2, 10).unwrap();
        while roster.len() < names.len() {
            roster.add_player().unwrap();
        }
        let ids: Vec<_> = roster.iter().map(|p| p.id).collect();
        for (id, name) in ids.into_iter().zip(names) {
            roster.rename_player(id, *name).unwrap();
        }
        roster
    }

    #[test]
    fn test_new_has_minimum_blank_players() {
        let roster = Roster::new(2, 10).unwrap();
        assert_eq!(roster.len(), 2);
        assert!(roster.iter().all(|p| p.name.is_empty() && p.tally == 0));
        assert_eq!(roster.get(0).map(|p| p.id), Some(PlayerId::new(1)));
        assert_eq!(roster.get(1).map(|p| p.id), Some(PlayerId::new(2)));
    }

    #[test]
    fn test_add_until_full() {
        let mut roster = Roster::new(2, 4).unwrap();
        let third = roster.add_player().unwrap();
        assert_eq!(third.id, PlayerId::new(3));
        roster.add_player().unwrap();

        let err = roster.add_player().unwrap_err();
        assert_eq!(err, GameError::Precondition(Precondition::RosterFull { max: 4 }));
        assert_eq!(roster.len(), 4);
    }

    #[test]
    fn test_remove_respects_floor() {
        let mut roster = Roster::new(2, 4).unwrap();
        let extra = roster.add_player().unwrap();

        let removed = roster.remove_player(extra.id).unwrap();
        assert_eq!(removed.id, extra.id);
        assert_eq!(roster.len(), 2);

        let first = roster.get(0).map(|p| p.id).unwrap();
        let err = roster.remove_player(first).unwrap_err();
        assert_eq!(err, GameError::Precondition(Precondition::RosterMinimum { min: 2 }));
        assert_eq!(roster.len(), 2);
    }

    #[test]
    fn test_remove_unknown() {
        let mut roster = Roster::new(2, 4).unwrap();
        roster.add_player().unwrap();
        let err = roster.remove_player(PlayerId::new(99)).unwrap_err();
        assert_eq!(err, GameError::Precondition(Precondition::UnknownPlayer(PlayerId::new(99))));
        assert_eq!(roster.len(), 3);
    }

    #[test]
    fn test_rename_allows_empty() {
        let mut roster = named(&["Alice", "Bob"]);
        let bob = roster.get(1).map(|p| p.id).unwrap();
        roster.rename_player(bob, "").unwrap();
        assert_eq!(roster.find(bob).map(|p| p.name.as_str()), Some(""));
    }

    #[test]
    fn test_can_start() {
        let roster = named(&["Alice", ""]);
        assert!(!roster.can_start());
        assert_eq!(
            roster.start_blocker(),
            Some(StartBlocker::UnnamedPlayer { id: PlayerId::new(2) })
        );

        let roster = named(&["Alice", "   "]);
        assert!(!roster.can_start());

        let roster = named(&["Alice", "Bob"]);
        assert!(roster.can_start());
    }

    #[test]
    fn test_increment_and_reset_tallies() {
        let mut roster = named(&["Alice", "Bob"]);
        assert_eq!(roster.increment_tally(1).unwrap(), 1);
        assert_eq!(roster.increment_tally(1).unwrap(), 2);
        assert_eq!(
            roster.increment_tally(2).unwrap_err(),
            GameError::IndexOutOfRange { index: 2, len: 2 }
        );

        roster.reset_tallies();
        assert!(roster.iter().all(|p| p.tally == 0));
        assert_eq!(roster.get(0).map(|p| p.name.as_str()), Some("Alice"));
    }

    #[test]
    fn test_reset_to_minimum_never_reuses_ids() {
        let mut roster = named(&["Alice", "Bob", "Carol"]);
        roster.reset_to_minimum().unwrap();

        assert_eq!(roster.len(), 2);
        let ids: Vec<_> = roster.iter().map(|p| p.id.raw()).collect();
        assert_eq!(ids, vec![4, 5]);
        assert!(roster.iter().all(|p| p.name.is_empty()));
    }

    #[test]
    fn test_last_id_is_handed_out_once() {
        let mut roster = Roster::new(2, 10).unwrap();
        roster.next_id = Some(PlayerId::new(u32::MAX));

        let last = roster.add_player().unwrap();
        assert_eq!(last.id, PlayerId::new(u32::MAX));

        let err = roster.add_player().unwrap_err();
        assert_eq!(err, GameError::Precondition(Precondition::IdsExhausted));
        assert_eq!(roster.len(), 3);
    }

    #[test]
    fn test_reset_without_ids_leaves_roster_intact() {
        let mut roster = named(&["Alice", "Bob", "Carol"]);
        roster.next_id = Some(PlayerId::new(u32::MAX));

        let err = roster.reset_to_minimum().unwrap_err();
        assert_eq!(err, GameError::Precondition(Precondition::IdsExhausted));
        let names: Vec<_> = roster.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob", "Carol"]);
    }

    #[test]
    fn test_players_snapshot_is_detached() {
        let mut roster = named(&["Alice", "Bob"]);
        let snapshot = roster.players();
        roster.increment_tally(0).unwrap();
        assert_eq!(snapshot[0].tally, 0);
        assert_eq!(roster.get(0).map(|p| p.tally), Some(1));
    }
}
