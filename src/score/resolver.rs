//! Tally updates and winner computation.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::core::player::{Player, PlayerId};
use crate::error::{GameError, Result};
use crate::roster::Roster;

/// Players sharing the top tally. Ties of more than four spill to the heap.
pub type WinnerSet = SmallVec<[PlayerId; 4]>;

/// Apply a judge's verdict to the storyteller at `index`.
///
/// Returns the new tally when the verdict was "asshole", `None` otherwise.
/// This is an increment: the caller applies it once per round.
pub fn record_verdict(roster: &mut Roster, index: usize, is_asshole: bool) -> Result<Option<u32>> {
    if !is_asshole {
        // Still validate the seat so a stale index never goes unnoticed.
        roster.get(index).ok_or(GameError::IndexOutOfRange {
            index,
            len: roster.len(),
        })?;
        return Ok(None);
    }

    let tally = roster.increment_tally(index)?;
    debug!(seat = index, tally, "Verdict: asshole");
    Ok(Some(tally))
}

/// Everyone with the highest tally, in seat order.
///
/// Empty when nobody was ever judged (top tally zero) or the roster is empty.
pub fn compute_winners<'a>(players: impl IntoIterator<Item = &'a Player>) -> WinnerSet {
    let mut best = 0;
    let mut winners = WinnerSet::new();

    for player in players {
        if player.tally > best {
            best = player.tally;
            winners.clear();
            winners.push(player.id);
        } else if player.tally == best && best > 0 {
            winners.push(player.id);
        }
    }

    winners
}

/// Players ordered by tally, highest first; equal tallies keep seat order.
pub fn standings<'a>(players: impl IntoIterator<Item = &'a Player>) -> Vec<&'a Player> {
    let mut ranked: Vec<&Player> = players.into_iter().collect();
    ranked.sort_by(|a, b| b.tally.cmp(&a.tally));
    ranked
}

/// How a finished game turned out.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Nobody was judged the asshole even once.
    NoAsshole,
    /// A single biggest asshole.
    Winner(PlayerId),
    /// Several players share the top tally.
    Tie(WinnerSet),
}

impl GameResult {
    /// Classify a winner set.
    #[must_use]
    pub fn from_winners(winners: &WinnerSet) -> Self {
        match winners.as_slice() {
            [] => GameResult::NoAsshole,
            [only] => GameResult::Winner(*only),
            _ => GameResult::Tie(winners.clone()),
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Tie(ps) => ps.contains(&player),
            GameResult::NoAsshole => false,
        }
    }
}
