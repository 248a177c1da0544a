//! Active player / judge index pair.

use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};

/// Seat indices of the storyteller and the judge.
///
/// Invariant for `player_count >= 2`: `judge == (active + 1) % player_count`
/// and therefore `active != judge`.
///
/// ```
/// use aita_engine::turn::TurnOrder;
///
/// let mut turn = TurnOrder::first(3).unwrap();
/// assert_eq!((turn.active(), turn.judge()), (0, 1));
///
/// turn = turn.advance(3).unwrap();
/// assert_eq!((turn.active(), turn.judge()), (1, 2));
///
/// turn = turn.advance(3).unwrap();
/// assert_eq!((turn.active(), turn.judge()), (2, 0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TurnOrder {
    active: usize,
    judge: usize,
}

impl TurnOrder {
    /// Opening turn: seat 0 tells, seat 1 judges.
    ///
    /// Fails for rosters too small to separate the two roles.
    pub fn first(player_count: usize) -> Result<Self> {
        Self::at(0, player_count)
    }

    /// Turn with `active` telling and the next seat judging.
    pub fn at(active: usize, player_count: usize) -> Result<Self> {
        if player_count < 2 || active >= player_count {
            return Err(GameError::IndexOutOfRange {
                index: active.max(1),
                len: player_count,
            });
        }
        Ok(Self {
            active,
            judge: (active + 1) % player_count,
        })
    }

    /// The following turn: storyteller moves one seat on.
    pub fn advance(self, player_count: usize) -> Result<Self> {
        self.validate(player_count)?;
        Self::at((self.active + 1) % player_count, player_count)
    }

    /// Check both indices still point into a roster of `player_count`.
    pub fn validate(self, player_count: usize) -> Result<()> {
        for index in [self.active, self.judge] {
            if index >= player_count {
                return Err(GameError::IndexOutOfRange {
                    index,
                    len: player_count,
                });
            }
        }
        Ok(())
    }

    /// Storyteller seat.
    #[must_use]
    pub const fn active(self) -> usize {
        self.active
    }

    /// Judge seat.
    #[must_use]
    pub const fn judge(self) -> usize {
        self.judge
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_two_players() {
        let turn = TurnOrder::first(2).unwrap();
        assert_eq!((turn.active(), turn.judge()), (0, 1));

        let turn = turn.advance(2).unwrap();
        assert_eq!((turn.active(), turn.judge()), (1, 0));
    }

    #[test]
    fn test_too_few_players() {
        assert!(TurnOrder::first(0).is_err());
        assert_eq!(
            TurnOrder::first(1),
            Err(GameError::IndexOutOfRange { index: 1, len: 1 })
        );
    }

    #[test]
    fn test_full_rotation_visits_every_seat() {
        let n = 5;
        let mut turn = TurnOrder::first(n).unwrap();
        let mut seen = Vec::new();
        for _ in 0..n {
            seen.push(turn.active());
            assert_ne!(turn.active(), turn.judge());
            turn = turn.advance(n).unwrap();
        }
        assert_eq!(seen, vec![0, 1, 2, 3, 4]);
        assert_eq!(turn.active(), 0);
    }

    #[test]
    fn test_validate_after_shrink() {
        let turn = TurnOrder::at(2, 3).unwrap();
        assert_eq!((turn.active(), turn.judge()), (2, 0));
        assert_eq!(
            turn.validate(2),
            Err(GameError::IndexOutOfRange { index: 2, len: 2 })
        );
        assert!(turn.advance(2).is_err());
    }
}
