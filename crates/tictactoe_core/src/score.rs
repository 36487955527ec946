//! Win/draw tallies across the games of one session.

use crate::state::GameStatus;
use crate::types::Player;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Counts of finished games. Counters only ever go up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreTally {
    x_wins: u32,
    o_wins: u32,
    draws: u32,
}

impl ScoreTally {
    /// Creates an all-zero tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Games won by X.
    pub fn x_wins(&self) -> u32 {
        self.x_wins
    }

    /// Games won by O.
    pub fn o_wins(&self) -> u32 {
        self.o_wins
    }

    /// Games drawn.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// Games won by `player`.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }

    /// Total finished games.
    pub fn games(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }

    /// Records a finished game. Returns false and leaves the tally alone
    /// for a game still in progress.
    #[instrument(skip(self))]
    pub fn record(&mut self, status: GameStatus) -> bool {
        match status {
            GameStatus::InProgress => return false,
            GameStatus::Won(Player::X) => self.x_wins += 1,
            GameStatus::Won(Player::O) => self.o_wins += 1,
            GameStatus::Draw => self.draws += 1,
        }
        debug!(x = self.x_wins, o = self.o_wins, draws = self.draws, "Tally updated");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_counts_each_outcome() {
        let mut tally = ScoreTally::new();
        assert!(tally.record(GameStatus::Won(Player::X)));
        assert!(tally.record(GameStatus::Won(Player::O)));
        assert!(tally.record(GameStatus::Won(Player::O)));
        assert!(tally.record(GameStatus::Draw));

        assert_eq!(tally.x_wins(), 1);
        assert_eq!(tally.wins(Player::O), 2);
        assert_eq!(tally.draws(), 1);
        assert_eq!(tally.games(), 4);
    }

    #[test]
    fn test_in_progress_is_not_counted() {
        let mut tally = ScoreTally::new();
        assert!(!tally.record(GameStatus::InProgress));
        assert_eq!(tally, ScoreTally::new());
    }
}
