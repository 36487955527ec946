//! First-class move and error types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They represent
//! the player's intent and can be validated independently of execution.

use crate::position::Position;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark on a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// Board index (0-8) where the mark was placed.
    pub index: usize,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, index: usize) -> Self {
        Self { player, index }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match Position::from_index(self.index) {
            Some(pos) => write!(f, "{} -> {}", self.player, pos.label()),
            None => write!(f, "{} -> #{}", self.player, self.index),
        }
    }
}

/// Why a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum InvalidMove {
    /// The index is outside 0-8.
    #[display("square {} is off the board", _0)]
    OutOfBounds(usize),

    /// The square already holds a mark.
    #[display("square {} is already occupied", _0)]
    Occupied(usize),

    /// The game has already been won or drawn.
    #[display("the game is already over")]
    GameOver,

    /// It's not this player's turn.
    #[display("it's not {}'s turn", _0)]
    WrongPlayer(Player),
}

/// Error that can occur when applying a move.
///
/// Rejection is the only failure the engine knows about; a rejected
/// move leaves the game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum MoveError {
    /// The move cannot be applied to the current state.
    #[display("Invalid move: {}", _0)]
    InvalidMove(InvalidMove),
}

impl MoveError {
    /// Returns the rejection reason.
    pub fn reason(&self) -> InvalidMove {
        match self {
            MoveError::InvalidMove(reason) => *reason,
        }
    }
}

impl From<InvalidMove> for MoveError {
    fn from(reason: InvalidMove) -> Self {
        MoveError::InvalidMove(reason)
    }
}

impl std::error::Error for MoveError {}
