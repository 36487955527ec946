//! Game state machine for tic-tac-toe.
//!
//! A [`GameState`] is an owned value: moves are validated against it and
//! produce the next state, leaving the original untouched. `Won` and
//! `Draw` are terminal; the only way out is a fresh state from
//! [`GameState::reset`].

use crate::action::{InvalidMove, Move, MoveError};
use crate::invariants::{GameInvariants, InvariantSet};
use crate::rules::{self, Line, TerminalResult};
use crate::types::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

/// Complete game state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Player to move; frozen once the game ends.
    current_player: Player,
    /// Game status.
    status: GameStatus,
    /// Moves played, oldest first.
    history: Vec<Move>,
    /// The completed line when the game was won.
    winning_line: Option<Line>,
}

impl GameState {
    /// Creates a new game: empty board, X to move, in progress.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
            winning_line: None,
        }
    }

    /// Returns a fresh game. Equivalent to [`GameState::new`].
    #[instrument]
    pub fn reset() -> Self {
        Self::new()
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current player.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the winning line if the game was won.
    pub fn winning_line(&self) -> Option<Line> {
        self.winning_line
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Validates and applies `player`'s mark at `index`, returning the next state.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvalidMove`] if the game is over, the index is
    /// off the board, the square is taken, or it is not `player`'s turn.
    /// `self` is never modified.
    #[instrument(skip(self), fields(current = %self.current_player, status = ?self.status))]
    pub fn apply_move(&self, index: usize, player: Player) -> Result<GameState, MoveError> {
        self.check_move(index, player)?;

        let mut next = self.clone();
        next.board.set(index, Square::Occupied(player))?;
        let mv = Move::new(player, index);
        next.history.push(mv);

        match rules::evaluate_terminal(&next.board) {
            TerminalResult::Won(winner, line) => {
                next.status = GameStatus::Won(winner);
                next.winning_line = Some(line);
            }
            TerminalResult::Draw => next.status = GameStatus::Draw,
            TerminalResult::None => next.current_player = player.opponent(),
        }

        debug_assert!(
            GameInvariants::check_all(&next).is_ok(),
            "invariants violated after {index} by {player}"
        );
        debug!(%mv, status = ?next.status, "Move applied");
        Ok(next)
    }

    /// Checks whether `player` may place a mark at `index`.
    pub fn check_move(&self, index: usize, player: Player) -> Result<(), MoveError> {
        if self.is_over() {
            return Err(InvalidMove::GameOver.into());
        }
        match self.board.get(index) {
            None => Err(InvalidMove::OutOfBounds(index).into()),
            Some(Square::Occupied(_)) => Err(InvalidMove::Occupied(index).into()),
            Some(Square::Empty) if player != self.current_player => {
                Err(InvalidMove::WrongPlayer(player).into())
            }
            Some(Square::Empty) => Ok(()),
        }
    }

    /// Applies a move for whoever is to move.
    pub fn play(&self, index: usize) -> Result<GameState, MoveError> {
        self.apply_move(index, self.current_player)
    }

    /// Replays board indices from a fresh game, alternating from X.
    #[instrument]
    pub fn replay(indices: &[usize]) -> Result<GameState, MoveError> {
        indices
            .iter()
            .try_fold(GameState::new(), |state, &index| state.play(index))
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
