//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the search can evaluate hypothetical positions.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{Line, WIN_CONDITIONS, check_winner};

use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Terminal evaluation of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerminalResult {
    /// The game continues.
    None,
    /// A player completed a line. The line is the first match in
    /// [`WIN_CONDITIONS`] order.
    Won(Player, Line),
    /// The board is full and nobody completed a line.
    Draw,
}

impl TerminalResult {
    /// Returns true for `Won` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, TerminalResult::None)
    }
}

/// Evaluates whether the board is won, drawn, or still open.
#[instrument(level = "trace")]
pub fn evaluate_terminal(board: &Board) -> TerminalResult {
    evaluate(board)
}

// Uninstrumented for the search hot path.
pub(crate) fn evaluate(board: &Board) -> TerminalResult {
    if let Some((player, line)) = win::first_complete_line(board) {
        TerminalResult::Won(player, line)
    } else if draw::no_empty_squares(board) {
        TerminalResult::Draw
    } else {
        TerminalResult::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_row_win_reported_with_line() {
        let board: Board = "XXXOO....".parse().unwrap();
        assert_eq!(
            evaluate_terminal(&board),
            TerminalResult::Won(Player::X, [0, 1, 2])
        );
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board: Board = "XOXOXOOXO".parse().unwrap();
        assert_eq!(evaluate_terminal(&board), TerminalResult::Draw);
    }

    #[test]
    fn test_open_board_continues() {
        let board: Board = "X...O....".parse().unwrap();
        assert_eq!(evaluate_terminal(&board), TerminalResult::None);
        assert!(!evaluate_terminal(&board).is_terminal());
    }

    #[test]
    fn test_win_on_full_board_beats_draw() {
        // X X X / O O X / X O O
        let board: Board = "XXXOOXXOO".parse().unwrap();
        assert_eq!(
            evaluate_terminal(&board),
            TerminalResult::Won(Player::X, [0, 1, 2])
        );
    }

    #[test]
    fn test_earliest_line_reported_when_two_complete() {
        // X completes row [0,1,2] and column [0,3,6].
        let board: Board = "XXXXOOXO.".parse().unwrap();
        assert_eq!(
            evaluate_terminal(&board),
            TerminalResult::Won(Player::X, [0, 1, 2])
        );
    }
}
