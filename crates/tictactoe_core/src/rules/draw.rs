//! Draw detection logic for tic-tac-toe.

use crate::types::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner indicates a draw.
#[instrument(level = "trace")]
pub fn is_full(board: &Board) -> bool {
    no_empty_squares(board)
}

pub(crate) fn no_empty_squares(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}
