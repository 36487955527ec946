//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Player, Square};
use tracing::instrument;

/// Three board indices forming a row, column, or diagonal.
pub type Line = [usize; 3];

/// Winning combinations, in the order they are checked.
#[rustfmt::skip]
pub const WIN_CONDITIONS: [Line; 8] = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8], // Rows
    [0, 3, 6], [1, 4, 7], [2, 5, 8], // Columns
    [0, 4, 8], [2, 4, 6],            // Diagonals
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument(level = "trace")]
pub fn check_winner(board: &Board) -> Option<Player> {
    first_complete_line(board).map(|(player, _)| player)
}

pub(crate) fn first_complete_line(board: &Board) -> Option<(Player, Line)> {
    let squares = board.squares();
    WIN_CONDITIONS.iter().find_map(|&[a, b, c]| match squares[a] {
        Square::Occupied(player) if squares[b] == squares[a] && squares[c] == squares[a] => {
            Some((player, [a, b, c]))
        }
        _ => None,
    })
}
