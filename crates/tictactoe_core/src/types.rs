//! Core domain types for tic-tac-toe.

use crate::action::{InvalidMove, MoveError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from its nine squares in row-major order.
    pub fn from_squares(squares: [Square; CELL_COUNT]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position (0-8).
    pub fn get(&self, pos: usize) -> Option<Square> {
        self.squares.get(pos).copied()
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: usize, square: Square) -> Result<(), MoveError> {
        let slot = self
            .squares
            .get_mut(pos)
            .ok_or(MoveError::InvalidMove(InvalidMove::OutOfBounds(pos)))?;
        *slot = square;
        Ok(())
    }

    /// Checks if a square is empty. Out-of-range positions are never empty.
    pub fn is_empty(&self, pos: usize) -> bool {
        matches!(self.get(pos), Some(Square::Empty))
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; CELL_COUNT] {
        &self.squares
    }

    /// Indices of the empty squares in ascending order.
    pub fn empty_squares(&self) -> impl Iterator<Item = usize> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, square)| **square == Square::Empty)
            .map(|(pos, _)| pos)
    }

    /// Number of marks `player` has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|square| **square == Square::Occupied(player))
            .count()
    }

    /// The player whose turn it is if X always opens.
    pub fn side_to_move(&self) -> Player {
        if self.count(Player::X) > self.count(Player::O) {
            Player::O
        } else {
            Player::X
        }
    }

    // Search-only accessor; callers iterate 0..CELL_COUNT.
    pub(crate) fn square_mut(&mut self, pos: usize) -> &mut Square {
        &mut self.squares[pos]
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(Player::X) => "X".to_string(),
                    Square::Occupied(Player::O) => "O".to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

/// Error parsing a board from its compact text form.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ParseBoardError {
    /// The input did not describe exactly nine squares.
    #[display("expected 9 squares, found {}", _0)]
    WrongLength(usize),
    /// A character was not a mark or an empty marker.
    #[display("unexpected character {:?} at square {}", _0, _1)]
    BadSquare(char, usize),
}

impl std::error::Error for ParseBoardError {}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses nine squares: `X`, `O`, or one of `.`, `-`, `_`, ` ` for empty.
    /// Row separators (`/` or `|`) are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().filter(|c| !matches!(c, '/' | '|')).collect();
        if chars.len() != CELL_COUNT {
            return Err(ParseBoardError::WrongLength(chars.len()));
        }

        let mut squares = [Square::Empty; CELL_COUNT];
        for (pos, c) in chars.into_iter().enumerate() {
            squares[pos] = match c.to_ascii_uppercase() {
                'X' => Square::Occupied(Player::X),
                'O' => Square::Occupied(Player::O),
                '.' | '-' | '_' | ' ' => Square::Empty,
                other => return Err(ParseBoardError::BadSquare(other, pos)),
            };
        }
        Ok(Self { squares })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_compact_board() {
        let board: Board = "XX./.O./...".parse().expect("valid board");
        assert_eq!(board.get(0), Some(Square::Occupied(Player::X)));
        assert_eq!(board.get(4), Some(Square::Occupied(Player::O)));
        assert_eq!(board.empty_squares().count(), 6);
        assert_eq!(board.side_to_move(), Player::O);
    }

    #[test]
    fn test_empty_squares_lists_open_indices_in_order() {
        let board: Board = "X.O.X.O..".parse().expect("valid board");
        let open: Vec<usize> = board.empty_squares().collect();
        assert_eq!(open, vec![1, 3, 5, 7, 8]);
        assert!(open.iter().all(|&i| board.is_empty(i)));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!("XO".parse::<Board>(), Err(ParseBoardError::WrongLength(2)));
        assert_eq!(
            "XOZ......".parse::<Board>(),
            Err(ParseBoardError::BadSquare('Z', 2))
        );
    }

    #[test]
    fn test_set_out_of_bounds() {
        let mut board = Board::new();
        assert!(board.set(9, Square::Occupied(Player::X)).is_err());
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_display_numbers_empty_squares() {
        let mut board = Board::new();
        board.set(4, Square::Occupied(Player::X)).unwrap();
        assert_eq!(board.display(), "1|2|3\n-+-+-\n4|X|6\n-+-+-\n7|8|9");
    }
}
