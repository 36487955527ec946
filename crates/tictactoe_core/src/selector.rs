//! Exhaustive minimax move selection.
//!
//! The automated player searches every continuation of the position to
//! the end of the game. There is no pruning, no depth limit, and no
//! transposition table: a 3x3 board has at most 9! move orders.
//!
//! Candidates are tried in ascending index order and only a strictly
//! better score replaces the current choice, so among equally good moves
//! the lowest index is played.

use crate::rules::{self, TerminalResult};
use crate::types::{Board, CELL_COUNT, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Score assigned to a finished game with [`Scoring::DepthAdjusted`].
const DEPTH_WIN: i32 = 10;

/// How leaf positions are scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scoring {
    /// +1 for a win, -1 for a loss, 0 for a draw, regardless of depth.
    #[default]
    Plain,
    /// Wins score higher the sooner they happen and losses score higher
    /// the later they happen.
    DepthAdjusted,
}

/// Minimax selector playing on behalf of one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selector {
    player: Player,
    scoring: Scoring,
}

impl Selector {
    /// Creates a selector for `player` with plain scoring.
    pub fn new(player: Player) -> Self {
        Self {
            player,
            scoring: Scoring::Plain,
        }
    }

    /// Returns the selector with a different scoring mode.
    pub fn with_scoring(mut self, scoring: Scoring) -> Self {
        self.scoring = scoring;
        self
    }

    /// The side this selector maximizes for.
    pub fn player(&self) -> Player {
        self.player
    }

    /// The scoring mode in use.
    pub fn scoring(&self) -> Scoring {
        self.scoring
    }

    /// Picks the best empty square for the selector's player.
    ///
    /// The caller's board is not modified. Returns `None` when there is
    /// no empty square; on a board that is already won the result is a
    /// legal but meaningless square.
    #[instrument(skip(self, board), fields(player = %self.player, scoring = ?self.scoring))]
    pub fn select_move(&self, board: &Board) -> Option<usize> {
        let mut scratch = *board;
        let mut best: Option<(usize, i32)> = None;

        for index in 0..CELL_COUNT {
            if scratch.squares()[index] != Square::Empty {
                continue;
            }
            *scratch.square_mut(index) = Square::Occupied(self.player);
            let score = self.minimax_at(&mut scratch, 1, false);
            *scratch.square_mut(index) = Square::Empty;

            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((index, score));
            }
        }

        if let Some((index, score)) = best {
            debug!(index, score, "Selected move");
        }
        best.map(|(index, _)| index)
    }

    /// Scores `board` for the selector's player by searching to the end.
    ///
    /// `maximizing` says whether the selector's player is to move. The
    /// board is restored before returning.
    pub fn minimax(&self, board: &mut Board, maximizing: bool) -> i32 {
        self.minimax_at(board, 0, maximizing)
    }

    fn minimax_at(&self, board: &mut Board, depth: i32, maximizing: bool) -> i32 {
        match rules::evaluate(board) {
            TerminalResult::Won(winner, _) => return self.leaf(winner == self.player, depth),
            TerminalResult::Draw => return 0,
            TerminalResult::None => {}
        }

        let mover = if maximizing {
            self.player
        } else {
            self.player.opponent()
        };
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for index in 0..CELL_COUNT {
            if board.squares()[index] != Square::Empty {
                continue;
            }
            *board.square_mut(index) = Square::Occupied(mover);
            let score = self.minimax_at(board, depth + 1, !maximizing);
            *board.square_mut(index) = Square::Empty;

            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }

        best
    }

    fn leaf(&self, won: bool, depth: i32) -> i32 {
        match (self.scoring, won) {
            (Scoring::Plain, true) => 1,
            (Scoring::Plain, false) => -1,
            (Scoring::DepthAdjusted, true) => DEPTH_WIN - depth,
            (Scoring::DepthAdjusted, false) => depth - DEPTH_WIN,
        }
    }
}

/// Picks the best empty square for `player` with plain scoring.
pub fn select_move(board: &Board, player: Player) -> Option<usize> {
    Selector::new(player).select_move(board)
}

/// Plain minimax score of `board` from `player`'s point of view.
pub fn minimax(board: &mut Board, player: Player, maximizing: bool) -> i32 {
    Selector::new(player).minimax(board, maximizing)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocks_open_row() {
        // X X . / . O . / . . .
        let board: Board = "XX..O....".parse().unwrap();
        assert_eq!(select_move(&board, Player::O), Some(2));
    }

    #[test]
    fn test_takes_immediate_win() {
        // O O . / X X . / X . .
        let board: Board = "OO.XX.X..".parse().unwrap();
        assert_eq!(select_move(&board, Player::O), Some(2));
    }

    #[test]
    fn test_board_left_untouched() {
        let board: Board = "X...O...X".parse().unwrap();
        let before = board;
        let _ = select_move(&board, Player::O);
        assert_eq!(board, before);
    }

    #[test]
    fn test_full_board_has_no_move() {
        let board: Board = "XOXOXXOXO".parse().unwrap();
        assert_eq!(select_move(&board, Player::O), None);
    }

    #[test]
    fn test_minimax_restores_board() {
        let mut board: Board = "X...O....".parse().unwrap();
        let before = board;
        assert_eq!(minimax(&mut board, Player::X, true), 0);
        assert_eq!(board, before);
    }

    #[test]
    fn test_minimax_leaf_scores() {
        let mut won: Board = "OOOXX.X..".parse().unwrap();
        assert_eq!(minimax(&mut won, Player::O, false), 1);
        assert_eq!(minimax(&mut won, Player::X, true), -1);

        let mut drawn: Board = "XOXOXXOXO".parse().unwrap();
        assert_eq!(minimax(&mut drawn, Player::O, true), 0);
    }

    #[test]
    fn test_takes_win_instead_of_blocking() {
        // O O . / . X . / X X .  X threatens 2 and 8; O wins at 2.
        let board: Board = "OO..X.XX.".parse().unwrap();
        assert_eq!(select_move(&board, Player::O), Some(2));
    }

    #[test]
    fn test_depth_adjusted_prefers_faster_win() {
        // O . . / X O X / . X .  O wins now at 8, or forks at 1 and wins later.
        let board: Board = "O..XOX.X.".parse().unwrap();
        assert_eq!(select_move(&board, Player::O), Some(1));

        let selector = Selector::new(Player::O).with_scoring(Scoring::DepthAdjusted);
        assert_eq!(selector.select_move(&board), Some(8));
    }
}
