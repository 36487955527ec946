//! Pure tic-tac-toe game logic.
//!
//! # Architecture
//!
//! - **Rules engine**: [`GameState`] validates and applies moves,
//!   [`evaluate_terminal`] detects wins and draws in a fixed line order.
//! - **Move selector**: [`Selector`] runs an exhaustive minimax search for
//!   the automated player.
//! - **Tally**: [`ScoreTally`] counts finished games for a session.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameState, Player, select_move};
//!
//! let state = GameState::new().apply_move(0, Player::X)?;
//! let reply = select_move(state.board(), Player::O).expect("board has room");
//! let state = state.apply_move(reply, Player::O)?;
//! assert_eq!(state.current_player(), Player::X);
//! # Ok::<(), tictactoe_core::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod audit;
mod invariants;
mod position;
mod rules;
mod score;
mod selector;
mod state;
mod types;

pub use action::{InvalidMove, Move, MoveError};
pub use audit::{AuditReport, audit};
pub use invariants::{
    BalancedMarks, GameInvariants, HistoryMatchesBoard, Invariant, InvariantSet,
    InvariantViolation, StatusMatchesBoard,
};
pub use position::Position;
pub use rules::{Line, TerminalResult, WIN_CONDITIONS, check_winner, evaluate_terminal, is_full};
pub use score::ScoreTally;
pub use selector::{Scoring, Selector, minimax, select_move};
pub use state::{GameState, GameStatus};
pub use types::{Board, CELL_COUNT, ParseBoardError, Player, Square};
