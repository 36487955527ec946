//! First-class invariants for tic-tac-toe.
//!
//! Invariants are logical properties that must hold for every state the
//! engine produces. They are checked in debug builds after each move and
//! are testable independently.

use crate::rules::{self, TerminalResult};
use crate::state::{GameState, GameStatus};
use crate::types::{Player, Square};
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        warn!(invariant = I::description(), "Invariant violated");
        violations.push(InvariantViolation::new(I::description()));
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        collect::<S, I1>(state, &mut violations);
        collect::<S, I2>(state, &mut violations);
        collect::<S, I3>(state, &mut violations);

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// X opens, so X has the same number of marks as O or one more.
pub struct BalancedMarks;

impl Invariant<GameState> for BalancedMarks {
    fn holds(state: &GameState) -> bool {
        let x = state.board().count(Player::X);
        let o = state.board().count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X has as many marks as O or exactly one more"
    }
}

/// Every occupied square was produced by exactly one recorded move.
pub struct HistoryMatchesBoard;

impl Invariant<GameState> for HistoryMatchesBoard {
    fn holds(state: &GameState) -> bool {
        let filled = state
            .board()
            .squares()
            .iter()
            .filter(|s| **s != Square::Empty)
            .count();
        filled == state.history().len()
            && state
                .history()
                .iter()
                .all(|m| state.board().get(m.index) == Some(Square::Occupied(m.player)))
    }

    fn description() -> &'static str {
        "move history accounts for every mark on the board"
    }
}

/// The stored status and winning line agree with a fresh evaluation.
pub struct StatusMatchesBoard;

impl Invariant<GameState> for StatusMatchesBoard {
    fn holds(state: &GameState) -> bool {
        match (rules::evaluate(state.board()), state.status()) {
            (TerminalResult::None, GameStatus::InProgress) => state.winning_line().is_none(),
            (TerminalResult::Draw, GameStatus::Draw) => state.winning_line().is_none(),
            (TerminalResult::Won(winner, line), GameStatus::Won(recorded)) => {
                winner == recorded && state.winning_line() == Some(line)
            }
            _ => false,
        }
    }

    fn description() -> &'static str {
        "status reflects the board's terminal evaluation"
    }
}

/// All invariants the engine maintains.
pub type GameInvariants = (BalancedMarks, HistoryMatchesBoard, StatusMatchesBoard);
