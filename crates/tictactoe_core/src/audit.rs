//! Exhaustive audit of the selector against every opponent line.
//!
//! The opponent branches on every legal move while the selector answers
//! with its single chosen move, so each leaf is one complete game the
//! opponent could force. A sound selector never reaches a losing leaf.

use crate::selector::{Scoring, Selector};
use crate::state::{GameState, GameStatus};
use crate::types::Player;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

/// Outcome counts over every game the opponent can steer to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditReport {
    /// Side played by the selector.
    pub automated: Player,
    /// Scoring mode the selector used.
    pub scoring: Scoring,
    /// Distinct complete games explored.
    pub games: u64,
    /// Games the selector won.
    pub automated_wins: u64,
    /// Drawn games.
    pub draws: u64,
    /// Games the opponent won.
    pub opponent_wins: u64,
    /// Board indices of the first losing game found, if any.
    pub first_loss: Option<Vec<usize>>,
}

impl AuditReport {
    fn new(automated: Player, scoring: Scoring) -> Self {
        Self {
            automated,
            scoring,
            games: 0,
            automated_wins: 0,
            draws: 0,
            opponent_wins: 0,
            first_loss: None,
        }
    }

    /// True when the selector lost no game.
    pub fn is_unbeaten(&self) -> bool {
        self.opponent_wins == 0
    }

    fn tally(&mut self, state: &GameState) {
        self.games += 1;
        match state.status() {
            GameStatus::Won(winner) if winner == self.automated => self.automated_wins += 1,
            GameStatus::Won(_) => {
                self.opponent_wins += 1;
                if self.first_loss.is_none() {
                    let line: Vec<usize> = state.history().iter().map(|m| m.index).collect();
                    warn!(?line, "Selector lost a game");
                    self.first_loss = Some(line);
                }
            }
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => {}
        }
    }
}

/// Plays the selector as `automated` against every opponent move sequence.
#[instrument]
pub fn audit(automated: Player, scoring: Scoring) -> AuditReport {
    let selector = Selector::new(automated).with_scoring(scoring);
    let mut report = AuditReport::new(automated, scoring);
    explore(&selector, GameState::new(), &mut report);
    info!(
        games = report.games,
        wins = report.automated_wins,
        draws = report.draws,
        losses = report.opponent_wins,
        "Audit finished"
    );
    report
}

fn explore(selector: &Selector, state: GameState, report: &mut AuditReport) {
    if state.is_over() {
        report.tally(&state);
        return;
    }

    if state.current_player() == selector.player() {
        let next = selector
            .select_move(state.board())
            .and_then(|index| state.play(index).ok());
        if let Some(next) = next {
            explore(selector, next, report);
        }
        return;
    }

    for index in state.board().empty_squares() {
        if let Ok(next) = state.play(index) {
            explore(selector, next, report);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_player_never_loses() {
        let report = audit(Player::O, Scoring::Plain);
        assert!(report.games > 0);
        assert!(report.is_unbeaten(), "lost via {:?}", report.first_loss);
        assert_eq!(
            report.games,
            report.automated_wins + report.draws + report.opponent_wins
        );
    }
}
