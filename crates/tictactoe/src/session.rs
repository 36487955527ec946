//! Game session: the current game, the opponent mode, and the tally.

use serde::{Deserialize, Serialize};
use tictactoe_core::{GameState, GameStatus, Line, Player, ScoreTally, Scoring, Selector};
use tracing::{debug, info, instrument};

/// Who plays O.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Opponent {
    /// A second person at the same keyboard.
    Human,
    /// The minimax selector.
    #[default]
    Computer,
}

/// Side the computer plays when it is the opponent.
pub const COMPUTER: Player = Player::O;

/// What a successful move did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// A mark was placed and the game continues.
    Moved {
        /// Who moved.
        player: Player,
        /// Where.
        index: usize,
    },
    /// The move won the game.
    Won {
        /// The winner.
        player: Player,
        /// The completed line, for highlighting.
        line: Line,
    },
    /// The move filled the board without a winner.
    Draw,
}

/// A sequence of games sharing one opponent mode and one tally.
#[derive(Debug, Clone)]
pub struct Session {
    game: GameState,
    opponent: Opponent,
    selector: Selector,
    tally: ScoreTally,
}

impl Session {
    /// Starts a session with plain minimax scoring.
    #[instrument]
    pub fn new(opponent: Opponent) -> Self {
        Self::with_scoring(opponent, Scoring::Plain)
    }

    /// Starts a session whose computer uses `scoring`.
    #[instrument]
    pub fn with_scoring(opponent: Opponent, scoring: Scoring) -> Self {
        info!(?opponent, ?scoring, "Starting session");
        Self {
            game: GameState::new(),
            opponent,
            selector: Selector::new(COMPUTER).with_scoring(scoring),
            tally: ScoreTally::new(),
        }
    }

    /// The current game.
    pub fn state(&self) -> &GameState {
        &self.game
    }

    /// The opponent mode.
    pub fn opponent(&self) -> Opponent {
        self.opponent
    }

    /// Finished-game counts.
    pub fn tally(&self) -> &ScoreTally {
        &self.tally
    }

    /// True when the next move belongs to the computer.
    pub fn awaits_computer(&self) -> bool {
        self.opponent == Opponent::Computer
            && !self.game.is_over()
            && self.game.current_player() == COMPUTER
    }

    /// Places the current player's mark for a person at the keyboard.
    ///
    /// Returns `None` without changing anything when the move is not
    /// allowed, including clicks during the computer's turn.
    #[instrument(skip(self))]
    pub fn click(&mut self, index: usize) -> Option<SessionEvent> {
        if self.awaits_computer() {
            debug!(index, "Ignoring click during computer turn");
            return None;
        }
        self.apply(index, self.game.current_player())
    }

    /// Lets the computer move, if it is its turn.
    ///
    /// A reply requested for a game that has since been restarted or
    /// finished is dropped.
    #[instrument(skip(self))]
    pub fn computer_move(&mut self) -> Option<SessionEvent> {
        if !self.awaits_computer() {
            debug!("No computer move pending");
            return None;
        }
        let index = self.selector.select_move(self.game.board())?;
        self.apply(index, COMPUTER)
    }

    /// Starts a new game. The tally is kept.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!(games = self.tally.games(), "Restarting game");
        self.game = GameState::reset();
    }

    /// Status line for the current game.
    pub fn status_text(&self) -> String {
        match self.game.status() {
            GameStatus::InProgress => format!("{}'s turn", self.game.current_player()),
            GameStatus::Won(player) => format!("{player} wins!"),
            GameStatus::Draw => "It's a draw!".to_string(),
        }
    }

    fn apply(&mut self, index: usize, player: Player) -> Option<SessionEvent> {
        let next = match self.game.apply_move(index, player) {
            Ok(next) => next,
            Err(e) => {
                debug!(index, %player, error = %e, "Move ignored");
                return None;
            }
        };
        self.game = next;

        let event = match (self.game.status(), self.game.winning_line()) {
            (GameStatus::Won(player), Some(line)) => SessionEvent::Won { player, line },
            (GameStatus::Draw, _) => SessionEvent::Draw,
            _ => SessionEvent::Moved { player, index },
        };
        if self.tally.record(self.game.status()) {
            info!(status = ?self.game.status(), "Game finished");
        }
        Some(event)
    }
}
