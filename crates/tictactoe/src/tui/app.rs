//! Application state and logic.

use super::input::Action;
use crate::session::{Session, SessionEvent};
use crate::settings::Settings;
use std::time::{Duration, Instant};
use tictactoe_core::{Line, Position};
use tracing::{debug, info};

/// Main application state.
pub struct App {
    session: Session,
    cursor: Position,
    bot_delay: Duration,
    pending_reply: Option<Instant>,
    last_event: Option<SessionEvent>,
    running: bool,
}

impl App {
    /// Creates a new application from settings.
    pub fn new(settings: &Settings) -> Self {
        Self {
            session: Session::with_scoring(*settings.opponent(), *settings.scoring()),
            cursor: Position::Center,
            bot_delay: settings.bot_delay(),
            pending_reply: None,
            last_event: None,
            running: true,
        }
    }

    /// The session being played.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The highlighted square.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// False once the user asked to quit.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Line to highlight, present only after a win.
    pub fn winning_line(&self) -> Option<Line> {
        self.session.state().winning_line()
    }

    /// Status line, including a hint while the computer is thinking.
    pub fn status_message(&self) -> String {
        if self.pending_reply.is_some() && self.session.awaits_computer() {
            return "O is thinking...".to_string();
        }
        let status = self.session.status_text();
        if self.session.state().is_over() {
            format!("{status} Press 'r' to restart or 'q' to quit.")
        } else {
            status
        }
    }

    /// Most recent move outcome.
    pub fn last_event(&self) -> Option<SessionEvent> {
        self.last_event
    }

    /// How long the event loop may block before [`App::tick`] is due.
    pub fn poll_timeout(&self, now: Instant, idle: Duration) -> Duration {
        match self.pending_reply {
            Some(due) => due.saturating_duration_since(now).min(idle),
            None => idle,
        }
    }

    /// Applies a key action.
    pub fn handle(&mut self, action: Action, now: Instant) {
        match action {
            Action::Quit => {
                info!("User quit");
                self.running = false;
            }
            Action::Restart => {
                self.session.restart();
                self.last_event = None;
            }
            Action::Cursor(cursor) => self.cursor = cursor,
            Action::PlaceAtCursor => self.place(self.cursor, now),
            Action::Place(pos) => {
                self.cursor = pos;
                self.place(pos, now);
            }
        }
    }

    /// Delivers the computer's reply once its delay has passed.
    ///
    /// The reply is scheduled regardless of restarts; the session drops it
    /// if the game it was meant for is gone.
    pub fn tick(&mut self, now: Instant) {
        let Some(due) = self.pending_reply else {
            return;
        };
        if now < due {
            return;
        }
        self.pending_reply = None;
        if let Some(event) = self.session.computer_move() {
            debug!(?event, "Computer replied");
            self.last_event = Some(event);
        }
    }

    fn place(&mut self, pos: Position, now: Instant) {
        let Some(event) = self.session.click(pos.to_index()) else {
            return;
        };
        self.last_event = Some(event);
        if self.session.awaits_computer() {
            self.pending_reply = Some(now + self.bot_delay);
        }
    }
}
