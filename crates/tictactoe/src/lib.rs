//! Tic-tac-toe sessions and terminal front end.
//!
//! # Architecture
//!
//! - **Session**: one opponent mode, the current game, and the running tally
//! - **Settings**: TOML configuration with command-line overrides
//! - **TUI**: ratatui board view with a delayed computer reply
//!
//! Game rules and move selection live in [`tictactoe_core`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod session;
mod settings;
pub mod tui;

pub use session::{COMPUTER, Opponent, Session, SessionEvent};
pub use settings::{ConfigError, Settings};
