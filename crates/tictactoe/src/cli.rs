//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tictactoe::Opponent;
use tictactoe_core::{Player, Scoring};

/// Tic-tac-toe against a friend or an unbeatable computer
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe with an exhaustive minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Scoring mode for the computer's search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScoringArg {
    /// Win +1, loss -1, draw 0
    Plain,
    /// Prefer faster wins and slower losses
    DepthAdjusted,
}

impl From<ScoringArg> for Scoring {
    fn from(arg: ScoringArg) -> Self {
        match arg {
            ScoringArg::Plain => Scoring::Plain,
            ScoringArg::DepthAdjusted => Scoring::DepthAdjusted,
        }
    }
}

/// A side of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlayerArg {
    /// The first player
    X,
    /// The second player
    O,
}

impl From<PlayerArg> for Player {
    fn from(arg: PlayerArg) -> Self {
        match arg {
            PlayerArg::X => Player::X,
            PlayerArg::O => Player::O,
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Path to a TOML settings file
        #[arg(short, long, default_value = "tictactoe.toml")]
        config: PathBuf,

        /// Who plays O (overrides the settings file)
        #[arg(long, value_enum)]
        opponent: Option<Opponent>,

        /// Delay before the computer answers, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Computer scoring mode
        #[arg(long, value_enum)]
        scoring: Option<ScoringArg>,

        /// Log file (the terminal is taken by the board)
        #[arg(long, default_value = "tictactoe.log")]
        log_file: PathBuf,
    },

    /// Print the computer's choice for a position
    BestMove {
        /// Nine squares, row-major: X, O, or . for empty (e.g. "XX../.O./...")
        #[arg(short, long)]
        board: String,

        /// Side to choose for; defaults to whoever is to move
        #[arg(short, long, value_enum)]
        player: Option<PlayerArg>,

        /// Computer scoring mode
        #[arg(long, value_enum, default_value = "plain")]
        scoring: ScoringArg,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Play the computer against every possible opponent line
    Audit {
        /// Side the computer plays
        #[arg(short, long, value_enum, default_value = "o")]
        player: PlayerArg,

        /// Computer scoring mode
        #[arg(long, value_enum, default_value = "plain")]
        scoring: ScoringArg,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
