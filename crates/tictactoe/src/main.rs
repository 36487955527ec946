//! tictactoe - terminal game and analysis commands.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::{Cli, Command, PlayerArg, ScoringArg};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tictactoe::{Opponent, Settings, tui};
use tictactoe_core::{Board, Player, Position, Scoring, Selector, audit, evaluate_terminal};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            opponent,
            delay_ms,
            scoring,
            log_file,
        } => run_play(config, opponent, delay_ms, scoring, &log_file),
        Command::BestMove {
            board,
            player,
            scoring,
            json,
        } => {
            initialize_tracing();
            run_best_move(&board, player, scoring, json)
        }
        Command::Audit {
            player,
            scoring,
            json,
        } => {
            initialize_tracing();
            run_audit(player, scoring, json)
        }
    }
}

/// Filter for stderr logging when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "info";

/// Logs to stderr, filtered by `RUST_LOG`.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Logs to a file so the board keeps the terminal.
fn initialize_file_tracing(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tictactoe=debug")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Run the terminal game
fn run_play(
    config: PathBuf,
    opponent: Option<Opponent>,
    delay_ms: Option<u64>,
    scoring: Option<ScoringArg>,
    log_file: &Path,
) -> Result<()> {
    initialize_file_tracing(log_file)?;

    let settings = Settings::load(Some(config.as_path()))
        .context("Failed to load settings")?
        .override_opponent(opponent)
        .override_bot_delay_ms(delay_ms)
        .override_scoring(scoring.map(Scoring::from));
    info!(?settings, "Settings resolved");

    tui::run(&settings)
}

#[derive(Debug, Serialize)]
struct BestMove {
    board: Board,
    player: Player,
    scoring: Scoring,
    index: usize,
    position: Position,
}

/// Print the selector's move for a position
#[instrument]
fn run_best_move(
    board: &str,
    player: Option<PlayerArg>,
    scoring: ScoringArg,
    json: bool,
) -> Result<()> {
    let board: Board = board.parse().context("Invalid --board")?;
    if evaluate_terminal(&board).is_terminal() {
        bail!("The position is already decided:\n{}", board.display());
    }

    let player = player.map(Player::from).unwrap_or_else(|| board.side_to_move());
    let scoring = Scoring::from(scoring);
    let index = Selector::new(player)
        .with_scoring(scoring)
        .select_move(&board)
        .context("No empty square to play")?;
    let position = Position::from_index(index).context("Selector returned an off-board index")?;

    if json {
        let report = BestMove {
            board,
            player,
            scoring,
            index,
            position,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}\n", board.display());
        println!("{player} plays {} (square {})", position, index + 1);
    }
    Ok(())
}

/// Run the exhaustive audit
#[instrument]
fn run_audit(player: PlayerArg, scoring: ScoringArg, json: bool) -> Result<()> {
    let report = audit(Player::from(player), Scoring::from(scoring));

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "{} games as {}: {} won, {} drawn, {} lost",
            report.games,
            report.automated,
            report.automated_wins,
            report.draws,
            report.opponent_wins
        );
    }

    if let Some(line) = &report.first_loss {
        bail!("The computer can be beaten: {:?}", line);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_default_filter_enables_info() {
        let filter = EnvFilter::new(DEFAULT_LOG_FILTER);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
    }
}
