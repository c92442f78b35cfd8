//! Command-line interface for strictly_timeline.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_tictactoe::Position;

/// Strictly Timeline - tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "strictly_timeline")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to strictly_timeline.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Apply moves without a UI and print the resulting game
    Replay {
        /// Cells to play, as indices 0-8 or labels like `center`
        #[arg(long, value_delimiter = ',', value_parser = parse_cell)]
        moves: Vec<usize>,

        /// History step to jump to after `--moves`
        #[arg(long)]
        jump: Option<usize>,

        /// Cells to play after the jump
        #[arg(long, value_delimiter = ',', value_parser = parse_cell)]
        then: Vec<usize>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

/// Parses a cell as a raw index or a position label.
///
/// Indices are not range-checked here: an out-of-range index reaches the
/// game, which rejects it like any other illegal move.
fn parse_cell(s: &str) -> Result<usize, String> {
    if let Ok(index) = s.trim().parse::<usize>() {
        return Ok(index);
    }
    Position::from_label_or_number(s)
        .map(Position::to_index)
        .ok_or_else(|| format!("'{}' is neither a cell index nor a position label", s))
}
