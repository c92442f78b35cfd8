//! Strictly Timeline - tic-tac-toe with move history and time travel.
//!
//! The game rules and history live in [`strictly_tictactoe`]; this crate
//! adds the outer surfaces around them.
//!
//! # Architecture
//!
//! - **CLI**: `play` (default) and `replay` subcommands
//! - **Config**: optional TOML file with the initial move list order and log path
//! - **TUI**: ratatui view that forwards keys and clicks to the game
//! - **Replay**: applies a move list without a UI and prints text or JSON

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod replay;
mod tui;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, TimelineConfig};

// Crate-level exports - Replay
pub use replay::{ReplayPlan, ReplayReport, render_text, replay, run_replay};

// Crate-level exports - Terminal UI
pub use tui::run_tui;
