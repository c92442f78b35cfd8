//! Non-interactive replay: apply moves and print the resulting game.

use crate::config::TimelineConfig;
use anyhow::{Context, Result};
use serde::Serialize;
use strictly_tictactoe::{Board, GameState, GameStatus, ListOrder, MoveListEntry};
use tracing::{info, instrument, warn};

/// Moves to replay, split around an optional jump.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplayPlan {
    /// Cells played from the start.
    pub moves: Vec<usize>,
    /// Step to jump to after `moves`.
    pub jump: Option<usize>,
    /// Cells played after the jump.
    pub then: Vec<usize>,
}

/// Serializable summary of a game after replay.
#[derive(Debug, Serialize)]
pub struct ReplayReport<'a> {
    board: &'a Board,
    status: GameStatus,
    current_step: usize,
    history_len: usize,
    list_order: ListOrder,
    moves: Vec<MoveListEntry>,
}

impl<'a> From<&'a GameState> for ReplayReport<'a> {
    fn from(game: &'a GameState) -> Self {
        Self {
            board: game.current().board(),
            status: game.status(),
            current_step: game.current_index(),
            history_len: game.history_len(),
            list_order: game.list_order(),
            moves: game.move_list(),
        }
    }
}

/// Plays `plan` on a fresh game. Rejected moves and jumps are logged and skipped.
#[instrument(skip(config))]
pub fn replay(config: &TimelineConfig, plan: &ReplayPlan) -> GameState {
    let mut game = GameState::with_list_order(*config.list_order());
    apply_all(&mut game, &plan.moves);
    if let Some(step) = plan.jump
        && let Err(e) = game.jump_to(step)
    {
        warn!(error = %e, "Jump rejected");
    }
    apply_all(&mut game, &plan.then);
    info!(status = %game.status(), history_len = game.history_len(), "Replay finished");
    game
}

fn apply_all(game: &mut GameState, cells: &[usize]) {
    for &cell in cells {
        if let Err(e) = game.apply_move(cell) {
            warn!(cell, error = %e, "Move rejected");
        }
    }
}

/// Renders the board, status line and move list as plain text.
///
/// The current step is marked with `>`.
pub fn render_text(game: &GameState) -> String {
    let mut out = game.current().board().display();
    out.push_str("\n\n");
    out.push_str(&game.status().to_string());
    out.push_str(&format!("\n\nMoves ({}):\n", game.list_order()));
    for entry in game.move_list() {
        let marker = if *entry.is_current() { '>' } else { ' ' };
        out.push_str(&format!("{} {}\n", marker, entry.label()));
    }
    out
}

/// Runs the replay command, printing to stdout.
pub fn run_replay(config: &TimelineConfig, plan: &ReplayPlan, json: bool) -> Result<()> {
    let game = replay(config, plan);
    if json {
        let report = ReplayReport::from(&game);
        let text = serde_json::to_string_pretty(&report).context("Failed to serialize game")?;
        println!("{}", text);
    } else {
        print!("{}", render_text(&game));
    }
    Ok(())
}
