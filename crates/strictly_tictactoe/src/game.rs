//! Game state with move history and time travel.
//!
//! [`GameState`] keeps every board the game has passed through. The player
//! can jump to any earlier step and keep playing from there; the first new
//! move after such a jump discards the steps that followed it.

use super::invariants::{GameInvariants, InvariantSet};
use super::move_list::MoveListEntry;
use super::rejection::{JumpRejection, MoveRejection};
use super::rules::{check_winner, is_full};
use super::snapshot::Snapshot;
use super::{Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

// ─────────────────────────────────────────────────────────────
//  Status
// ─────────────────────────────────────────────────────────────

/// Status of the board currently being viewed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// Game is ongoing.
    #[display("Next player: {next}")]
    InProgress {
        /// Player to move.
        next: Player,
    },
    /// Game ended in a win.
    #[display("Winner: {mark}")]
    Won {
        /// The winning player.
        mark: Player,
        /// The completed line.
        line: [Position; 3],
    },
    /// Board is full with no line.
    #[display("Draw")]
    Draw,
}

impl GameStatus {
    /// Returns true for `Won` and `Draw`.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }

    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won { mark, .. } => Some(*mark),
            _ => None,
        }
    }

    /// Returns the winning line, if any.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        match self {
            GameStatus::Won { line, .. } => Some(*line),
            _ => None,
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  List order
// ─────────────────────────────────────────────────────────────

/// Order in which the move list is presented.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum ListOrder {
    /// Game start first.
    #[default]
    Ascending,
    /// Latest move first.
    Descending,
}

impl ListOrder {
    /// Returns the other order.
    pub fn toggle(self) -> Self {
        match self {
            ListOrder::Ascending => ListOrder::Descending,
            ListOrder::Descending => ListOrder::Ascending,
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Game state
// ─────────────────────────────────────────────────────────────

/// Complete game state: history, viewing pointer and list order.
///
/// Invariants (checked in debug builds after each mutation):
/// - history is never empty and starts with the empty board
/// - `current_index < history.len()`
/// - each snapshot adds exactly one mark to its predecessor, X first
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub(crate) history: Vec<Snapshot>,
    pub(crate) current_index: usize,
    pub(crate) list_order: ListOrder,
}

impl GameState {
    /// Creates a new game with only the starting board.
    #[instrument]
    pub fn new() -> Self {
        Self::with_list_order(ListOrder::default())
    }

    /// Creates a new game whose move list starts in `list_order`.
    #[instrument]
    pub fn with_list_order(list_order: ListOrder) -> Self {
        Self {
            history: vec![Snapshot::start()],
            current_index: 0,
            list_order,
        }
    }

    /// Plays the next mark at `cell_index` on the board currently viewed.
    ///
    /// Any history after the current step is discarded first. On rejection
    /// nothing changes.
    ///
    /// # Errors
    ///
    /// - [`MoveRejection::OutOfBounds`] if `cell_index > 8`
    /// - [`MoveRejection::GameDecided`] if the current board has a winner
    /// - [`MoveRejection::Occupied`] if the square is taken
    #[instrument(skip(self), fields(current_index = self.current_index, next = %self.next_mark()))]
    pub fn apply_move(&mut self, cell_index: usize) -> Result<&Snapshot, MoveRejection> {
        let pos = Position::from_index(cell_index).ok_or(MoveRejection::OutOfBounds(cell_index))?;

        let current = self.current();
        if let Some(win) = check_winner(current.board()) {
            return Err(MoveRejection::GameDecided(win.mark));
        }
        if !current.board().is_empty(pos) {
            return Err(MoveRejection::Occupied(pos));
        }

        let next = current.play(pos, self.next_mark());
        let discarded = self.history.len() - (self.current_index + 1);
        self.history.truncate(self.current_index + 1);
        self.history.push(next);
        self.current_index = self.history.len() - 1;
        debug!(position = %pos, discarded, step = self.current_index, "Move applied");

        debug_assert!(
            GameInvariants::check_all(&*self).is_ok(),
            "Game invariants violated after move"
        );

        Ok(self.current())
    }

    /// Moves the viewing pointer to `step`. History is kept intact.
    ///
    /// # Errors
    ///
    /// Returns [`JumpRejection::OutOfRange`] if `step` is not in the history.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), JumpRejection> {
        if step >= self.history.len() {
            return Err(JumpRejection::OutOfRange {
                step,
                len: self.history.len(),
            });
        }
        self.current_index = step;
        debug!(step, "Jumped");
        Ok(())
    }

    /// Flips the move list between ascending and descending order.
    #[instrument(skip(self))]
    pub fn toggle_order(&mut self) {
        self.list_order = self.list_order.toggle();
        debug!(order = %self.list_order, "List order toggled");
    }

    /// Evaluates the board currently viewed.
    pub fn status(&self) -> GameStatus {
        let board = self.current().board();
        if let Some(win) = check_winner(board) {
            GameStatus::Won {
                mark: win.mark,
                line: win.line,
            }
        } else if is_full(board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress {
                next: self.next_mark(),
            }
        }
    }

    /// Returns the snapshot at `step`, if it exists.
    pub fn snapshot_at(&self, step: usize) -> Option<&Snapshot> {
        self.history.get(step)
    }

    /// Returns the snapshot currently viewed.
    pub fn current(&self) -> &Snapshot {
        &self.history[self.current_index]
    }

    /// Returns the full history, starting board first.
    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }

    /// Number of snapshots, including the starting board.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Index of the snapshot currently viewed.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Player who moves next from the current step.
    pub fn next_mark(&self) -> Player {
        Player::for_move_count(self.current_index)
    }

    /// Current move list order.
    pub fn list_order(&self) -> ListOrder {
        self.list_order
    }

    /// One entry per snapshot, in the current list order.
    pub fn move_list(&self) -> Vec<MoveListEntry> {
        let entries = self.history.iter().enumerate().map(|(step, snapshot)| {
            MoveListEntry::describe(step, snapshot, step == self.current_index)
        });
        match self.list_order {
            ListOrder::Ascending => entries.collect(),
            ListOrder::Descending => entries.rev().collect(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
