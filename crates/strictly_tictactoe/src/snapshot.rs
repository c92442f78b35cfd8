//! Immutable history entries.

use super::position::Position;
use super::types::{Board, Player, Square};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Row and column of a move, each 0-2.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_new::new,
    derive_more::Display,
)]
#[display("({row}, {col})")]
pub struct Location {
    /// Row, counted from the top.
    pub row: usize,
    /// Column, counted from the left.
    pub col: usize,
}

impl Location {
    /// Returns the board position at this location.
    pub fn position(self) -> Option<Position> {
        Position::from_row_col(self.row, self.col)
    }
}

impl From<Position> for Location {
    fn from(pos: Position) -> Self {
        Self::new(pos.row(), pos.column())
    }
}

/// A board together with the move that produced it.
///
/// The starting snapshot has no location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Snapshot {
    /// Board after the move.
    board: Board,
    /// Where the move was played; `None` for the starting board.
    #[getter(skip)]
    location: Option<Location>,
}

impl Snapshot {
    /// The empty starting board.
    pub fn start() -> Self {
        Self {
            board: Board::new(),
            location: None,
        }
    }

    /// Where the move that produced this snapshot was played.
    pub fn location(&self) -> Option<Location> {
        self.location
    }

    /// The position played to reach this snapshot.
    pub fn position(&self) -> Option<Position> {
        self.location.and_then(Location::position)
    }

    /// The mark placed to reach this snapshot.
    pub fn mark(&self) -> Option<Player> {
        self.position().and_then(|pos| self.board.get(pos).player())
    }

    /// Returns the snapshot that follows from `player` marking `pos`.
    ///
    /// Legality is checked by the caller.
    pub(crate) fn play(&self, pos: Position, player: Player) -> Self {
        Self {
            board: self.board.with(pos, Square::Occupied(player)),
            location: Some(pos.into()),
        }
    }
}
