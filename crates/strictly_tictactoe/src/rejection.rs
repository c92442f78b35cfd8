//! Reasons a mutation was refused.
//!
//! A rejected call never changes the game. Views typically ignore these
//! values, since a stale click after the game ended is expected, but they
//! make the refusal observable to tests and logs.

use super::{Player, Position};

/// Why a move was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveRejection {
    /// The cell index is outside 0-8.
    #[display("Cell {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(#[error(not(source))] usize),

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    Occupied(#[error(not(source))] Position),

    /// The current board already has a winner.
    #[display("Game is already won by {}", _0)]
    GameDecided(#[error(not(source))] Player),
}

/// Why a jump through history was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum JumpRejection {
    /// The step does not exist in the history.
    #[display("Step {} is out of range (history has {} entries)", step, len)]
    OutOfRange {
        /// Requested step.
        step: usize,
        /// History length at the time of the request.
        len: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_rejections_are_errors_without_source() {
        let rejection = MoveRejection::Occupied(Position::Center);
        assert!(rejection.source().is_none());
        assert_eq!(rejection.to_string(), "Square Center is already occupied");

        let jump = JumpRejection::OutOfRange { step: 4, len: 2 };
        assert!(jump.source().is_none());
        assert_eq!(
            jump.to_string(),
            "Step 4 is out of range (history has 2 entries)"
        );
    }

    #[test]
    fn test_rejection_boxes_as_dyn_error() {
        let boxed: Box<dyn Error> = Box::new(MoveRejection::OutOfBounds(9));
        assert_eq!(boxed.to_string(), "Cell 9 is out of bounds (must be 0-8)");
    }
}
