//! Monotonic history invariant: each step adds exactly one mark.

use super::super::{Board, GameState, Square};
use super::Invariant;

/// Invariant: history starts empty and grows by one mark per step.
///
/// Snapshot 0 is the empty board with no location. Every later snapshot
/// equals its predecessor except for one newly occupied square at the
/// recorded location. Squares are never overwritten or cleared.
pub struct MonotonicHistoryInvariant;

impl Invariant<GameState> for MonotonicHistoryInvariant {
    fn holds(game: &GameState) -> bool {
        let Some(first) = game.history.first() else {
            return false;
        };
        if *first.board() != Board::new() || first.location().is_some() {
            return false;
        }

        game.history.windows(2).all(|pair| {
            let (before, after) = (&pair[0], &pair[1]);
            let Some(pos) = after.position() else {
                return false;
            };
            let placed = after.board().get(pos);
            before.board().is_empty(pos)
                && placed != Square::Empty
                && before.board().with(pos, placed) == *after.board()
        })
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark to its predecessor"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position, Snapshot};

    #[test]
    fn test_played_game_holds() {
        let mut game = GameState::new();
        for cell in [4, 0, 8] {
            game.apply_move(cell).expect("legal move");
        }
        assert!(MonotonicHistoryInvariant::holds(&game));
    }

    #[test]
    fn test_overwritten_square_violates() {
        let mut game = GameState::new();
        game.apply_move(4).expect("legal move");
        let overwrite = game.history[1].play(Position::Center, Player::O);
        game.history.push(overwrite);
        assert!(!MonotonicHistoryInvariant::holds(&game));
    }

    #[test]
    fn test_non_empty_start_violates() {
        let mut game = GameState::new();
        game.history[0] = Snapshot::start().play(Position::Center, Player::X);
        assert!(!MonotonicHistoryInvariant::holds(&game));
    }
}
