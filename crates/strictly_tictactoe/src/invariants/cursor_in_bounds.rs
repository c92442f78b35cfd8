//! Cursor invariant: the viewing pointer always names a snapshot.

use super::super::GameState;
use super::Invariant;

/// Invariant: history is non-empty and `current_index` points into it.
pub struct CursorInBoundsInvariant;

impl Invariant<GameState> for CursorInBoundsInvariant {
    fn holds(game: &GameState) -> bool {
        game.history.len() > game.current_index
    }

    fn description() -> &'static str {
        "Current index points at an existing snapshot"
    }
}
