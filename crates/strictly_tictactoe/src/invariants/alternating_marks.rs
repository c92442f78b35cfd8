//! Alternating marks invariant: X, O, X, O, ...

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: the mark placed at step k is X for odd k and O for even k.
pub struct AlternatingMarksInvariant;

impl Invariant<GameState> for AlternatingMarksInvariant {
    fn holds(game: &GameState) -> bool {
        game.history
            .iter()
            .enumerate()
            .skip(1)
            .all(|(step, snapshot)| snapshot.mark() == Some(Player::for_move_count(step - 1)))
    }

    fn description() -> &'static str {
        "Players alternate, X first"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_played_game_holds() {
        let mut game = GameState::new();
        for cell in [0, 1, 2, 4] {
            game.apply_move(cell).expect("legal move");
        }
        assert!(AlternatingMarksInvariant::holds(&game));
    }

    #[test]
    fn test_repeated_mark_violates() {
        let mut game = GameState::new();
        game.apply_move(0).expect("legal move");
        let again = game.history[1].play(Position::Center, Player::X);
        game.history.push(again);
        assert!(!AlternatingMarksInvariant::holds(&game));
    }
}
