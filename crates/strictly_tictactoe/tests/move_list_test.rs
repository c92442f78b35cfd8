//! Tests for move list presentation.

use strictly_tictactoe::{GameState, ListOrder};

fn labels(game: &GameState) -> Vec<String> {
    game.move_list().iter().map(|e| e.label().clone()).collect()
}

#[test]
fn test_ascending_labels() {
    let mut game = GameState::new();
    for cell in [4, 0, 7] {
        game.apply_move(cell).expect("legal move");
    }
    assert_eq!(
        labels(&game),
        vec![
            "Go to game start",
            "Go to move #1(1, 1)",
            "Go to move #2(0, 0)",
            "Go to move #3(2, 1)",
        ]
    );
}

#[test]
fn test_descending_reverses_entries() {
    let mut game = GameState::with_list_order(ListOrder::Descending);
    for cell in [4, 0] {
        game.apply_move(cell).expect("legal move");
    }
    let steps: Vec<usize> = game.move_list().iter().map(|e| *e.step()).collect();
    assert_eq!(steps, vec![2, 1, 0]);
}

#[test]
fn test_current_entry_follows_jumps() {
    let mut game = GameState::new();
    for cell in [4, 0, 7] {
        game.apply_move(cell).expect("legal move");
    }
    game.jump_to(1).expect("step exists");

    let current: Vec<usize> = game
        .move_list()
        .iter()
        .filter(|e| *e.is_current())
        .map(|e| *e.step())
        .collect();
    assert_eq!(current, vec![1]);
    assert_eq!(game.move_list().len(), 4);
}

#[test]
fn test_move_list_serializes_for_views() {
    let mut game = GameState::new();
    game.apply_move(2).expect("legal move");
    let json = serde_json::to_value(game.move_list()).expect("serializable");
    assert_eq!(json[1]["label"], "Go to move #1(0, 2)");
    assert_eq!(json[1]["location"]["row"], 0);
    assert_eq!(json[1]["is_current"], true);
}
