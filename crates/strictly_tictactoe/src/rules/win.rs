//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning lines, in the order they are checked.
///
/// Rows top to bottom, then columns left to right, then the two diagonals.
pub const WINNING_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed line: who owns it and which squares form it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Win {
    /// The player holding all three squares.
    pub mark: Player,
    /// The three squares, in line order.
    pub line: [Position; 3],
}

impl Win {
    /// Returns true if `pos` is part of the winning line.
    pub fn contains(&self, pos: Position) -> bool {
        self.line.contains(&pos)
    }
}

/// Checks if there is a winner on the board.
///
/// Returns the first line in [`WINNING_LINES`] order whose three squares
/// are held by the same player, `None` otherwise.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Win> {
    WINNING_LINES.iter().find_map(|&line| {
        let [a, b, c] = line;
        match board.get(a) {
            Square::Occupied(mark)
                if board.get(b) == board.get(a) && board.get(c) == board.get(a) =>
            {
                Some(Win { mark, line })
            }
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn occupy(board: Board, player: Player, positions: &[Position]) -> Board {
        positions
            .iter()
            .fold(board, |b, pos| b.with(*pos, Square::Occupied(player)))
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = occupy(
            Board::new(),
            Player::X,
            &[Position::TopLeft, Position::TopCenter, Position::TopRight],
        );
        assert_eq!(
            check_winner(&board),
            Some(Win {
                mark: Player::X,
                line: [Position::TopLeft, Position::TopCenter, Position::TopRight],
            })
        );
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = occupy(
            Board::new(),
            Player::O,
            &[Position::TopRight, Position::Center, Position::BottomLeft],
        );
        let win = check_winner(&board).expect("anti-diagonal should win");
        assert_eq!(win.mark, Player::O);
        assert_eq!(win.line, WINNING_LINES[7]);
        assert!(win.contains(Position::Center));
        assert!(!win.contains(Position::TopLeft));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = occupy(
            Board::new(),
            Player::X,
            &[Position::TopLeft, Position::TopCenter],
        );
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = occupy(Board::new(), Player::X, &[Position::TopLeft, Position::TopCenter]);
        let board = occupy(board, Player::O, &[Position::TopRight]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_first_line_in_order_wins_ties() {
        // Top row and left column both complete: the row is checked first.
        let board = occupy(
            Board::new(),
            Player::X,
            &[
                Position::TopLeft,
                Position::TopCenter,
                Position::TopRight,
                Position::MiddleLeft,
                Position::BottomLeft,
            ],
        );
        assert_eq!(check_winner(&board).map(|w| w.line), Some(WINNING_LINES[0]));
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in WINNING_LINES {
            let board = occupy(Board::new(), Player::O, &line);
            assert_eq!(check_winner(&board).map(|w| w.line), Some(line));
        }
    }
}
