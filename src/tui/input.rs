//! Key bindings and cursor movement for keyboard navigation.

use super::app::Focus;
use crossterm::event::KeyCode;
use strictly_tictactoe::Position;

/// Direction of a cursor step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward row 0.
    Up,
    /// Toward row 2.
    Down,
    /// Toward column 0.
    Left,
    /// Toward column 2.
    Right,
}

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Leave the application.
    Quit,
    /// Move the board cursor.
    MoveCursor(Direction),
    /// Play at the board cursor.
    PlayCursor,
    /// Play at a cell index.
    PlayCell(usize),
    /// Switch focus between board and move list.
    SwitchFocus,
    /// Select the previous move list row.
    SelectPrevious,
    /// Select the next move list row.
    SelectNext,
    /// Jump to the selected move list row.
    JumpSelected,
    /// Flip the move list order.
    ToggleOrder,
}

/// Maps a key to an action given the focused pane.
pub fn action_for(code: KeyCode, focus: Focus) -> Option<Action> {
    match (code, focus) {
        (KeyCode::Char('q') | KeyCode::Esc, _) => Some(Action::Quit),
        (KeyCode::Tab | KeyCode::BackTab, _) => Some(Action::SwitchFocus),
        (KeyCode::Char('t'), _) => Some(Action::ToggleOrder),
        (KeyCode::Char(c @ '1'..='9'), _) => c
            .to_digit(10)
            .map(|digit| Action::PlayCell(digit as usize - 1)),

        (KeyCode::Up, Focus::Board) => Some(Action::MoveCursor(Direction::Up)),
        (KeyCode::Down, Focus::Board) => Some(Action::MoveCursor(Direction::Down)),
        (KeyCode::Left, Focus::Board) => Some(Action::MoveCursor(Direction::Left)),
        (KeyCode::Right, Focus::Board) => Some(Action::MoveCursor(Direction::Right)),
        (KeyCode::Enter | KeyCode::Char(' '), Focus::Board) => Some(Action::PlayCursor),

        (KeyCode::Up, Focus::Moves) => Some(Action::SelectPrevious),
        (KeyCode::Down, Focus::Moves) => Some(Action::SelectNext),
        (KeyCode::Enter | KeyCode::Char(' '), Focus::Moves) => Some(Action::JumpSelected),

        _ => None,
    }
}

/// Moves the cursor one square, stopping at the board edge.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, col) = (cursor.row(), cursor.column());
    let (row, col) = match direction {
        Direction::Up => (row.saturating_sub(1), col),
        Direction::Down => (row + 1, col),
        Direction::Left => (row, col.saturating_sub(1)),
        Direction::Right => (row, col + 1),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}
