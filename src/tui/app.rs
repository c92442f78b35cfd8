//! Application state and logic.

use super::input::{self, Action};
use super::ui::ScreenLayout;
use ratatui::layout::Position as ScreenPosition;
use ratatui::widgets::ListState;
use strictly_tictactoe::{GameState, Position};
use tracing::{debug, info, instrument};

/// Pane receiving arrow keys and Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The 3x3 board.
    #[default]
    Board,
    /// The move list.
    Moves,
}

impl Focus {
    /// Returns the other pane.
    pub fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::Moves,
            Focus::Moves => Focus::Board,
        }
    }
}

/// Main application state.
///
/// Owns the game and everything the view needs that the game does not
/// track: cursor, focus, list selection and the last rendered layout.
#[derive(Debug)]
pub struct App {
    game: GameState,
    cursor: Position,
    focus: Focus,
    selected_step: usize,
    pub(super) list_state: ListState,
    pub(super) layout: Option<ScreenLayout>,
    should_quit: bool,
}

impl App {
    /// Creates an app around `game`.
    pub fn new(game: GameState) -> Self {
        let selected_step = game.current_index();
        Self {
            game,
            cursor: Position::Center,
            focus: Focus::default(),
            selected_step,
            list_state: ListState::default(),
            layout: None,
            should_quit: false,
        }
    }

    /// The game being played.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// History step highlighted in the move list.
    pub fn selected_step(&self) -> usize {
        self.selected_step
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Row of the selected step in the move list as displayed.
    pub fn selected_row(&self) -> Option<usize> {
        self.game
            .move_list()
            .iter()
            .position(|entry| *entry.step() == self.selected_step)
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, code: crossterm::event::KeyCode) {
        if let Some(action) = input::action_for(code, self.focus) {
            self.dispatch(action);
        }
    }

    /// Applies an action to the app and the game.
    ///
    /// Rejected moves and jumps leave the game untouched and are only logged.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
            Action::MoveCursor(direction) => {
                self.cursor = input::move_cursor(self.cursor, direction);
            }
            Action::PlayCursor => self.play(self.cursor.to_index()),
            Action::PlayCell(cell) => {
                if let Some(pos) = Position::from_index(cell) {
                    self.cursor = pos;
                }
                self.play(cell);
            }
            Action::SwitchFocus => self.focus = self.focus.toggle(),
            Action::SelectPrevious => self.step_selection(-1),
            Action::SelectNext => self.step_selection(1),
            Action::JumpSelected => self.jump(self.selected_step),
            Action::ToggleOrder => self.game.toggle_order(),
        }
    }

    /// Handles a left click at terminal coordinates.
    ///
    /// Clicking a board cell plays it; clicking a move list row jumps to it.
    #[instrument(skip(self))]
    pub fn handle_click(&mut self, column: u16, row: u16) {
        let Some(layout) = self.layout else {
            return;
        };
        let point = ScreenPosition::new(column, row);

        if let Some(index) = layout.cells.iter().position(|cell| cell.contains(point)) {
            self.focus = Focus::Board;
            self.dispatch(Action::PlayCell(index));
        } else if layout.move_rows.contains(point) {
            let display_row = self.list_state.offset() + usize::from(row - layout.move_rows.y);
            if let Some(entry) = self.game.move_list().get(display_row) {
                self.focus = Focus::Moves;
                self.selected_step = *entry.step();
                self.jump(self.selected_step);
            }
        }
    }

    fn play(&mut self, cell: usize) {
        match self.game.apply_move(cell) {
            Ok(_) => self.selected_step = self.game.current_index(),
            Err(e) => debug!(cell, error = %e, "Move ignored"),
        }
    }

    fn jump(&mut self, step: usize) {
        if let Err(e) = self.game.jump_to(step) {
            debug!(step, error = %e, "Jump ignored");
        }
    }

    fn step_selection(&mut self, delta: isize) {
        let entries = self.game.move_list();
        let Some(row) = self.selected_row() else {
            return;
        };
        let last = entries.len().saturating_sub(1);
        let next = row.saturating_add_signed(delta).min(last);
        if let Some(entry) = entries.get(next) {
            self.selected_step = *entry.step();
        }
    }
}
