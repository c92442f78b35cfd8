//! UI rendering for the board and move list.
//!
//! [`layout`] is a pure function of the terminal area so the app can map
//! mouse clicks back to cells and rows using the same rectangles it drew.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use strictly_tictactoe::{Player, Position, Square};

use super::app::{App, Focus};

const CELL_WIDTH: u16 = 7;
const CELL_HEIGHT: u16 = 3;
const BOARD_PANE_WIDTH: u16 = CELL_WIDTH * 3 + 4;

/// Rectangles of every interactive region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title bar.
    pub title: Rect,
    /// Bordered pane around the board.
    pub board_pane: Rect,
    /// Board cells in index order.
    pub cells: [Rect; 9],
    /// Status line pane.
    pub status: Rect,
    /// Bordered pane around the move list.
    pub move_pane: Rect,
    /// Inside of the move list pane, one terminal row per entry.
    pub move_rows: Rect,
    /// Key help.
    pub footer: Rect,
}

/// Computes the layout for a terminal of size `area`.
pub fn layout(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(CELL_HEIGHT * 3 + 2),
            Constraint::Length(3), // Help
        ])
        .split(area);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(BOARD_PANE_WIDTH), Constraint::Min(30)])
        .split(chunks[1]);

    let info = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(body[1]);

    let board_pane = body[0];
    let grid = center_rect(Block::bordered().inner(board_pane), CELL_WIDTH * 3, CELL_HEIGHT * 3);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(CELL_HEIGHT); 3])
        .split(grid);

    let mut cells = [Rect::default(); 9];
    for (r, row) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(CELL_WIDTH); 3])
            .split(*row);
        for (c, cell) in cols.iter().enumerate() {
            cells[r * 3 + c] = *cell;
        }
    }

    let move_pane = info[1];
    ScreenLayout {
        title: chunks[0],
        board_pane,
        cells,
        status: info[0],
        move_pane,
        move_rows: Block::bordered().inner(move_pane),
        footer: chunks[2],
    }
}

/// Renders the whole screen and records the layout on the app.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let layout = layout(frame.area());
    app.layout = Some(layout);

    let title = Paragraph::new("Strictly Timeline - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, layout.title);

    draw_board(frame, &layout, app);

    let status = Paragraph::new(app.game().status().to_string())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::bordered().title(" Status "));
    frame.render_widget(status, layout.status);

    draw_moves(frame, &layout, app);

    let help = Paragraph::new(
        "arrows: move  enter: play/jump  1-9: play cell  tab: switch pane  t: toggle order  q: quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::TOP));
    frame.render_widget(help, layout.footer);
}

fn draw_board(frame: &mut Frame, layout: &ScreenLayout, app: &App) {
    frame.render_widget(
        Block::bordered()
            .title(" Board ")
            .border_style(pane_style(app.focus() == Focus::Board)),
        layout.board_pane,
    );

    let board = app.game().current().board();
    let winning_line = app.game().status().winning_line();

    for (pos, area) in Position::ALL.iter().zip(layout.cells) {
        let (symbol, mut style) = match board.get(*pos) {
            Square::Empty => (String::new(), Style::default().fg(Color::DarkGray)),
            Square::Occupied(player) => (
                player.to_string(),
                Style::default().fg(mark_color(player)).add_modifier(Modifier::BOLD),
            ),
        };

        if winning_line.is_some_and(|line| line.contains(pos)) {
            style = style.bg(Color::Green).fg(Color::Black);
        }
        if app.focus() == Focus::Board && *pos == app.cursor() {
            style = style.add_modifier(Modifier::REVERSED);
        }

        let cell = Paragraph::new(Line::from(Span::styled(symbol, style)))
            .alignment(Alignment::Center)
            .style(style)
            .block(Block::bordered().border_style(Style::default().fg(Color::DarkGray)));
        frame.render_widget(cell, area);
    }
}

fn draw_moves(frame: &mut Frame, layout: &ScreenLayout, app: &mut App) {
    let focused = app.focus() == Focus::Moves;
    let selected_step = app.selected_step();

    let items: Vec<ListItem> = app
        .game()
        .move_list()
        .into_iter()
        .map(|entry| {
            let mut style = if *entry.is_current() {
                Style::default().add_modifier(Modifier::BOLD).fg(Color::White)
            } else {
                Style::default().fg(Color::Gray)
            };
            // Keep the pending jump target visible while the board has focus.
            if !focused && *entry.step() == selected_step {
                style = style.add_modifier(Modifier::UNDERLINED);
            }
            ListItem::new(Line::from(Span::styled(entry.label().clone(), style)))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::bordered()
                .title(format!(" Moves ({}) ", app.game().list_order()))
                .border_style(pane_style(focused)),
        )
        .highlight_style(if focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        });

    let selected = app.selected_row();
    app.list_state.select(selected);
    frame.render_stateful_widget(list, layout.move_pane, &mut app.list_state);
}

fn mark_color(player: Player) -> Color {
    match player {
        Player::X => Color::Blue,
        Player::O => Color::Red,
    }
}

fn pane_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
