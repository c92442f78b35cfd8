//! Terminal UI for Strictly Timeline.
//!
//! A thin view over [`GameState`]: every key or click is forwarded to the
//! game, then the whole screen is redrawn from the game's current snapshot.

mod app;
mod input;
mod ui;

use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use strictly_tictactoe::GameState;
use tracing::{error, info, instrument};

use crate::config::TimelineConfig;
use app::App;

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Runs the terminal UI until the user quits.
#[instrument(skip_all)]
pub fn run_tui(config: &TimelineConfig) -> Result<()> {
    info!("Starting Strictly Timeline TUI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let app = App::new(GameState::with_list_order(*config.list_order()));
    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Redraw, wait for one event, handle it; until quit.
fn run_app(terminal: &mut Tui, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &mut app))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key.code),
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                app.handle_click(mouse.column, mouse.row);
            }
            _ => {}
        }

        if app.should_quit() {
            info!(moves = app.game().history_len() - 1, "Leaving TUI");
            return Ok(());
        }
    }
}
