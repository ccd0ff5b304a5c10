//! Terminal UI for Strictly Gomoku

mod app;
mod input;
mod terminal;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, EnableMouseCapture, Event, KeyEventKind, MouseButton, MouseEventKind},
    execute,
    terminal::{EnterAlternateScreen, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io::{self, Stdout};
use tracing::{debug, error, info, instrument};

use crate::config::GomokuConfig;

use terminal::TerminalGuard;

pub use app::App;
pub use input::move_cursor;
pub use ui::{ScreenLayout, cell_at, draw, move_at, screen_layout, window_start};

/// Runs the interactive game until the user quits.
#[instrument(skip_all)]
pub fn run_tui(config: GomokuConfig) -> Result<()> {
    info!("Starting Strictly Gomoku TUI");

    enable_raw_mode()?;
    let _guard = TerminalGuard::new(io::stdout());
    execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let mut app = App::new(config);
    let res = run_game(&mut terminal, &mut app);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(moves = app.history().len() - 1, "TUI exited");

    res
}

/// Draw-then-read loop over terminal events.
fn run_game(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        let frame = terminal.draw(|f| draw(f, app))?;
        let area: Rect = frame.area;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                debug!(?key.code, "Key pressed");
                app.handle_key(key.code);
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                app.handle_click(mouse.column, mouse.row, area);
            }
            _ => {}
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
