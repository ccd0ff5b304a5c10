//! Application state and logic.

use crossterm::event::KeyCode;
use ratatui::layout::Rect;
use tracing::{debug, info, instrument};

use super::input::move_cursor;
use super::ui::{cell_at, move_at, screen_layout};
use crate::config::GomokuConfig;
use crate::games::gomoku::{GameHistory, Player, Position, WinWatcher};

/// Main application state.
#[derive(Debug)]
pub struct App {
    history: GameHistory,
    cursor: Position,
    watcher: WinWatcher,
    announced: Option<Player>,
    status_message: String,
    should_quit: bool,
    config: GomokuConfig,
}

impl App {
    /// Creates a new application with an empty board.
    #[instrument(skip(config))]
    pub fn new(config: GomokuConfig) -> Self {
        let mut app = Self {
            history: GameHistory::new(),
            cursor: Position::CENTRE,
            watcher: WinWatcher::new(),
            announced: None,
            status_message: String::new(),
            should_quit: false,
            config,
        };
        app.refresh();
        app
    }

    /// Gets the game history.
    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Winner announced by the last action, if it completed a win.
    pub fn announced(&self) -> Option<Player> {
        self.announced
    }

    /// Checks if the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Gets the configuration.
    pub fn config(&self) -> &GomokuConfig {
        &self.config
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.play_at(self.cursor),
            KeyCode::Char('[') => self.jump(self.history.current_move().checked_sub(1)),
            KeyCode::Char(']') => self.jump(Some(self.history.current_move() + 1)),
            KeyCode::Home => self.jump(Some(0)),
            KeyCode::End => self.jump(Some(self.history.len() - 1)),
            KeyCode::Char('n') => self.restart(),
            other => self.cursor = move_cursor(self.cursor, other),
        }
    }

    /// Handles a left click at a terminal cell, given the full screen area.
    #[instrument(skip(self))]
    pub fn handle_click(&mut self, column: u16, row: u16, area: Rect) {
        let show_coordinates = *self.config.show_coordinates();
        let layout = screen_layout(area, show_coordinates);

        if let Some(pos) = cell_at(&layout, show_coordinates, column, row) {
            self.cursor = pos;
            self.play_at(pos);
        } else if let Some(k) = move_at(&layout, &self.history.current_view(), column, row) {
            self.jump(Some(k));
        }
    }

    /// Plays the current player's stone at `pos`.
    pub fn play_at(&mut self, pos: Position) {
        match self.history.play(pos.to_index()) {
            Ok(()) => {
                debug!(%pos, "Move applied to UI state");
                self.refresh();
            }
            Err(e) => {
                self.announced = None;
                self.status_message = format!("Move error: {}", e);
            }
        }
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.history.reset();
        self.refresh();
    }

    fn jump(&mut self, target: Option<usize>) {
        let result = match target {
            Some(k) => self.history.jump_to(k),
            None => self.history.step_back(),
        };
        match result {
            Ok(()) => self.refresh(),
            Err(e) => {
                self.announced = None;
                self.status_message = format!("History: {}", e);
            }
        }
    }

    // Rebuilds the status line and announces a fresh win once.
    fn refresh(&mut self) {
        let view = self.history.current_view();
        self.announced = self.watcher.observe(&view);
        self.status_message = match self.announced {
            Some(winner) => format!("Winner: {winner}! Press N for a new game."),
            None => view.status(),
        };
    }
}
