//! Stateless UI rendering for gomoku.
//!
//! Layout is a pure function of the terminal area so mouse clicks can be
//! mapped back to cells and history entries without storing render state.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app::App;
use crate::games::gomoku::{BOARD_WIDTH, Cell, GameView, Position, describe_move};

/// Terminal columns per board cell.
const CELL_WIDTH: u16 = 2;

/// Width of the row-number gutter.
const GUTTER_WIDTH: u16 = 3;

/// Regions of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title line.
    pub title: Rect,
    /// Bordered board, coordinates included.
    pub board: Rect,
    /// Bordered move list.
    pub moves: Rect,
    /// Bordered status bar.
    pub status: Rect,
    /// Key help line.
    pub help: Rect,
}

/// Splits the terminal area into screen regions.
pub fn screen_layout(area: Rect, show_coordinates: bool) -> ScreenLayout {
    let (gutter, header) = margins(show_coordinates);
    let board_width = 2 + gutter + BOARD_WIDTH as u16 * CELL_WIDTH;
    let board_height = 2 + header + BOARD_WIDTH as u16;

    let [title, body, status, help] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(board_height),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(area);

    let [board, moves] =
        Layout::horizontal([Constraint::Length(board_width), Constraint::Min(20)]).areas(body);

    ScreenLayout {
        title,
        board,
        moves,
        status,
        help,
    }
}

// Row-number gutter width and column-header height.
fn margins(show_coordinates: bool) -> (u16, u16) {
    if show_coordinates {
        (GUTTER_WIDTH, 1)
    } else {
        (0, 0)
    }
}

fn inner(area: Rect) -> Rect {
    Block::default().borders(Borders::ALL).inner(area)
}

/// Maps a terminal cell to the board position drawn there.
pub fn cell_at(layout: &ScreenLayout, show_coordinates: bool, column: u16, row: u16) -> Option<Position> {
    let area = inner(layout.board);
    if column >= area.right() || row >= area.bottom() {
        return None;
    }
    let (gutter, header) = margins(show_coordinates);
    let x = column.checked_sub(area.x + gutter)?;
    let y = row.checked_sub(area.y + header)?;
    Position::new(y as usize, (x / CELL_WIDTH) as usize)
}

/// First history entry shown in a list of `height` rows.
///
/// Keeps the current entry roughly centred once the list overflows.
pub fn window_start(current: usize, len: usize, height: usize) -> usize {
    if height == 0 || len <= height {
        return 0;
    }
    current.saturating_sub(height / 2).min(len - height)
}

/// Maps a terminal cell to the history entry drawn there.
pub fn move_at(layout: &ScreenLayout, view: &GameView, column: u16, row: u16) -> Option<usize> {
    let area = inner(layout.moves);
    if column < area.x || column >= area.right() || row < area.y || row >= area.bottom() {
        return None;
    }
    let start = window_start(view.current_move(), view.move_count(), area.height as usize);
    let k = start + (row - area.y) as usize;
    (k < view.move_count()).then_some(k)
}

/// Draws the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let view = app.history().current_view();
    let layout = screen_layout(frame.area(), *app.config().show_coordinates());

    let title = Paragraph::new("Strictly Gomoku - Five in a Row")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, layout.title);

    draw_board(frame, layout.board, app, &view);
    draw_moves(frame, layout.moves, &view);

    let status_style = if app.announced().is_some() {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let status = Paragraph::new(app.status_message())
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, layout.status);

    let help = Paragraph::new(
        "Arrows/hjkl: move | Enter: place | [ ]: step | Home/End: start/latest | N: new | Q: quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(help, layout.help);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App, view: &GameView) {
    let config = app.config();
    let show_coordinates = *config.show_coordinates();
    let board = view.board();
    let winning = view.winning_line();
    let mut lines = Vec::with_capacity(BOARD_WIDTH + 1);

    if show_coordinates {
        let header: String = (0..BOARD_WIDTH).map(|col| format!("{} ", col % 10)).collect();
        lines.push(Line::from(Span::styled(
            format!("{:width$}{header}", "", width = GUTTER_WIDTH as usize),
            Style::default().fg(Color::DarkGray),
        )));
    }

    for row in 0..BOARD_WIDTH {
        let mut spans = Vec::with_capacity(BOARD_WIDTH + 1);
        if show_coordinates {
            spans.push(Span::styled(
                format!("{row:>2} "),
                Style::default().fg(Color::DarkGray),
            ));
        }
        for pos in (0..BOARD_WIDTH).filter_map(|col| Position::new(row, col)) {
            let (symbol, fg) = match board.get(pos) {
                Cell::Empty => ("·", Color::DarkGray),
                Cell::Black => (config.black_symbol().as_str(), Color::Black),
                Cell::Red => (config.red_symbol().as_str(), Color::Red),
            };
            let bg = if pos == app.cursor() {
                Color::Cyan
            } else if winning.is_some_and(|line| line.contains(pos)) {
                Color::LightGreen
            } else {
                Color::Yellow
            };
            spans.push(Span::styled(
                format!("{symbol} "),
                Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD),
            ));
        }
        lines.push(Line::from(spans));
    }

    let title = format!("Board - move {} of {}", view.current_move(), view.move_count() - 1);
    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(paragraph, area);
}

fn draw_moves(frame: &mut Frame, area: Rect, view: &GameView) {
    let height = inner(area).height as usize;
    let start = window_start(view.current_move(), view.move_count(), height);

    let lines: Vec<Line> = view
        .moves()
        .skip(start)
        .take(height)
        .map(|k| {
            if k == view.current_move() {
                Line::from(Span::styled(
                    format!("> {}", describe_move(k)),
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(format!("  {}", describe_move(k)))
            }
        })
        .collect();

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("History"));
    frame.render_widget(paragraph, area);
}
