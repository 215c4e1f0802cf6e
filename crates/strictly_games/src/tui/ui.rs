//! Stateless UI rendering for tic-tac-toe.

use super::app::{App, Focus};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use strictly_tictactoe::{CellView, GameStatus, Player, Position, Square};

const BOARD_WIDTH: u16 = 40;
const BOARD_HEIGHT: u16 = 11;
const MOVES_WIDTH: u16 = 34;

/// Screen regions of the game layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Areas {
    /// Title bar.
    pub title: Rect,
    /// The 3x3 grid, separators included.
    pub board: Rect,
    /// Status line.
    pub status: Rect,
    /// Move-list panel.
    pub moves: Rect,
    /// Key help.
    pub footer: Rect,
}

/// Splits the frame into the game regions.
pub fn areas(area: Rect) -> Areas {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(BOARD_HEIGHT + 3),
            Constraint::Length(1), // Footer
        ])
        .split(area);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(BOARD_WIDTH + 2), Constraint::Length(MOVES_WIDTH)])
        .split(outer[1]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(BOARD_HEIGHT), Constraint::Length(3)])
        .split(body[0]);

    Areas {
        title: outer[0],
        board: center_rect(left[0], BOARD_WIDTH, BOARD_HEIGHT),
        status: left[1],
        moves: body[1],
        footer: outer[2],
    }
}

/// Screen rectangle of each cell, in board index order.
pub fn cell_areas(board_area: Rect) -> [Rect; 9] {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    let mut cells = [Rect::default(); 9];
    for (row, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(12),
                Constraint::Length(2),
                Constraint::Length(12),
                Constraint::Length(2),
                Constraint::Length(12),
            ])
            .split(row_area);
        for (col, col_area) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
            cells[row * 3 + col] = col_area;
        }
    }
    cells
}

/// Finds the cell under terminal coordinates `(column, row)`.
pub fn cell_at(board_area: Rect, column: u16, row: u16) -> Option<Position> {
    cell_areas(board_area)
        .iter()
        .position(|r| {
            column >= r.x && column < r.x + r.width && row >= r.y && row < r.y + r.height
        })
        .and_then(Position::from_index)
}

/// Renders the whole game screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let areas = areas(frame.area());
    let game = app.game();
    let view = game.board_view();

    let title = Paragraph::new("Strictly Games - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, areas.title);

    draw_board(frame, areas.board, app, &view.cells());
    draw_status(frame, areas.status, view.status());
    draw_moves(frame, areas.moves, app);

    let help = Paragraph::new(
        "arrows/1-9: move  enter/space: play  tab: switch panel  s: sort  q: quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(help, areas.footer);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App, cells: &[CellView; 9]) {
    let cell_areas = cell_areas(area);
    for (cell, cell_area) in cells.iter().zip(cell_areas) {
        draw_cell(frame, cell_area, app, cell);
    }

    let rows = [cell_areas[0].y + 3, cell_areas[3].y + 3];
    for y in rows {
        let sep = Paragraph::new("─".repeat(area.width as usize))
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(sep, Rect::new(area.x, y, area.width, 1));
    }
    for x in [cell_areas[0].x + 12, cell_areas[1].x + 12] {
        for y in [cell_areas[0].y, cell_areas[3].y, cell_areas[6].y] {
            let sep = Paragraph::new("│\n│\n│").style(Style::default().fg(Color::DarkGray));
            frame.render_widget(sep, Rect::new(x, y, 1, 3));
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, cell: &CellView) {
    let pos = cell.position();
    let (symbol, base_style) = match cell.square() {
        Square::Empty if app.show_hints() => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Empty => (String::new(), Style::default()),
        Square::Occupied(Player::X) => (
            cell.label().to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            cell.label().to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if cell.highlight() {
        base_style.bg(Color::Green).fg(Color::Black)
    } else if app.focus() == Focus::Board && pos == app.cursor() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let text = vec![
        Line::default(),
        Line::from(Span::styled(format!(" {symbol} "), style)),
    ];
    let paragraph = Paragraph::new(text).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_status(frame: &mut Frame, area: Rect, status: GameStatus) {
    let color = match status {
        GameStatus::InProgress { .. } => Color::Yellow,
        GameStatus::Won(_) => Color::Green,
        GameStatus::Draw => Color::Magenta,
    };
    let status_text = Paragraph::new(status.to_string())
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_text, area);
}

fn draw_moves(frame: &mut Frame, area: Rect, app: &App) {
    let game = app.game();
    let items: Vec<ListItem> = game
        .move_list()
        .iter()
        .map(|entry| {
            let text = if entry.is_current() {
                entry.description().to_string()
            } else {
                format!("{} [{}]", entry.number(), entry.description())
            };
            let mut style = if entry.is_current() {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            if app.focus() == Focus::Moves && entry.index() == app.selected_move() {
                style = style.add_modifier(Modifier::REVERSED);
            }
            ListItem::new(Line::from(Span::styled(text, style)))
        })
        .collect();

    let border_style = if app.focus() == Focus::Moves {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!("Moves  Sort: {}", game.sort_label())),
    );
    frame.render_widget(list, area);
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
