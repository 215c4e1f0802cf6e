//! Application state and key handling.

use super::input::{digit_position, move_cursor};
use crate::Settings;
use crossterm::event::KeyCode;
use strictly_tictactoe::{GameController, Position};
use tracing::{debug, info, instrument};

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move through the move list.
    Moves,
}

impl Focus {
    /// Switches to the other panel.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::Moves,
            Self::Moves => Self::Board,
        }
    }
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    game: GameController,
    cursor: Position,
    focus: Focus,
    selected_move: usize,
    show_hints: bool,
    should_quit: bool,
}

impl App {
    /// Creates a new application from user settings.
    #[instrument(skip(settings))]
    pub fn new(settings: &Settings) -> Self {
        Self {
            game: GameController::with_sort_order(settings.sort_order()),
            cursor: Position::Center,
            focus: Focus::Board,
            selected_move: 0,
            show_hints: *settings.show_hints(),
            should_quit: false,
        }
    }

    /// The game being played.
    pub fn game(&self) -> &GameController {
        &self.game
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused panel.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// History index highlighted in the move list.
    pub fn selected_move(&self) -> usize {
        self.selected_move
    }

    /// Whether empty squares show their key number.
    pub fn show_hints(&self) -> bool {
        self.show_hints
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Char('s') => self.game.toggle_sort(),
            KeyCode::Tab => {
                self.focus = self.focus.toggle();
                self.selected_move = self.game.current_move();
            }
            KeyCode::Char(' ') if self.focus == Focus::Board => self.click(self.cursor),
            KeyCode::Char(c) => {
                if let Some(position) = digit_position(c) {
                    self.cursor = position;
                    self.click(position);
                }
            }
            _ => match self.focus {
                Focus::Board => self.handle_board_key(key),
                Focus::Moves => self.handle_moves_key(key),
            },
        }
    }

    /// Handles a pointer click on a board cell.
    pub fn click(&mut self, position: Position) {
        if self.game.click(position) {
            self.selected_move = self.game.current_move();
        }
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter => self.click(self.cursor),
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            _ => {}
        }
    }

    fn handle_moves_key(&mut self, key: KeyCode) {
        let entries = self.game.move_list();
        let slot = entries
            .iter()
            .position(|entry| entry.index() == self.selected_move)
            .unwrap_or(0);
        match key {
            KeyCode::Up => {
                if let Some(entry) = slot.checked_sub(1).and_then(|s| entries.get(s)) {
                    self.selected_move = entry.index();
                }
            }
            KeyCode::Down => {
                if let Some(entry) = entries.get(slot + 1) {
                    self.selected_move = entry.index();
                }
            }
            KeyCode::Enter => {
                debug!(selected = self.selected_move, "Jumping to selected move");
                self.game.jump_to(self.selected_move);
            }
            _ => {}
        }
    }
}
