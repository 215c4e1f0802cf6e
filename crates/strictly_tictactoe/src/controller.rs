//! Game controller: owns the move history and drives play, time travel
//! and move-list ordering.

use crate::view::BoardView;
use crate::{Board, GameStatus, History, Player, Position};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Display order of the move list.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortOrder {
    /// Oldest move first.
    #[default]
    Ascending,
    /// Newest move first.
    Descending,
}

impl SortOrder {
    /// Toggles between `Ascending` and `Descending`.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Label of the button that switches away from this order.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Self::Ascending => "Desc",
            Self::Descending => "Asc",
        }
    }
}

/// One entry of the rendered move list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveEntry {
    index: usize,
    description: String,
    is_current: bool,
}

impl MoveEntry {
    fn new(index: usize, position: Option<Position>, is_current: bool) -> Self {
        let description = match (is_current, position) {
            (true, None) => "You are at Start".to_string(),
            (true, Some(pos)) => format!("You are at {}", pos.coordinates()),
            (false, None) => "Go to Start".to_string(),
            (false, Some(pos)) => format!("Go to move {}", pos.coordinates()),
        };
        Self {
            index,
            description,
            is_current,
        }
    }

    /// History index this entry jumps to.
    pub fn index(&self) -> usize {
        self.index
    }

    /// One-based entry number shown next to the jump button.
    pub fn number(&self) -> usize {
        self.index + 1
    }

    /// Entry label.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether this entry is the displayed board.
    pub fn is_current(&self) -> bool {
        self.is_current
    }
}

/// Owns the full game: history, current move pointer and move-list order.
///
/// Invalid actions are silently ignored; nothing here returns an error.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameController {
    history: History,
    current_move: usize,
    sort_order: SortOrder,
}

impl GameController {
    /// Creates a controller at the start of an empty game.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating game controller");
        Self::default()
    }

    /// Creates a controller with the given initial move-list order.
    #[instrument]
    pub fn with_sort_order(sort_order: SortOrder) -> Self {
        Self {
            sort_order,
            ..Self::new()
        }
    }

    /// The full move history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Index of the displayed history record.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// Current move-list order.
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Label for the sort toggle button.
    pub fn sort_label(&self) -> &'static str {
        self.sort_order.toggle_label()
    }

    /// The displayed board.
    pub fn current_board(&self) -> &Board {
        self.history.records()[self.current_move].board()
    }

    /// Player to move on the displayed board.
    pub fn next_player(&self) -> Player {
        Player::for_move(self.current_move)
    }

    /// View of the displayed board.
    pub fn board_view(&self) -> BoardView {
        BoardView::new(*self.current_board(), self.next_player())
    }

    /// Status of the displayed board.
    pub fn status(&self) -> GameStatus {
        self.board_view().status()
    }

    /// Handles a click on a board cell, validated the way the board does.
    ///
    /// Returns whether a move was made.
    #[instrument(skip(self))]
    pub fn click(&mut self, position: Position) -> bool {
        match self.board_view().handle_click(position) {
            Some(position) => self.play_position(position),
            None => false,
        }
    }

    /// Plays at board index `index` (0-8).
    ///
    /// Out-of-range indices are ignored. Returns whether a move was made.
    #[instrument(skip(self))]
    pub fn play(&mut self, index: usize) -> bool {
        match Position::from_index(index) {
            Some(position) => self.play_position(position),
            None => {
                debug!(index, "Ignoring out-of-range play");
                false
            }
        }
    }

    /// Plays the next mark at `position` on the displayed board.
    ///
    /// Any history past the displayed board is discarded first. Occupied
    /// cells and terminal boards are ignored. Returns whether a move was
    /// made.
    #[instrument(skip(self), fields(current_move = self.current_move))]
    pub fn play_position(&mut self, position: Position) -> bool {
        let view = self.board_view();
        if view.is_terminal() || !view.board().is_empty(position) {
            debug!(status = %view.status(), "Ignoring play");
            return false;
        }

        let player = self.next_player();
        self.current_move = self.history.branch(self.current_move, position, player);
        debug!(
            %player,
            coordinates = %position.coordinates(),
            current_move = self.current_move,
            "Move played"
        );
        true
    }

    /// Displays the history record at `index`.
    ///
    /// Indices outside the history are ignored.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, index: usize) {
        if index >= self.history.len() {
            warn!(index, len = self.history.len(), "Ignoring jump past history");
            return;
        }
        debug!(from = self.current_move, to = index, "Jumping");
        self.current_move = index;
    }

    /// Flips the move-list order.
    #[instrument(skip(self))]
    pub fn toggle_sort(&mut self) {
        self.sort_order = self.sort_order.toggle();
        debug!(sort_order = %self.sort_order, "Sort order toggled");
    }

    /// The move list in display order.
    ///
    /// Every entry keeps its own history index, so reversing the order
    /// never changes which entry is current.
    pub fn move_list(&self) -> Vec<MoveEntry> {
        let mut entries: Vec<MoveEntry> = self
            .history
            .records()
            .iter()
            .enumerate()
            .map(|(index, record)| {
                MoveEntry::new(index, record.position(), index == self.current_move)
            })
            .collect();
        if self.sort_order == SortOrder::Descending {
            entries.reverse();
        }
        entries
    }
}
