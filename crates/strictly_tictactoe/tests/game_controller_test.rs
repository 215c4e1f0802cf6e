//! Scenario tests for the game controller.

use strictly_tictactoe::{GameController, GameStatus, Player, Position, SortOrder, Square};

fn play_all(game: &mut GameController, indices: &[usize]) {
    for &index in indices {
        assert!(game.play(index), "move {index} should be accepted");
    }
}

#[test]
fn test_first_move_in_center() {
    let mut game = GameController::new();
    assert!(game.click(Position::Center));

    assert_eq!(game.status().to_string(), "Next Player: O");
    let view = game.board_view();
    assert_eq!(view.cells()[4].label(), "X");
    assert_eq!(game.current_board().get(Position::Center), Square::Occupied(Player::X));
}

#[test]
fn test_x_wins_top_row() {
    let mut game = GameController::new();
    play_all(&mut game, &[0, 3, 1, 4, 2]);

    let view = game.board_view();
    let line = view.status().winning_line().expect("top row complete");
    assert_eq!(
        line.positions(),
        [Position::TopLeft, Position::TopCenter, Position::TopRight]
    );
    assert_eq!(view.status().to_string(), "Winner: X");

    let highlighted: Vec<usize> = view
        .cells()
        .iter()
        .filter(|cell| cell.highlight())
        .map(|cell| cell.position().to_index())
        .collect();
    assert_eq!(highlighted, vec![0, 1, 2]);

    // Board is inert after the win.
    let len = game.history().len();
    for pos in Position::valid_moves(game.current_board()) {
        assert!(!game.click(pos));
        assert!(!game.play_position(pos));
    }
    assert_eq!(game.history().len(), len);
}

#[test]
fn test_full_board_is_a_draw() {
    let mut game = GameController::new();
    // X O X / X O O / O X X
    play_all(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert_eq!(game.status(), GameStatus::Draw);
    assert_eq!(game.status().to_string(), "Game is Draw!");
    assert!(game.board_view().cells().iter().all(|cell| !cell.highlight()));
}

#[test]
fn test_clicking_occupied_cell_is_a_no_op() {
    let mut game = GameController::new();
    game.click(Position::Center);
    let before = game.clone();

    assert!(!game.click(Position::Center));
    assert_eq!(game, before);
}

#[test]
fn test_play_after_jump_truncates_history() {
    let mut game = GameController::new();
    play_all(&mut game, &[0, 4, 8, 2]);
    assert_eq!(game.history().len(), 5);

    game.jump_to(1);
    assert_eq!(game.next_player(), Player::O);
    assert!(game.click(Position::BottomLeft));

    assert_eq!(game.history().len(), 3);
    assert_eq!(game.current_move(), 2);
    let board = game.current_board();
    assert_eq!(board.get(Position::TopLeft), Square::Occupied(Player::X));
    assert_eq!(board.get(Position::BottomLeft), Square::Occupied(Player::O));
    assert!(board.is_empty(Position::Center));
}

#[test]
fn test_jump_back_from_won_board_reopens_play() {
    let mut game = GameController::new();
    play_all(&mut game, &[0, 3, 1, 4, 2]);
    assert!(game.board_view().is_terminal());

    game.jump_to(4);
    assert!(!game.board_view().is_terminal());
    assert!(game.click(Position::BottomRight));
    assert_eq!(game.history().len(), 6);
}

#[test]
fn test_toggle_sort_reverses_list_only() {
    let mut game = GameController::new();
    play_all(&mut game, &[4, 0, 8]);
    game.jump_to(2);

    let ascending = game.move_list();
    let history_before = game.history().clone();

    game.toggle_sort();
    assert_eq!(game.sort_order(), SortOrder::Descending);
    assert_eq!(game.sort_label(), "Asc");

    let descending = game.move_list();
    let mut reversed = ascending.clone();
    reversed.reverse();
    assert_eq!(descending, reversed);
    assert_eq!(game.current_move(), 2);
    assert_eq!(game.history(), &history_before);

    // The current label follows its index, not its screen slot.
    let current: Vec<usize> = descending
        .iter()
        .filter(|entry| entry.is_current())
        .map(|entry| entry.index())
        .collect();
    assert_eq!(current, vec![2]);
    assert_eq!(descending[1].description(), "You are at (0, 0)");
}
