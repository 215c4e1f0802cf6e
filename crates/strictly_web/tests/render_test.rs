//! HTML structure of the browser components, rendered server-side.

use strictly_tictactoe::{GameController, Position};
use strictly_web::Game;
use strictly_web::components::{BoardGrid, BoardGridProps, MoveItem, MoveItemProps};
use yew::{Callback, ServerRenderer};

fn controller_after(moves: &[Position]) -> GameController {
    let mut game = GameController::new();
    for &pos in moves {
        assert!(game.click(pos), "move {pos:?} should be accepted");
    }
    game
}

async fn render_move_item(game: &GameController, slot: usize) -> String {
    let entry = game.move_list()[slot].clone();
    ServerRenderer::<MoveItem>::with_props(move || MoveItemProps {
        entry,
        on_jump: Callback::from(|_| ()),
    })
    .hydratable(false)
    .render()
    .await
}

#[tokio::test]
async fn test_initial_page_structure() {
    let html = ServerRenderer::<Game>::new()
        .hydratable(false)
        .render()
        .await;

    assert!(html.contains(r#"<div class="status">Next Player: X</div>"#));
    assert_eq!(html.matches(r#"<div class="board-row">"#).count(), 3);
    assert_eq!(html.matches(r#"<button class="square"></button>"#).count(), 9);
    assert!(!html.contains("highlight"));
    assert!(html.contains("Sort: <button>Desc</button>"));
    assert!(html.contains("<div>You are at Start</div>"));
}

#[tokio::test]
async fn test_won_board_highlights_only_the_line() {
    use Position::*;
    let game = controller_after(&[TopLeft, MiddleLeft, TopCenter, Center, TopRight]);
    let view = game.board_view();

    let html = ServerRenderer::<BoardGrid>::with_props(move || BoardGridProps {
        view,
        on_play: Callback::from(|_| ()),
    })
    .hydratable(false)
    .render()
    .await;

    assert!(html.contains(r#"<div class="status">Winner: X</div>"#));
    assert_eq!(
        html.matches(r#"<button class="square highlight">X</button>"#)
            .count(),
        3
    );
    assert_eq!(html.matches("highlight").count(), 3);
    assert_eq!(html.matches(r#"<button class="square">O</button>"#).count(), 2);
}

#[tokio::test]
async fn test_move_items_number_jump_buttons() {
    let game = controller_after(&[Position::Center, Position::TopLeft]);

    let start = render_move_item(&game, 0).await;
    assert!(start.contains("<div>1 <button>Go to Start</button></div>"));

    let first = render_move_item(&game, 1).await;
    assert!(first.contains("<div>2 <button>Go to move (1, 1)</button></div>"));
}

#[tokio::test]
async fn test_current_move_item_is_plain_text() {
    let game = controller_after(&[Position::Center, Position::TopLeft]);

    let current = render_move_item(&game, 2).await;
    assert!(current.contains("<div>You are at (0, 0)</div>"));
    assert!(!current.contains("<button"));
}
