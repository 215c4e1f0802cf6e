//! The status line and the 3x3 grid of cells.

use super::Cell;
use strictly_tictactoe::{BoardView, Position};
use tracing::debug;
use yew::prelude::*;

/// Properties for [`BoardGrid`].
#[derive(Properties, PartialEq)]
pub struct BoardGridProps {
    /// View of the displayed board.
    pub view: BoardView,
    /// Called with the position of each accepted click.
    pub on_play: Callback<Position>,
}

/// Renders the status line and the grid; drops clicks on occupied cells
/// and on finished boards.
#[function_component(BoardGrid)]
pub fn board_grid(props: &BoardGridProps) -> Html {
    let view = props.view;
    let on_click = {
        let on_play = props.on_play.clone();
        Callback::from(move |pos: Position| match view.handle_click(pos) {
            Some(pos) => on_play.emit(pos),
            None => debug!(?pos, "Click ignored"),
        })
    };

    html! {
        <>
            <div class="status">{ view.status().to_string() }</div>
            { for view.rows().into_iter().enumerate().map(|(row, cells)| html! {
                <div key={row.to_string()} class="board-row">
                    { for cells.into_iter().map(|cell| html! {
                        <Cell
                            key={cell.position().to_index().to_string()}
                            {cell}
                            on_click={on_click.clone()}
                        />
                    }) }
                </div>
            }) }
        </>
    }
}
