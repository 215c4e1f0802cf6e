//! A single clickable board square.

use strictly_tictactoe::{CellView, Position};
use yew::prelude::*;

/// Properties for [`Cell`].
#[derive(Properties, PartialEq)]
pub struct CellProps {
    /// The cell to render.
    pub cell: CellView,
    /// Shared click handler; receives this cell's position.
    pub on_click: Callback<Position>,
}

/// Renders one square. Clicks are forwarded unvalidated.
#[function_component(Cell)]
pub fn cell(props: &CellProps) -> Html {
    let onclick = {
        let cell = props.cell;
        let on_click = props.on_click.clone();
        Callback::from(move |_: MouseEvent| cell.click(|pos| on_click.emit(pos)))
    };
    let class = classes!("square", props.cell.highlight().then_some("highlight"));

    html! {
        <button {class} {onclick}>{ props.cell.label() }</button>
    }
}
