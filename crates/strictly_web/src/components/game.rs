//! Game root: owns the controller and renders the board and move list.

use super::BoardGrid;
use std::rc::Rc;
use strictly_tictactoe::{GameController, MoveEntry, Position};
use tracing::debug;
use yew::prelude::*;

/// Actions dispatched by the game UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Place the next mark at a position the board accepted.
    Play(Position),
    /// Show the board after the given history index.
    JumpTo(usize),
    /// Flip the move-list order.
    ToggleSort,
}

/// Reducer state wrapping the game controller.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameState {
    controller: GameController,
}

impl GameState {
    /// The game controller.
    pub fn controller(&self) -> &GameController {
        &self.controller
    }
}

impl Reducible for GameState {
    type Action = GameAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        debug!(?action, "Reducing game action");
        let mut next = (*self).clone();
        let changed = match action {
            GameAction::Play(pos) => next.controller.play_position(pos),
            GameAction::JumpTo(index) => {
                next.controller.jump_to(index);
                next.controller.current_move() != self.controller.current_move()
            }
            GameAction::ToggleSort => {
                next.controller.toggle_sort();
                true
            }
        };
        if changed { Rc::new(next) } else { self }
    }
}

/// Properties for [`MoveItem`].
#[derive(Properties, PartialEq)]
pub struct MoveItemProps {
    /// The move-list entry.
    pub entry: MoveEntry,
    /// Shared jump handler; receives the entry's history index.
    pub on_jump: Callback<usize>,
}

/// One move-list row: plain text for the current move, a numbered jump
/// button otherwise.
#[function_component(MoveItem)]
pub fn move_item(props: &MoveItemProps) -> Html {
    let entry = &props.entry;
    if entry.is_current() {
        return html! { <div>{ entry.description().to_string() }</div> };
    }

    let onclick = {
        let index = entry.index();
        let on_jump = props.on_jump.clone();
        Callback::from(move |_: MouseEvent| on_jump.emit(index))
    };
    html! {
        <div>
            { format!("{} ", entry.number()) }
            <button {onclick}>{ entry.description().to_string() }</button>
        </div>
    }
}

/// The whole game: board on the left, sort toggle and move list on the
/// right.
#[function_component(Game)]
pub fn game() -> Html {
    let state = use_reducer(GameState::default);

    let on_play = {
        let state = state.clone();
        Callback::from(move |pos: Position| state.dispatch(GameAction::Play(pos)))
    };
    let on_jump = {
        let state = state.clone();
        Callback::from(move |index: usize| state.dispatch(GameAction::JumpTo(index)))
    };
    let on_sort = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| state.dispatch(GameAction::ToggleSort))
    };

    let controller = state.controller();
    html! {
        <div class="game">
            <div class="game-board">
                <BoardGrid view={controller.board_view()} {on_play} />
            </div>
            <div class="game-info">
                { "Sort: " }
                <button onclick={on_sort}>{ controller.sort_label() }</button>
                <div>
                    { for controller.move_list().into_iter().map(|entry| {
                        let key = entry.index().to_string();
                        html! { <MoveItem key={key} {entry} on_jump={on_jump.clone()} /> }
                    }) }
                </div>
            </div>
        </div>
    }
}
