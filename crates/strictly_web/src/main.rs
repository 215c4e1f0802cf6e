use strictly_web::{Game, init_tracing};

fn main() {
    init_tracing();
    tracing::info!("Mounting game");
    yew::Renderer::<Game>::new().render();
}
