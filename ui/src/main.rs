use ui::{App, init_logging};

fn main() {
    init_logging();
    yew::Renderer::<App>::new().render();
}
