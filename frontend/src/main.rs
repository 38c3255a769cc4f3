use connections_frontend::App;
use yew::Renderer;

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Starting Connections AI");

    Renderer::<App>::new().render();
}
