mod components;
mod config;
mod error;
mod logging;
mod model;
mod platform;
mod state;

use components::{App, AppProps};

fn main() {
    let config = platform::storage::load_config();
    logging::init(&config);
    tracing::info!("finger picker starting");
    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
