mod app;
mod components;
pub mod config;
pub mod contract;
pub mod error;
pub mod ethereum;
pub mod gateway;
pub mod models;
pub mod operations;
pub mod provider;
pub mod state;
pub mod storage;
pub mod utils;
use app::App;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
