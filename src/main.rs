//! Shopping List Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod error;
mod filter;
mod models;
mod store;
mod sync;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("[APP] Mounting shopping list");
    mount_to_body(App);
}
