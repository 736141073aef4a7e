mod app;
mod config;
mod core;
mod error;
mod features;
mod models;
mod pages;
mod tauri_bridge;
mod utils;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    #[cfg(target_arch = "wasm32")]
    wasm_tracing::set_as_global_default();

    tracing::info!("starting task dashboard frontend");

    mount_to_body(App);
}
