pub mod app;
pub mod projections;
pub mod shared;

use crate::app::App;
use crate::shared::config::{load_config, AppConfig};
use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    let config = load_config();

    // initializes logging using the `log` crate
    let level = config
        .as_ref()
        .map(AppConfig::log_level)
        .unwrap_or(log::Level::Debug);
    _ = console_log::init_with_level(level);
    console_error_panic_hook::set_once();

    let config = config.unwrap_or_else(|e| {
        log::warn!("Failed to load config, using defaults: {:#}", e);
        AppConfig::default()
    });

    leptos::mount::mount_to_body(move || view! { <App config=config.clone() /> });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
