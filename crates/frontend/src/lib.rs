//! Trademark search frontend (Leptos, client-side rendering).

pub mod app;
pub mod search;
pub mod shared;

use wasm_bindgen::prelude::wasm_bindgen;

fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log_level());
    console_error_panic_hook::set_once();

    log::info!("Trademark search starting");
    leptos::mount::mount_to_body(app::App);
}
