//! Procedure Todo Frontend Entry Point

mod app;
mod collection;
mod commands;
mod components;
mod config;
mod context;
mod draft;
mod error;
mod models;
mod store;
mod sync;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    #[cfg(target_arch = "wasm32")]
    tracing_wasm::set_as_global_default();
    mount_to_body(App);
}
