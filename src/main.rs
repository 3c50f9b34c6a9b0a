//! Image Metadata Frontend Entry Point

mod app;
mod collection;
mod commands;
mod components;
mod config;
mod context;
mod editor;
mod error;
mod host;
mod models;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_logger::init(config::LOG_LEVEL) {
        web_sys::console::error_1(&format!("logger already installed: {}", err).into());
    }
    mount_to_body(App);
}
