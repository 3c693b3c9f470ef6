//! ntab Entry Point
//!
//! A widget-based new-tab page rendered client-side with Leptos.

mod app;
mod clock;
mod commands;
mod components;
mod config;
mod context;
mod error;
mod geo;
mod logger;
mod models;
mod schema;
mod storage;
mod store;
mod widget_store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);
    mount_to_body(App);
}
