//! Forms Dashboard Frontend Entry Point

mod actions;
mod api;
mod app;
mod components;
mod config;
mod error;
mod logging;
mod models;
mod notify;
mod pages;
mod routes;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logging::init(log::LevelFilter::Info);

    let config = AppConfig::load();
    log::set_max_level(config.level_filter());
    log::info!("[APP] Starting forms dashboard (api: {})", config.api_base_url);

    mount_to_body(move || view! { <App config=config /> });
}
