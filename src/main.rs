#![allow(warnings)]
//! Crowdfund Frontend Entry Point

mod api;
mod app;
mod commands;
mod components;
mod config;
mod context;
mod error;
mod format;
mod forms;
mod models;
mod pledge;
mod session;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_logger::init(AppConfig::load().log_level) {
        web_sys::console::warn_1(&format!("logger already set: {}", err).into());
    }
    log::info!("starting, backend at {}", AppConfig::load().api_url);
    mount_to_body(App);
}
