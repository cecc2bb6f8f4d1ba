//! Items Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod form;
mod models;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;
use log::LevelFilter;

const CONFIG_JSON: &str = include_str!("../app.config.json");

fn main() {
    console_error_panic_hook::set_once();

    let loaded = AppConfig::from_json(CONFIG_JSON);
    let level = match &loaded {
        Ok(config) => config.level_filter(),
        Err(_) => Ok(LevelFilter::Info),
    };
    if let Err(err) = console_logger::init(level.as_ref().copied().unwrap_or(LevelFilter::Info)) {
        web_sys::console::warn_1(&err.to_string().into());
    }
    if let Err(err) = level {
        log::warn!("{}, falling back to info", err);
    }

    let config = loaded.unwrap_or_else(|err| {
        log::warn!("using default config: {}", err);
        AppConfig::default()
    });
    log::info!("starting {}", config.title);

    mount_to_body(move || view! { <App config=config /> });
    log::debug!("mounted, {} log lines buffered", console_logger::logger().recent().len());
}
