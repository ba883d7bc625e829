//! Shopping List Frontend Entry Point

use leptos::prelude::*;
use rolling_logger::RollingLogger;
use shopping_list::app::App;
use shopping_list::browser::{console_sink, install_panic_hook, read_config_script};
use shopping_list::config::{ListConfig, CONFIG_ELEMENT_ID};

fn main() {
    console_error_panic_hook::set_once();

    let loaded = read_config_script(CONFIG_ELEMENT_ID).map(|json| ListConfig::from_json(&json));
    let config = match &loaded {
        Some(Ok(config)) => config.clone(),
        _ => ListConfig::default(),
    };

    let level = config.level_filter().unwrap_or(log::LevelFilter::Info);
    match RollingLogger::new(level, config.log_capacity)
        .with_sink(console_sink)
        .install()
    {
        Ok(logger) => install_panic_hook(logger),
        Err(err) => {
            web_sys::console::warn_1(&format!("[APP] Logger already installed: {}", err).into());
        }
    }
    if let Some(Err(err)) = loaded {
        log::warn!("Ignoring {} block, using defaults: {}", CONFIG_ELEMENT_ID, err);
    }
    log::info!("Starting with storage key '{}'", config.storage_key);

    mount_to_body(move || view! { <App config=config /> });
}
