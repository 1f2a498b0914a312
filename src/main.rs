//! Inventory Frontend Entry Point

mod models;
mod config;
mod error;
mod logger;
mod filter;
mod validation;
mod timing;
mod toast;
mod modal;
mod charts;
mod api;
mod dom;
mod context;
mod store;
mod components;
mod pages;
mod app;

use app::App;
use leptos::prelude::*;
use log::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(LevelFilter::Info);

    let Some(mount) = dom::mount_element() else {
        log::warn!("no #{} element, nothing to mount", config::MOUNT_ID);
        return;
    };
    let Some(config) = dom::read_page_config(&mount) else {
        log::warn!("#{} has no known data-page, nothing to mount", config::MOUNT_ID);
        return;
    };

    leptos::mount::mount_to(mount, move || view! { <App config=config /> }).forget();
}
