//! Planboard Admin UI
//!
//! A Leptos-based web interface for browsing care visits, clients, rosters
//! and alerts.

pub mod app;
pub mod components;
pub mod pages;
pub mod settings;
pub mod store;
pub mod theme;

use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

/// Initialize and mount the Leptos application
#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages
    console_error_panic_hook::set_once();

    let (settings, config_error) = settings::AppSettings::load();

    // Initialize logging
    let _ = console_log::init_with_level(settings.log_level());

    if let Some(e) = config_error {
        log::warn!("Embedded config rejected, using defaults: {}", e);
    }
    log::info!("Planboard Admin UI starting...");

    leptos::mount::mount_to_body(move || view! { <app::App settings=settings.clone() /> });
}
