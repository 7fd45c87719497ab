//! Theme and pagination context
//!
//! The app root provides one [`Theme`] and one [`PaginationConfig`] through
//! Leptos context. Tables read them here unless a page passes its own.

use leptos::prelude::*;
use planboard_core::config::PaginationConfig;
use planboard_core::Theme;

use crate::settings::AppSettings;

pub fn provide_settings(settings: &AppSettings) {
    provide_context(settings.theme.clone());
    provide_context(settings.pagination().clone());
}

pub fn use_theme() -> Theme {
    use_context::<Theme>().unwrap_or_default()
}

pub fn use_pagination_config() -> PaginationConfig {
    use_context::<PaginationConfig>().unwrap_or_default()
}
