//! Settings embedded at build time

use planboard_core::config::PaginationConfig;
use planboard_core::{Error, PlanboardConfig, Theme};
use std::str::FromStr;

const EMBEDDED_CONFIG: &str = include_str!("../planboard.toml");

/// Resolved configuration for one app instance
#[derive(Debug, Clone, PartialEq)]
pub struct AppSettings {
    pub config: PlanboardConfig,
    pub theme: Theme,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self::from_config(PlanboardConfig::default())
    }
}

impl AppSettings {
    /// Load the embedded config. A rejected config never stops the UI; the
    /// error is handed back so it can be logged once logging is up.
    pub fn load() -> (Self, Option<Error>) {
        Self::parse(EMBEDDED_CONFIG)
    }

    pub fn parse(toml: &str) -> (Self, Option<Error>) {
        match PlanboardConfig::from_toml_str(toml) {
            Ok(config) => (Self::from_config(config), None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    pub fn from_config(config: PlanboardConfig) -> Self {
        // from_toml_str already validated the accent
        let theme = Theme::from_config(&config.theme).unwrap_or_else(|_| Theme::preset(config.theme.preset));
        Self { config, theme }
    }

    pub fn pagination(&self) -> &PaginationConfig {
        &self.config.pagination
    }

    pub fn log_level(&self) -> log::Level {
        log::Level::from_str(&self.config.logging.level).unwrap_or(log::Level::Info)
    }
}
