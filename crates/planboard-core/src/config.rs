//! Configuration for Planboard
//!
//! Example `planboard.toml`:
//! ```toml
//! [pagination]
//! default_page_size = 10
//! page_size_options = [10, 25, 50, 100]
//!
//! [theme]
//! preset = "planboard"
//! accent = "#2563eb"
//!
//! [logging]
//! level = "info"
//! ```

use crate::theme::{validate_color, ThemePreset};
use crate::{Error, Result, DEFAULT_PAGE_SIZE, DEFAULT_PAGE_SIZE_OPTIONS};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const ENV_PAGE_SIZE: &str = "PLANBOARD_PAGE_SIZE";
pub const ENV_THEME: &str = "PLANBOARD_THEME";
pub const ENV_LOG_LEVEL: &str = "PLANBOARD_LOG_LEVEL";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanboardConfig {
    #[serde(default)]
    pub pagination: PaginationConfig,

    #[serde(default)]
    pub theme: ThemeConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl PlanboardConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults with environment overrides applied
    pub fn from_env() -> Self {
        let mut config = Self::default();
        for ignored in config.apply_env() {
            tracing::warn!("{}", ignored);
        }
        config
    }

    /// Apply `PLANBOARD_*` variables; see [`Self::apply_overrides`]
    pub fn apply_env(&mut self) -> Vec<String> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key lookup. Unusable values are skipped so a
    /// typo in the environment never stops startup; each one is described in
    /// the returned list for the caller to report.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Vec<String> {
        let mut ignored = Vec::new();
        if let Some(size) = lookup(ENV_PAGE_SIZE) {
            match size.trim().parse::<usize>() {
                Ok(n) if self.pagination.page_size_options.contains(&n) => {
                    self.pagination.default_page_size = n;
                }
                _ => ignored.push(format!(
                    "Ignoring {}={:?}: expected one of {:?}",
                    ENV_PAGE_SIZE, size, self.pagination.page_size_options
                )),
            }
        }
        if let Some(theme) = lookup(ENV_THEME) {
            match theme.parse::<ThemePreset>() {
                Ok(preset) => self.theme.preset = preset,
                Err(e) => ignored.push(format!("Ignoring {}: {}", ENV_THEME, e)),
            }
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.logging.level = level;
        }
        ignored
    }

    pub fn validate(&self) -> Result<()> {
        self.pagination.validate()?;
        self.theme.validate()?;
        Ok(())
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationConfig {
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,

    /// Sizes offered by the page-size selector, ascending
    #[serde(default = "default_page_size_options")]
    pub page_size_options: Vec<usize>,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_page_size_options() -> Vec<usize> {
    DEFAULT_PAGE_SIZE_OPTIONS.to_vec()
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            page_size_options: default_page_size_options(),
        }
    }
}

impl PaginationConfig {
    pub fn validate(&self) -> Result<()> {
        let options = &self.page_size_options;
        if options.is_empty() {
            return Err(Error::InvalidPageSizeOptions("no options given".into()));
        }
        if options.contains(&0) {
            return Err(Error::InvalidPageSizeOptions("page size 0".into()));
        }
        if options.windows(2).any(|w| w[0] >= w[1]) {
            return Err(Error::InvalidPageSizeOptions(format!(
                "{:?} is not strictly ascending",
                options
            )));
        }
        self.check_page_size(self.default_page_size)
    }

    /// Errors unless `size` is one of the allowed options
    pub fn check_page_size(&self, size: usize) -> Result<()> {
        if self.page_size_options.contains(&size) {
            Ok(())
        } else {
            Err(Error::InvalidPageSize {
                size,
                options: self.page_size_options.clone(),
            })
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeConfig {
    #[serde(default)]
    pub preset: ThemePreset,

    /// Overrides the preset's primary colour, `#RRGGBB`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
}

impl ThemeConfig {
    pub fn validate(&self) -> Result<()> {
        match &self.accent {
            Some(accent) => validate_color(accent),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = PlanboardConfig::default();
        assert_eq!(config.pagination.default_page_size, 10);
        assert_eq!(config.pagination.page_size_options, vec![10, 25, 50, 100]);
        assert_eq!(config.theme.preset, ThemePreset::Planboard);
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_toml() {
        let config = PlanboardConfig::from_toml_str(
            r##"
            [pagination]
            default_page_size = 25

            [theme]
            preset = "modern"
            accent = "#10b981"
            "##,
        )
        .unwrap();
        assert_eq!(config.pagination.default_page_size, 25);
        assert_eq!(config.pagination.page_size_options, vec![10, 25, 50, 100]);
        assert_eq!(config.theme.preset, ThemePreset::Modern);
        assert_eq!(config.theme.accent.as_deref(), Some("#10b981"));
    }

    #[test]
    fn test_rejects_default_outside_options() {
        let err = PlanboardConfig::from_toml_str(
            r#"
            [pagination]
            default_page_size = 15
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidPageSize { size: 15, .. }));
        assert!(err.is_config());
    }

    #[test]
    fn test_rejects_unsorted_options() {
        let config = PaginationConfig {
            default_page_size: 10,
            page_size_options: vec![50, 10],
        };
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidPageSizeOptions(_))
        ));
    }

    #[test]
    fn test_rejects_bad_accent() {
        let err = PlanboardConfig::from_toml_str(
            r#"
            [theme]
            accent = "blue"
            "#,
        )
        .unwrap_err();
        assert_eq!(err.code(), "InvalidColor");
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            (ENV_PAGE_SIZE, "50"),
            (ENV_THEME, "slate"),
            (ENV_LOG_LEVEL, "debug"),
        ]
        .into_iter()
        .collect();
        let mut config = PlanboardConfig::default();
        let ignored = config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));
        assert!(ignored.is_empty());
        assert_eq!(config.pagination.default_page_size, 50);
        assert_eq!(config.theme.preset, ThemePreset::Slate);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_invalid_overrides_are_ignored() {
        let mut config = PlanboardConfig::default();
        let ignored = config.apply_overrides(|key| match key {
            ENV_PAGE_SIZE => Some("7".into()),
            ENV_THEME => Some("neon".into()),
            _ => None,
        });
        assert_eq!(config, PlanboardConfig::default());
        assert_eq!(ignored.len(), 2);
        assert!(ignored[0].starts_with("Ignoring PLANBOARD_PAGE_SIZE=\"7\""));
        assert!(ignored[1].contains("neon"));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = PlanboardConfig::default();
        let text = config.to_toml_string().unwrap();
        assert_eq!(PlanboardConfig::from_toml_str(&text).unwrap(), config);
    }
}
