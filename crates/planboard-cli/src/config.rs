//! Configuration loading for the Planboard CLI
//!
//! Lookup order: `--config PATH`, then `planboard.toml` in the platform config
//! directory (e.g. `~/.config/planboard/` on Linux), then built-in defaults.
//! `PLANBOARD_*` environment variables are applied last.

use anyhow::{Context, Result};
use planboard_core::PlanboardConfig;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "planboard.toml";

/// Platform config file path, if a home directory can be determined
pub fn default_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "planboard")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}

/// Config plus what happened while loading it. Nothing is logged here:
/// loading runs before the subscriber exists, so the caller reports it.
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: PlanboardConfig,
    /// File the config was read from, if any
    pub source: Option<PathBuf>,
    /// Environment overrides that were skipped
    pub ignored: Vec<String>,
}

impl LoadedConfig {
    /// Emit the deferred load events through the installed subscriber
    pub fn report(&self) {
        match &self.source {
            Some(path) => tracing::debug!(path = %path.display(), "Read config"),
            None => tracing::debug!("No config file, using defaults"),
        }
        for ignored in &self.ignored {
            tracing::warn!("{}", ignored);
        }
    }
}

pub fn load(explicit: Option<&str>) -> Result<LoadedConfig> {
    load_with(explicit, |key| std::env::var(key).ok())
}

fn load_with(
    explicit: Option<&str>,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<LoadedConfig> {
    let source = resolve_path(explicit.map(Path::new), default_config_path());
    let mut config = match &source {
        Some(path) => PlanboardConfig::from_file(path)
            .with_context(|| format!("Failed to load config file: {}", path.display()))?,
        None => PlanboardConfig::default(),
    };

    let ignored = config.apply_overrides(lookup);
    Ok(LoadedConfig {
        config,
        source,
        ignored,
    })
}

/// An explicit path is used as given; the platform path only when it exists
fn resolve_path(explicit: Option<&Path>, platform: Option<PathBuf>) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => platform.filter(|path| path.exists()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_path_wins() {
        let path = resolve_path(Some(Path::new("custom.toml")), Some(PathBuf::from("/nope")));
        assert_eq!(path, Some(PathBuf::from("custom.toml")));
    }

    #[test]
    fn test_missing_platform_file_is_skipped() {
        let path = resolve_path(None, Some(PathBuf::from("/definitely/not/here/planboard.toml")));
        assert_eq!(path, None);
    }

    #[test]
    fn test_bad_override_is_kept_for_reporting() {
        let loaded = load_with(None, |key| {
            (key == planboard_core::config::ENV_PAGE_SIZE).then(|| "7".to_string())
        })
        .unwrap();
        assert_eq!(loaded.config.pagination.default_page_size, planboard_core::DEFAULT_PAGE_SIZE);
        assert_eq!(loaded.ignored.len(), 1);
        assert!(loaded.ignored[0].contains("PLANBOARD_PAGE_SIZE"));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        assert!(load(Some("/definitely/not/here/planboard.toml")).is_err());
    }
}
