//! config command - print the effective configuration

use super::CommandContext;
use anyhow::Result;

pub fn execute(ctx: &CommandContext) -> Result<()> {
    if let Some(path) = crate::config::default_config_path() {
        tracing::debug!(path = %path.display(), "Platform config path");
    }
    print!("{}", ctx.config.to_toml_string()?);
    Ok(())
}
