//! CLI command implementations

pub mod config;
pub mod datasets;
pub mod list;

use planboard_core::PlanboardConfig;

/// Context passed to all commands
pub struct CommandContext {
    pub config: PlanboardConfig,
    pub color: bool,
}
