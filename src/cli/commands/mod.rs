//! Subcommand implementations.

/// One-shot generation command handler.
pub mod generate;

/// Prompt preview command handler.
pub mod prompt;

/// Provider listing command handler.
pub mod providers;

/// HTTP service command handler.
pub mod serve;

use anyhow::Result;

use crate::config::{ConfigManager, ResolveOptions, ResolvedConfig, resolve_config};

/// Loads the config file (if any) and merges it with CLI overrides.
fn load_resolved_config(options: &ResolveOptions) -> Result<ResolvedConfig> {
    let manager = ConfigManager::new()?;
    let config_file = manager.load_or_default()?;
    resolve_config(options, &config_file)
}
