//! XDG-style path utilities for configuration.
//!
//! Prefers XDG Base Directory conventions over OS-specific locations so the
//! config file lives in the same place on every platform.

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_DIR: &str = "postgen";

/// Returns the configuration directory for postgen.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/postgen` if `XDG_CONFIG_HOME` is set
/// 2. `~/.config/postgen` otherwise
pub fn config_dir() -> Result<PathBuf> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME")
        && !xdg.is_empty()
    {
        return Ok(PathBuf::from(xdg).join(APP_DIR));
    }

    let home = dirs::home_dir().context("Failed to determine home directory")?;
    Ok(home.join(".config").join(APP_DIR))
}
