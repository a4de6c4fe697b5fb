//! Configuration file loading.
//!
//! Reads a TOML file and maps it onto [`AppConfig`]. Missing keys take the
//! defaults declared on the config types; environment overrides are applied
//! by the shell, not here.

use std::path::Path;

use anyhow::Context;
use em_core::config::AppConfig;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns error if the file cannot be read, is not valid TOML, or has a
/// value of the wrong type for its key.
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    let config = AppConfig::from_toml(&toml_value)
        .with_context(|| format!("Invalid config file: {}", config_path.display()))?;
    tracing::debug!(path = %config_path.display(), "config loaded");
    Ok(config)
}
