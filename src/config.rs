//! Sheet configuration file (`config.toml`).

use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use sumgrid_core::SheetConfig;

pub(crate) fn default_config_path() -> Option<PathBuf> {
    let proj = ProjectDirs::from("", "", "sumgrid")?;
    let mut path = proj.config_dir().to_path_buf();
    path.push("config.toml");
    Some(path)
}

/// Load the sheet configuration.
///
/// An explicit path must exist. Without one, the user config file is used if
/// present, otherwise the built-in defaults.
pub(crate) fn load_config(explicit: Option<&Path>, use_default_file: bool) -> Result<SheetConfig> {
    let path = match explicit {
        Some(p) => Some(p.to_path_buf()),
        None if use_default_file => default_config_path().filter(|p| p.is_file()),
        None => None,
    };
    let Some(path) = path else {
        return Ok(SheetConfig::default());
    };

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config = parse_config(&content)
        .with_context(|| format!("Invalid config file {}", path.display()))?;
    tracing::debug!(path = %path.display(), rows = config.rows, cols = config.cols, "loaded config");
    Ok(config)
}

pub(crate) fn parse_config(content: &str) -> Result<SheetConfig> {
    let config: SheetConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
