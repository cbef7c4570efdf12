//! CLI Configuration

use anyhow::{Context, Result};
use formcraft_core::BuilderConfig;
use std::fs;
use std::path::{Path, PathBuf};

/// Load the builder config from an explicit path, else `~/.formcraft/config.toml`.
/// A missing default file yields the built-in defaults; a missing explicit file is an error.
pub fn load(explicit: Option<&Path>) -> Result<BuilderConfig> {
    if let Some(path) = explicit {
        return BuilderConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()));
    }

    let path = default_path()?;
    if path.exists() {
        tracing::debug!(path = %path.display(), "loading builder config");
        BuilderConfig::load(&path).with_context(|| format!("loading config {}", path.display()))
    } else {
        Ok(BuilderConfig::default())
    }
}

pub fn save(config: &BuilderConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, config.to_toml_string()?)
        .with_context(|| format!("writing config {}", path.display()))
}

pub fn default_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Cannot find home directory")?;
    Ok(home.join(".formcraft").join("config.toml"))
}
