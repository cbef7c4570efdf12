//! CLI Commands

pub mod config;
pub mod forms;
pub mod themes;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Read a JSON or YAML document, chosen by file extension (JSON otherwise).
pub fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );
    if is_yaml {
        serde_yaml::from_str(&content).with_context(|| format!("parsing {}", path.display()))
    } else {
        serde_json::from_str(&content).with_context(|| format!("parsing {}", path.display()))
    }
}
