//! Builder configuration
//!
//! Defaults used when the editor creates forms and fields. Every key is
//! optional in the TOML source; missing keys keep their default.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{FormsError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderConfig {
    /// Title of a freshly created form
    pub form_title: String,
    /// Description of a freshly created form
    pub form_description: String,
    /// Label of the submit button
    pub submit_button_text: String,
    pub show_progress_bar: bool,
    pub allow_drafts: bool,
    /// Built-in theme applied to new forms
    pub default_theme_id: String,
    /// Options seeded into new select / radio fields
    pub default_options: Vec<String>,
    /// Prefix of generated field ids
    pub field_id_prefix: String,
    /// Keep compiled validation patterns between validation passes
    pub cache_patterns: bool,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            form_title: "Untitled Form".to_string(),
            form_description: String::new(),
            submit_button_text: "Submit".to_string(),
            show_progress_bar: false,
            allow_drafts: true,
            default_theme_id: "modern-purple".to_string(),
            default_options: vec![
                "Option 1".to_string(),
                "Option 2".to_string(),
                "Option 3".to_string(),
            ],
            field_id_prefix: "field".to_string(),
            cache_patterns: true,
        }
    }
}

impl BuilderConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| FormsError::Config(e.to_string()))
    }

    /// Load from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded builder config");
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| FormsError::Config(e.to_string()))
    }
}
