//! Theme commands

use crate::commands::read_document;
use crate::output::OutputFormat;
use crate::ThemeCommands;
use anyhow::{bail, Context, Result};
use formcraft_core::{default_themes, export_theme, get_theme_by_id, import_theme, theme_css, Theme};
use std::fs;
use tabled::Tabled;

#[derive(Tabled)]
struct ThemeRow {
    id: String,
    name: String,
    primary: String,
    font: String,
    radius: String,
}

impl From<&Theme> for ThemeRow {
    fn from(theme: &Theme) -> Self {
        Self {
            id: theme.id.to_string(),
            name: theme.name.clone(),
            primary: theme.colors.primary.clone(),
            font: theme.typography.font_family.clone(),
            radius: theme.spacing.border_radius.clone(),
        }
    }
}

pub fn handle(action: ThemeCommands, format: OutputFormat) -> Result<()> {
    match action {
        ThemeCommands::List => {
            let themes = default_themes();
            format.print(themes, themes.iter().map(ThemeRow::from))?;
        }
        ThemeCommands::Show { id } => {
            let theme = get_theme_by_id(&id);
            if theme.id.as_str() != id {
                tracing::warn!(requested = %id, fallback = %theme.id, "unknown theme id");
            }
            format.print(&theme, [ThemeRow::from(&theme)])?;
        }
        ThemeCommands::Export { id } => {
            println!("{}", export_theme(&get_theme_by_id(&id)));
        }
        ThemeCommands::Import { file } => {
            let text = fs::read_to_string(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            // Accept YAML exports too by normalising them to JSON first.
            let text = match file.extension().and_then(|e| e.to_str()) {
                Some("yaml") | Some("yml") => {
                    serde_json::to_string(&read_document::<serde_json::Value>(&file)?)?
                }
                _ => text,
            };
            let Some(theme) = import_theme(&text) else {
                bail!("{} is not a valid theme", file.display());
            };
            format.print(&theme, [ThemeRow::from(&theme)])?;
        }
        ThemeCommands::Css { id } => {
            print!("{}", theme_css(&get_theme_by_id(&id)));
        }
    }
    Ok(())
}
