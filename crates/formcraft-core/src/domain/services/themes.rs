//! Theme catalogue and the JSON import/export format

use serde_json::Value;
use std::sync::LazyLock;

use crate::domain::value_objects::{Theme, ThemeColors, ThemeId, ThemeSpacing, ThemeTypography};

const REQUIRED_MEMBERS: [&str; 5] = ["id", "name", "colors", "typography", "spacing"];

struct ThemeSeed {
    id: &'static str,
    name: &'static str,
    colors: [&'static str; 6],
    typography: [&'static str; 4],
    spacing: [&'static str; 3],
}

const SEEDS: [ThemeSeed; 5] = [
    ThemeSeed {
        id: "modern-purple",
        name: "Modern Purple",
        colors: [
            "oklch(0.55 0.18 264)",
            "oklch(0.96 0.01 264)",
            "oklch(0.98 0.005 264)",
            "oklch(0.15 0.02 264)",
            "oklch(0.94 0.02 264)",
            "oklch(0.92 0.01 264)",
        ],
        typography: ["font-sans", "text-2xl", "text-base", "text-sm"],
        spacing: ["gap-6", "p-6", "rounded-lg"],
    },
    ThemeSeed {
        id: "clean-blue",
        name: "Clean Blue",
        colors: [
            "oklch(0.5 0.2 220)",
            "oklch(0.96 0.01 220)",
            "oklch(0.99 0.002 220)",
            "oklch(0.15 0.02 220)",
            "oklch(0.94 0.02 220)",
            "oklch(0.92 0.01 220)",
        ],
        typography: ["font-sans", "text-xl", "text-base", "text-sm"],
        spacing: ["gap-4", "p-4", "rounded-md"],
    },
    ThemeSeed {
        id: "minimal-gray",
        name: "Minimal Gray",
        colors: [
            "oklch(0.3 0.02 0)",
            "oklch(0.97 0.005 0)",
            "oklch(1 0 0)",
            "oklch(0.15 0.01 0)",
            "oklch(0.95 0.005 0)",
            "oklch(0.9 0.005 0)",
        ],
        typography: ["font-sans", "text-xl", "text-sm", "text-xs"],
        spacing: ["gap-3", "p-3", "rounded"],
    },
    ThemeSeed {
        id: "vibrant-orange",
        name: "Vibrant Orange",
        colors: [
            "oklch(0.65 0.22 45)",
            "oklch(0.97 0.01 45)",
            "oklch(0.99 0.005 45)",
            "oklch(0.15 0.02 45)",
            "oklch(0.95 0.02 45)",
            "oklch(0.92 0.01 45)",
        ],
        typography: ["font-sans", "text-2xl", "text-base", "text-sm"],
        spacing: ["gap-5", "p-5", "rounded-lg"],
    },
    ThemeSeed {
        id: "dark-professional",
        name: "Dark Professional",
        colors: [
            "oklch(0.7 0.15 200)",
            "oklch(0.2 0.01 200)",
            "oklch(0.1 0.01 200)",
            "oklch(0.95 0.005 200)",
            "oklch(0.25 0.02 200)",
            "oklch(0.3 0.02 200)",
        ],
        typography: ["font-sans", "text-xl", "text-base", "text-sm"],
        spacing: ["gap-4", "p-4", "rounded-md"],
    },
];

impl ThemeSeed {
    fn build(&self) -> Theme {
        let [primary, secondary, background, foreground, accent, border] = self.colors;
        let [font_family, heading_size, body_size, label_size] = self.typography;
        let [field_gap, padding, border_radius] = self.spacing;
        Theme {
            id: ThemeId::from(self.id),
            name: self.name.to_string(),
            colors: ThemeColors {
                primary: primary.to_string(),
                secondary: secondary.to_string(),
                background: background.to_string(),
                foreground: foreground.to_string(),
                accent: accent.to_string(),
                border: border.to_string(),
            },
            typography: ThemeTypography {
                font_family: font_family.to_string(),
                heading_size: heading_size.to_string(),
                body_size: body_size.to_string(),
                label_size: label_size.to_string(),
            },
            spacing: ThemeSpacing {
                field_gap: field_gap.to_string(),
                padding: padding.to_string(),
                border_radius: border_radius.to_string(),
            },
        }
    }
}

static DEFAULT_THEMES: LazyLock<Vec<Theme>> =
    LazyLock::new(|| SEEDS.iter().map(ThemeSeed::build).collect());

/// Built-in themes in display order
pub fn default_themes() -> &'static [Theme] {
    &DEFAULT_THEMES
}

/// Built-in theme with this id, falling back to the first one
pub fn get_theme_by_id(id: &str) -> Theme {
    let themes = default_themes();
    themes
        .iter()
        .find(|t| t.id.as_str() == id)
        .unwrap_or(&themes[0])
        .clone()
}

/// Copy of `base` (or the first built-in theme) under a fresh custom id
pub fn create_custom_theme(name: impl Into<String>, base: Option<&Theme>) -> Theme {
    let base = base.unwrap_or(&default_themes()[0]);
    base.renamed(ThemeId::custom(), name)
}

/// Pretty-printed JSON, two-space indented
pub fn export_theme(theme: &Theme) -> String {
    // All members are strings; serialization cannot fail.
    serde_json::to_string_pretty(theme).unwrap_or_default()
}

/// Parse exported JSON. Malformed text and incomplete themes both yield `None`.
pub fn import_theme(text: &str) -> Option<Theme> {
    let value: Value = match serde_json::from_str(text) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(error = %err, "rejected theme import: not JSON");
            return None;
        }
    };

    let missing: Vec<&str> = REQUIRED_MEMBERS
        .into_iter()
        .filter(|key| value.get(key).map_or(true, Value::is_null))
        .collect();
    if !missing.is_empty() {
        tracing::warn!(?missing, "rejected theme import: missing members");
        return None;
    }

    match serde_json::from_value::<Theme>(value) {
        Ok(theme) if !theme.id.as_str().is_empty() && !theme.name.is_empty() => Some(theme),
        Ok(_) => {
            tracing::warn!("rejected theme import: empty id or name");
            None
        }
        Err(err) => {
            tracing::warn!(error = %err, "rejected theme import: malformed tokens");
            None
        }
    }
}

/// CSS custom properties for a theme's colors
pub fn theme_css(theme: &Theme) -> String {
    let c = &theme.colors;
    format!(
        ".form-theme-{} {{\n  --form-primary: {};\n  --form-secondary: {};\n  --form-background: {};\n  --form-foreground: {};\n  --form-accent: {};\n  --form-border: {};\n}}\n",
        theme.id, c.primary, c.secondary, c.background, c.foreground, c.accent, c.border
    )
}
