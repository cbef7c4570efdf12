//! Theme Value Object
//!
//! Named bundle of color, typography and spacing tokens. Themes are
//! immutable; every edit produces a new value.

use serde::{Deserialize, Serialize};

use super::ThemeId;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ThemeColors {
    pub primary: String,
    pub secondary: String,
    pub background: String,
    pub foreground: String,
    pub accent: String,
    pub border: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeTypography {
    pub font_family: String,
    pub heading_size: String,
    pub body_size: String,
    pub label_size: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeSpacing {
    pub field_gap: String,
    pub padding: String,
    pub border_radius: String,
}

/// Serialized field order is the import/export wire format.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Theme {
    pub id: ThemeId,
    pub name: String,
    pub colors: ThemeColors,
    pub typography: ThemeTypography,
    pub spacing: ThemeSpacing,
}

/// A single editable token of a theme
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThemeToken {
    Primary,
    Secondary,
    Background,
    Foreground,
    Accent,
    Border,
    FontFamily,
    HeadingSize,
    BodySize,
    LabelSize,
    FieldGap,
    Padding,
    BorderRadius,
}

impl ThemeToken {
    pub const ALL: [ThemeToken; 13] = [
        ThemeToken::Primary,
        ThemeToken::Secondary,
        ThemeToken::Background,
        ThemeToken::Foreground,
        ThemeToken::Accent,
        ThemeToken::Border,
        ThemeToken::FontFamily,
        ThemeToken::HeadingSize,
        ThemeToken::BodySize,
        ThemeToken::LabelSize,
        ThemeToken::FieldGap,
        ThemeToken::Padding,
        ThemeToken::BorderRadius,
    ];

    /// `<section>.<key>` path as it appears in exported JSON
    pub fn path(&self) -> &'static str {
        match self {
            ThemeToken::Primary => "colors.primary",
            ThemeToken::Secondary => "colors.secondary",
            ThemeToken::Background => "colors.background",
            ThemeToken::Foreground => "colors.foreground",
            ThemeToken::Accent => "colors.accent",
            ThemeToken::Border => "colors.border",
            ThemeToken::FontFamily => "typography.fontFamily",
            ThemeToken::HeadingSize => "typography.headingSize",
            ThemeToken::BodySize => "typography.bodySize",
            ThemeToken::LabelSize => "typography.labelSize",
            ThemeToken::FieldGap => "spacing.fieldGap",
            ThemeToken::Padding => "spacing.padding",
            ThemeToken::BorderRadius => "spacing.borderRadius",
        }
    }
}

impl std::str::FromStr for ThemeToken {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThemeToken::ALL
            .into_iter()
            .find(|t| t.path() == s)
            .ok_or_else(|| format!("unknown theme token: {}", s))
    }
}

impl Theme {
    pub fn token(&self, token: ThemeToken) -> &str {
        match token {
            ThemeToken::Primary => &self.colors.primary,
            ThemeToken::Secondary => &self.colors.secondary,
            ThemeToken::Background => &self.colors.background,
            ThemeToken::Foreground => &self.colors.foreground,
            ThemeToken::Accent => &self.colors.accent,
            ThemeToken::Border => &self.colors.border,
            ThemeToken::FontFamily => &self.typography.font_family,
            ThemeToken::HeadingSize => &self.typography.heading_size,
            ThemeToken::BodySize => &self.typography.body_size,
            ThemeToken::LabelSize => &self.typography.label_size,
            ThemeToken::FieldGap => &self.spacing.field_gap,
            ThemeToken::Padding => &self.spacing.padding,
            ThemeToken::BorderRadius => &self.spacing.border_radius,
        }
    }

    /// Copy of this theme with one token replaced
    pub fn with_token(&self, token: ThemeToken, value: impl Into<String>) -> Theme {
        let mut theme = self.clone();
        let slot = match token {
            ThemeToken::Primary => &mut theme.colors.primary,
            ThemeToken::Secondary => &mut theme.colors.secondary,
            ThemeToken::Background => &mut theme.colors.background,
            ThemeToken::Foreground => &mut theme.colors.foreground,
            ThemeToken::Accent => &mut theme.colors.accent,
            ThemeToken::Border => &mut theme.colors.border,
            ThemeToken::FontFamily => &mut theme.typography.font_family,
            ThemeToken::HeadingSize => &mut theme.typography.heading_size,
            ThemeToken::BodySize => &mut theme.typography.body_size,
            ThemeToken::LabelSize => &mut theme.typography.label_size,
            ThemeToken::FieldGap => &mut theme.spacing.field_gap,
            ThemeToken::Padding => &mut theme.spacing.padding,
            ThemeToken::BorderRadius => &mut theme.spacing.border_radius,
        };
        *slot = value.into();
        theme
    }

    /// Copy of this theme under a new id and name
    pub fn renamed(&self, id: ThemeId, name: impl Into<String>) -> Theme {
        Theme {
            id,
            name: name.into(),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Theme {
        Theme {
            id: ThemeId::from("sample"),
            name: "Sample".into(),
            colors: ThemeColors {
                primary: "p".into(),
                secondary: "s".into(),
                background: "bg".into(),
                foreground: "fg".into(),
                accent: "a".into(),
                border: "b".into(),
            },
            typography: ThemeTypography {
                font_family: "font-sans".into(),
                heading_size: "text-2xl".into(),
                body_size: "text-base".into(),
                label_size: "text-sm".into(),
            },
            spacing: ThemeSpacing {
                field_gap: "gap-6".into(),
                padding: "p-6".into(),
                border_radius: "rounded-lg".into(),
            },
        }
    }

    #[test]
    fn test_with_token_leaves_original() {
        let theme = sample();
        let edited = theme.with_token(ThemeToken::Primary, "red");
        assert_eq!(edited.colors.primary, "red");
        assert_eq!(theme.colors.primary, "p");
        assert_eq!(edited.id, theme.id);
    }

    #[test]
    fn test_every_token_is_addressable() {
        let theme = sample();
        for token in ThemeToken::ALL {
            let edited = theme.with_token(token, "x");
            assert_eq!(edited.token(token), "x");
            assert_eq!(token.path().parse::<ThemeToken>().unwrap(), token);
        }
    }

    #[test]
    fn test_wire_keys() {
        let json = serde_json::to_value(sample()).unwrap();
        let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 5);
        assert_eq!(json["typography"]["fontFamily"], "font-sans");
        assert_eq!(json["spacing"]["borderRadius"], "rounded-lg");
    }
}
