//! Theme library: the built-in themes plus those created or imported
//! during the session.

use crate::domain::services::themes::{create_custom_theme, default_themes, import_theme};
use crate::domain::value_objects::{Theme, ThemeId};

#[derive(Debug, Default, Clone)]
pub struct ThemeLibrary {
    custom: Vec<Theme>,
}

impl ThemeLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn custom_themes(&self) -> &[Theme] {
        &self.custom
    }

    /// Built-in themes first, then custom ones in creation order
    pub fn all(&self) -> impl Iterator<Item = &Theme> {
        default_themes().iter().chain(self.custom.iter())
    }

    pub fn find(&self, id: &ThemeId) -> Option<&Theme> {
        self.all().find(|t| &t.id == id)
    }

    /// Derive a named custom theme from `base` and keep it
    pub fn create_custom(&mut self, name: &str, base: &Theme) -> Option<Theme> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        let theme = create_custom_theme(name, Some(base));
        tracing::debug!(theme_id = %theme.id, base_id = %base.id, "created custom theme");
        self.custom.push(theme.clone());
        Some(theme)
    }

    /// Import exported JSON and keep the result. An imported theme replaces
    /// a previously imported one with the same id; one that reuses a
    /// built-in id is stored under a fresh custom id, built-ins stay intact.
    pub fn import(&mut self, text: &str) -> Option<Theme> {
        let mut theme = import_theme(text)?;
        if default_themes().iter().any(|t| t.id == theme.id) {
            let id = ThemeId::custom();
            tracing::debug!(requested = %theme.id, assigned = %id, "imported theme shadows a built-in");
            theme.id = id;
        }
        match self.custom.iter_mut().find(|t| t.id == theme.id) {
            Some(existing) => *existing = theme.clone(),
            None => self.custom.push(theme.clone()),
        }
        tracing::debug!(theme_id = %theme.id, "imported theme");
        Some(theme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::themes::{export_theme, get_theme_by_id};
    use crate::domain::value_objects::ThemeToken;

    #[test]
    fn test_defaults_listed_first() {
        let mut library = ThemeLibrary::new();
        let base = get_theme_by_id("minimal-gray");
        let custom = library.create_custom("Mine", &base).unwrap();
        let all: Vec<&Theme> = library.all().collect();
        assert_eq!(all.len(), 6);
        assert_eq!(all[0].id.as_str(), "modern-purple");
        assert_eq!(all[5], &custom);
        assert_eq!(library.find(&custom.id), Some(&custom));
    }

    #[test]
    fn test_blank_name_rejected() {
        let mut library = ThemeLibrary::new();
        assert!(library.create_custom("  ", &get_theme_by_id("clean-blue")).is_none());
        assert!(library.custom_themes().is_empty());
    }

    #[test]
    fn test_import_adds_once() {
        let mut library = ThemeLibrary::new();
        let theme = get_theme_by_id("clean-blue").renamed(ThemeId::from("shared"), "Shared");
        let text = export_theme(&theme);
        assert_eq!(library.import(&text), Some(theme.clone()));
        assert_eq!(library.import(&text), Some(theme));
        assert_eq!(library.custom_themes().len(), 1);
        assert_eq!(library.import("{}"), None);
        assert_eq!(library.custom_themes().len(), 1);
    }

    #[test]
    fn test_import_of_builtin_id_gets_own_id() {
        let mut library = ThemeLibrary::new();
        let stock = get_theme_by_id("clean-blue");
        let edited = stock.with_token(ThemeToken::Primary, "red");

        let imported = library.import(&export_theme(&edited)).unwrap();
        assert!(imported.id.is_custom());
        assert_eq!(imported.colors.primary, "red");
        assert_eq!(library.find(&imported.id), Some(&imported));
        assert_eq!(library.find(&stock.id), Some(&stock));
    }
}
