//! Form editor
//!
//! Editor-facing operations over a single form: palette insertion, field
//! edits, deletion, drag reordering, theme and settings changes, plus the
//! current selection and editor mode.

use serde::{Deserialize, Serialize};

use crate::config::BuilderConfig;
use crate::domain::aggregates::{Form, FormPatch};
use crate::domain::events::DomainEvent;
use crate::domain::value_objects::{Field, FieldId, FieldPatch, FieldType, Theme};
use crate::error::{FormsError, Result};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditorMode {
    #[default]
    Edit,
    Preview,
}

#[derive(Debug)]
pub struct FormEditor {
    form: Form,
    selected: Option<FieldId>,
    mode: EditorMode,
    config: BuilderConfig,
}

impl FormEditor {
    /// Editor over a new, empty form
    pub fn new(config: BuilderConfig) -> Self {
        let form = Form::create(&config);
        Self::with_form(form, config)
    }

    /// Editor over an existing form
    pub fn with_form(form: Form, config: BuilderConfig) -> Self {
        Self {
            form,
            selected: None,
            mode: EditorMode::Edit,
            config,
        }
    }

    pub fn form(&self) -> &Form { &self.form }
    pub fn config(&self) -> &BuilderConfig { &self.config }
    pub fn mode(&self) -> EditorMode { self.mode }
    pub fn selected_field_id(&self) -> Option<&FieldId> { self.selected.as_ref() }

    pub fn selected_field(&self) -> Option<&Field> {
        self.selected.as_ref().and_then(|id| self.form.field(id))
    }

    pub fn set_mode(&mut self, mode: EditorMode) {
        self.mode = mode;
    }

    /// Select a field, or clear the selection with `None`
    pub fn select_field(&mut self, field_id: Option<&FieldId>) -> Result<()> {
        if let Some(id) = field_id {
            if !self.form.contains_field(id) {
                return Err(FormsError::FieldNotFound(id.to_string()));
            }
        }
        self.selected = field_id.cloned();
        Ok(())
    }

    /// Append a palette field of this kind and select it
    pub fn add_field(&mut self, field_type: FieldType) -> Result<FieldId> {
        let id = loop {
            let candidate = FieldId::generate(&self.config.field_id_prefix);
            if !self.form.contains_field(&candidate) {
                break candidate;
            }
        };
        let field = Field::from_palette(id.clone(), field_type, &self.config.default_options);
        self.form.add_field(field)?;
        self.selected = Some(id.clone());
        tracing::debug!(form_id = %self.form.id(), field_id = %id, %field_type, "added field");
        Ok(id)
    }

    pub fn update_field(&mut self, field_id: &FieldId, patch: &FieldPatch) -> Result<()> {
        self.form.update_field(field_id, patch)?;
        tracing::debug!(form_id = %self.form.id(), %field_id, "updated field");
        Ok(())
    }

    /// Remove a field; clears the selection when it pointed at it
    pub fn delete_field(&mut self, field_id: &FieldId) -> Result<()> {
        self.form.remove_field(field_id)?;
        if self.selected.as_ref() == Some(field_id) {
            self.selected = None;
        }
        tracing::debug!(form_id = %self.form.id(), %field_id, "deleted field");
        Ok(())
    }

    pub fn reorder_fields(&mut self, from: usize, to: usize) -> Result<()> {
        if let Err(err) = self.form.reorder_fields(from, to) {
            tracing::warn!(form_id = %self.form.id(), from, to, error = %err, "rejected reorder");
            return Err(err);
        }
        tracing::debug!(form_id = %self.form.id(), from, to, "reordered fields");
        Ok(())
    }

    /// Completed drag gesture: move `active` to the position held by `over`
    pub fn move_field(&mut self, active: &FieldId, over: &FieldId) -> Result<()> {
        let from = self
            .form
            .position(active)
            .ok_or_else(|| FormsError::FieldNotFound(active.to_string()))?;
        let to = self
            .form
            .position(over)
            .ok_or_else(|| FormsError::FieldNotFound(over.to_string()))?;
        self.reorder_fields(from, to)
    }

    pub fn update_theme(&mut self, theme: Theme) {
        tracing::debug!(form_id = %self.form.id(), theme_id = %theme.id, "applied theme");
        self.form.set_theme(theme);
    }

    pub fn update_form_settings(&mut self, patch: &FormPatch) {
        self.form.apply_patch(patch);
        tracing::debug!(form_id = %self.form.id(), "updated form settings");
    }

    // =========================================================================
    // Option editing for select / radio fields
    // =========================================================================

    /// Append a trimmed option; blank text is ignored and returns `false`
    pub fn add_option(&mut self, field_id: &FieldId, text: &str) -> Result<bool> {
        let text = text.trim();
        let mut options = self.options_of(field_id)?;
        if text.is_empty() {
            return Ok(false);
        }
        options.push(text.to_string());
        self.update_field(field_id, &FieldPatch::new().options(options))?;
        Ok(true)
    }

    pub fn update_option(&mut self, field_id: &FieldId, index: usize, text: &str) -> Result<()> {
        let mut options = self.options_of(field_id)?;
        let len = options.len();
        let slot = options
            .get_mut(index)
            .ok_or(FormsError::IndexOutOfRange { index, len })?;
        *slot = text.to_string();
        self.update_field(field_id, &FieldPatch::new().options(options))
    }

    pub fn remove_option(&mut self, field_id: &FieldId, index: usize) -> Result<()> {
        let mut options = self.options_of(field_id)?;
        if index >= options.len() {
            return Err(FormsError::IndexOutOfRange {
                index,
                len: options.len(),
            });
        }
        options.remove(index);
        self.update_field(field_id, &FieldPatch::new().options(options))
    }

    /// Drain the domain events recorded since the last call
    pub fn take_events(&mut self) -> Vec<DomainEvent> {
        self.form.take_events()
    }

    fn options_of(&self, field_id: &FieldId) -> Result<Vec<String>> {
        self.form
            .field(field_id)
            .map(|f| f.options.clone())
            .ok_or_else(|| FormsError::FieldNotFound(field_id.to_string()))
    }
}

impl Default for FormEditor {
    fn default() -> Self {
        Self::new(BuilderConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::aggregates::SettingsPatch;
    use crate::domain::events::FormEvent;
    use crate::domain::services::themes::get_theme_by_id;

    fn ids(editor: &FormEditor) -> Vec<FieldId> {
        editor.form().field_ids()
    }

    #[test]
    fn test_add_field_appends_and_selects() {
        let mut editor = FormEditor::default();
        let a = editor.add_field(FieldType::Text).unwrap();
        let b = editor.add_field(FieldType::Select).unwrap();
        assert_ne!(a, b);
        assert_eq!(ids(&editor), vec![a, b.clone()]);
        assert_eq!(editor.selected_field_id(), Some(&b));

        let select = editor.selected_field().unwrap();
        assert_eq!(select.label, "Select Field");
        assert_eq!(select.placeholder.as_deref(), Some("Enter select..."));
        assert_eq!(select.options, ["Option 1", "Option 2", "Option 3"]);
    }

    #[test]
    fn test_ids_use_config_prefix() {
        let config = BuilderConfig {
            field_id_prefix: "q".into(),
            ..Default::default()
        };
        let mut editor = FormEditor::new(config);
        let id = editor.add_field(FieldType::Date).unwrap();
        assert!(id.as_str().starts_with("q-"));
    }

    #[test]
    fn test_many_adds_never_collide() {
        let mut editor = FormEditor::default();
        for _ in 0..200 {
            editor.add_field(FieldType::Number).unwrap();
        }
        let mut all = ids(&editor);
        all.sort();
        all.dedup();
        assert_eq!(all.len(), 200);
    }

    #[test]
    fn test_update_merges() {
        let mut editor = FormEditor::default();
        let id = editor.add_field(FieldType::Text).unwrap();
        editor
            .update_field(&id, &FieldPatch::new().label("X").required(true))
            .unwrap();
        editor.update_field(&id, &FieldPatch::new().label("Y")).unwrap();
        let field = editor.form().field(&id).unwrap();
        assert_eq!(field.label, "Y");
        assert!(field.required);
    }

    #[test]
    fn test_delete_selected_clears_selection() {
        let mut editor = FormEditor::default();
        let a = editor.add_field(FieldType::Text).unwrap();
        let b = editor.add_field(FieldType::Email).unwrap();
        let c = editor.add_field(FieldType::Number).unwrap();

        editor.select_field(Some(&a)).unwrap();
        editor.delete_field(&b).unwrap();
        assert_eq!(editor.selected_field_id(), Some(&a));
        assert_eq!(ids(&editor), vec![a.clone(), c.clone()]);

        editor.delete_field(&a).unwrap();
        assert_eq!(editor.selected_field_id(), None);
        assert_eq!(ids(&editor), vec![c]);
    }

    #[test]
    fn test_select_unknown_field() {
        let mut editor = FormEditor::default();
        assert!(editor.select_field(Some(&FieldId::from("ghost"))).is_err());
        assert!(editor.select_field(None).is_ok());
    }

    #[test]
    fn test_move_field_by_ids() {
        let mut editor = FormEditor::default();
        let a = editor.add_field(FieldType::Text).unwrap();
        let b = editor.add_field(FieldType::Text).unwrap();
        let c = editor.add_field(FieldType::Text).unwrap();
        let d = editor.add_field(FieldType::Text).unwrap();
        editor.take_events();

        editor.move_field(&a, &c).unwrap();
        assert_eq!(ids(&editor), vec![b, c, a, d]);

        let events = editor.take_events();
        assert_eq!(events.len(), 1);
        assert!(matches!(
            &events[0],
            DomainEvent::Form(FormEvent::FieldsReordered { from: 0, to: 2, .. })
        ));
    }

    #[test]
    fn test_option_editing() {
        let mut editor = FormEditor::default();
        let id = editor.add_field(FieldType::Radio).unwrap();
        assert!(editor.add_option(&id, "  Option 4 ").unwrap());
        assert!(!editor.add_option(&id, "   ").unwrap());
        editor.update_option(&id, 0, "First").unwrap();
        editor.remove_option(&id, 1).unwrap();
        assert_eq!(
            editor.form().field(&id).unwrap().options,
            ["First", "Option 3", "Option 4"]
        );
        assert!(matches!(
            editor.remove_option(&id, 9),
            Err(FormsError::IndexOutOfRange { index: 9, len: 3 })
        ));
        assert!(editor.update_option(&id, 3, "x").is_err());
    }

    #[test]
    fn test_theme_and_settings() {
        let mut editor = FormEditor::default();
        editor.update_theme(get_theme_by_id("clean-blue"));
        assert_eq!(editor.form().theme().id.as_str(), "clean-blue");

        editor.update_form_settings(
            &FormPatch::default()
                .description(Some("Tell us about you".into()))
                .settings(SettingsPatch::default().submit_button_text("Send")),
        );
        assert_eq!(editor.form().description(), Some("Tell us about you"));
        assert_eq!(editor.form().settings().submit_button_text, "Send");
        assert!(editor.form().settings().allow_drafts);
    }

    #[test]
    fn test_mode_switch() {
        let mut editor = FormEditor::default();
        assert_eq!(editor.mode(), EditorMode::Edit);
        editor.set_mode(EditorMode::Preview);
        assert_eq!(editor.mode(), EditorMode::Preview);
    }
}
