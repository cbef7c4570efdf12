//! Form Aggregate
//!
//! Aggregate root owning the ordered field sequence, the applied theme and
//! form-level settings. Sequence order is display and tab order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::config::BuilderConfig;
use crate::domain::events::{DomainEvent, FormEvent};
use crate::domain::services::themes::get_theme_by_id;
use crate::domain::value_objects::{Field, FieldId, FieldPatch, Theme};
use crate::error::{FormsError, Result};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSettings {
    pub show_progress_bar: bool,
    pub allow_drafts: bool,
    pub submit_button_text: String,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            show_progress_bar: false,
            allow_drafts: true,
            submit_button_text: "Submit".to_string(),
        }
    }
}

impl FormSettings {
    pub fn patched(&self, patch: &SettingsPatch) -> FormSettings {
        FormSettings {
            show_progress_bar: patch.show_progress_bar.unwrap_or(self.show_progress_bar),
            allow_drafts: patch.allow_drafts.unwrap_or(self.allow_drafts),
            submit_button_text: patch
                .submit_button_text
                .clone()
                .unwrap_or_else(|| self.submit_button_text.clone()),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SettingsPatch {
    pub show_progress_bar: Option<bool>,
    pub allow_drafts: Option<bool>,
    pub submit_button_text: Option<String>,
}

impl SettingsPatch {
    pub fn show_progress_bar(mut self, value: bool) -> Self {
        self.show_progress_bar = Some(value);
        self
    }

    pub fn allow_drafts(mut self, value: bool) -> Self {
        self.allow_drafts = Some(value);
        self
    }

    pub fn submit_button_text(mut self, value: impl Into<String>) -> Self {
        self.submit_button_text = Some(value.into());
        self
    }
}

/// Partial update of form-level properties. The settings patch is merged
/// key by key, never replacing the settings wholesale.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub settings: Option<SettingsPatch>,
}

impl FormPatch {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = Some(description);
        self
    }

    pub fn settings(mut self, settings: SettingsPatch) -> Self {
        self.settings = Some(settings);
        self
    }
}

/// Form aggregate root
///
/// Deserialization goes through [`FormDocument`] so that loaded forms hold
/// the same invariants as edited ones.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "FormDocument")]
pub struct Form {
    id: String,
    title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    fields: Vec<Field>,
    theme: Theme,
    settings: FormSettings,
    #[serde(skip)]
    created_at: DateTime<Utc>,
    #[serde(skip)]
    updated_at: DateTime<Utc>,
    #[serde(skip)]
    events: Vec<DomainEvent>,
}

/// Wire shape of a stored form
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct FormDocument {
    id: String,
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    fields: Vec<Field>,
    theme: Theme,
    #[serde(default)]
    settings: FormSettings,
}

impl TryFrom<FormDocument> for Form {
    type Error = FormsError;

    fn try_from(doc: FormDocument) -> Result<Self> {
        let mut seen = HashSet::with_capacity(doc.fields.len());
        if let Some(dup) = doc.fields.iter().find(|f| !seen.insert(&f.id)) {
            return Err(FormsError::DuplicateField(dup.id.to_string()));
        }
        let now = Utc::now();
        Ok(Self {
            id: doc.id,
            title: doc.title,
            description: doc.description,
            fields: doc.fields,
            theme: doc.theme,
            settings: doc.settings,
            created_at: now,
            updated_at: now,
            events: vec![],
        })
    }
}

impl Form {
    /// Create an empty form from the builder defaults
    pub fn create(config: &BuilderConfig) -> Self {
        let now = Utc::now();
        let description = Some(config.form_description.clone()).filter(|d| !d.is_empty());
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: config.form_title.clone(),
            description,
            fields: vec![],
            theme: get_theme_by_id(&config.default_theme_id),
            settings: FormSettings {
                show_progress_bar: config.show_progress_bar,
                allow_drafts: config.allow_drafts,
                submit_button_text: config.submit_button_text.clone(),
            },
            created_at: now,
            updated_at: now,
            events: vec![],
        }
    }

    // =========================================================================
    // Getters
    // =========================================================================

    pub fn id(&self) -> &str { &self.id }
    pub fn title(&self) -> &str { &self.title }
    pub fn description(&self) -> Option<&str> { self.description.as_deref() }
    pub fn fields(&self) -> &[Field] { &self.fields }
    pub fn theme(&self) -> &Theme { &self.theme }
    pub fn settings(&self) -> &FormSettings { &self.settings }
    pub fn created_at(&self) -> DateTime<Utc> { self.created_at }
    pub fn updated_at(&self) -> DateTime<Utc> { self.updated_at }

    pub fn field(&self, field_id: &FieldId) -> Option<&Field> {
        self.fields.iter().find(|f| &f.id == field_id)
    }

    /// Current position of a field in the sequence
    pub fn position(&self, field_id: &FieldId) -> Option<usize> {
        self.fields.iter().position(|f| &f.id == field_id)
    }

    pub fn contains_field(&self, field_id: &FieldId) -> bool {
        self.position(field_id).is_some()
    }

    pub fn field_ids(&self) -> Vec<FieldId> {
        self.fields.iter().map(|f| f.id.clone()).collect()
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Append a field to the end of the sequence
    pub fn add_field(&mut self, field: Field) -> Result<()> {
        if self.contains_field(&field.id) {
            return Err(FormsError::DuplicateField(field.id.to_string()));
        }
        let event = FormEvent::FieldAdded {
            form_id: self.id.clone(),
            field_id: field.id.clone(),
            field_type: field.field_type,
        };
        self.fields.push(field);
        self.touch();
        self.raise_event(DomainEvent::Form(event));
        Ok(())
    }

    /// Shallow-merge `patch` onto the field with this id
    pub fn update_field(&mut self, field_id: &FieldId, patch: &FieldPatch) -> Result<&Field> {
        let index = self
            .position(field_id)
            .ok_or_else(|| FormsError::FieldNotFound(field_id.to_string()))?;
        self.fields[index] = self.fields[index].patched(patch);
        self.touch();
        self.raise_event(DomainEvent::Form(FormEvent::FieldUpdated {
            form_id: self.id.clone(),
            field_id: field_id.clone(),
        }));
        Ok(&self.fields[index])
    }

    /// Remove the field with this id, keeping the order of the rest
    pub fn remove_field(&mut self, field_id: &FieldId) -> Result<Field> {
        let index = self
            .position(field_id)
            .ok_or_else(|| FormsError::FieldNotFound(field_id.to_string()))?;
        let removed = self.fields.remove(index);
        self.touch();
        self.raise_event(DomainEvent::Form(FormEvent::FieldRemoved {
            form_id: self.id.clone(),
            field_id: removed.id.clone(),
            index,
        }));
        Ok(removed)
    }

    /// Move the field at `from` so that it ends up at `to`.
    ///
    /// Both indices must address an existing position; the sequence is left
    /// untouched otherwise.
    pub fn reorder_fields(&mut self, from: usize, to: usize) -> Result<()> {
        let len = self.fields.len();
        for index in [from, to] {
            if index >= len {
                return Err(FormsError::IndexOutOfRange { index, len });
            }
        }
        if from == to {
            return Ok(());
        }
        let field = self.fields.remove(from);
        self.fields.insert(to, field);
        self.touch();
        self.raise_event(DomainEvent::Form(FormEvent::FieldsReordered {
            form_id: self.id.clone(),
            from,
            to,
        }));
        Ok(())
    }

    /// Replace the theme wholesale
    pub fn set_theme(&mut self, theme: Theme) {
        let theme_id = theme.id.clone();
        self.theme = theme;
        self.touch();
        self.raise_event(DomainEvent::Form(FormEvent::ThemeChanged {
            form_id: self.id.clone(),
            theme_id,
        }));
    }

    /// Merge title, description and settings
    pub fn apply_patch(&mut self, patch: &FormPatch) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(description) = &patch.description {
            self.description = description.clone();
        }
        if let Some(settings) = &patch.settings {
            self.settings = self.settings.patched(settings);
        }
        self.touch();
        self.raise_event(DomainEvent::Form(FormEvent::SettingsUpdated {
            form_id: self.id.clone(),
        }));
    }

    /// Take accumulated events (for publishing)
    pub fn take_events(&mut self) -> Vec<DomainEvent> {
        std::mem::take(&mut self.events)
    }

    fn raise_event(&mut self, event: DomainEvent) {
        self.events.push(event);
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}
