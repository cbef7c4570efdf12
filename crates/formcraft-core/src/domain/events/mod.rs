//! Domain Events
//!
//! Events raised by the form aggregate to communicate edits.

use crate::domain::value_objects::{FieldId, FieldType, ThemeId};

#[derive(Clone, Debug, PartialEq)]
pub enum DomainEvent {
    Form(FormEvent),
}

#[derive(Clone, Debug, PartialEq)]
pub enum FormEvent {
    FieldAdded {
        form_id: String,
        field_id: FieldId,
        field_type: FieldType,
    },
    FieldUpdated {
        form_id: String,
        field_id: FieldId,
    },
    FieldRemoved {
        form_id: String,
        field_id: FieldId,
        index: usize,
    },
    FieldsReordered {
        form_id: String,
        from: usize,
        to: usize,
    },
    ThemeChanged {
        form_id: String,
        theme_id: ThemeId,
    },
    SettingsUpdated {
        form_id: String,
    },
}

impl DomainEvent {
    /// Get the form this event belongs to
    pub fn aggregate_id(&self) -> &str {
        match self {
            DomainEvent::Form(e) => match e {
                FormEvent::FieldAdded { form_id, .. }
                | FormEvent::FieldUpdated { form_id, .. }
                | FormEvent::FieldRemoved { form_id, .. }
                | FormEvent::FieldsReordered { form_id, .. }
                | FormEvent::ThemeChanged { form_id, .. }
                | FormEvent::SettingsUpdated { form_id } => form_id,
            },
        }
    }

    /// Get event type name
    pub fn event_type(&self) -> &'static str {
        match self {
            DomainEvent::Form(e) => match e {
                FormEvent::FieldAdded { .. } => "form.field_added",
                FormEvent::FieldUpdated { .. } => "form.field_updated",
                FormEvent::FieldRemoved { .. } => "form.field_removed",
                FormEvent::FieldsReordered { .. } => "form.fields_reordered",
                FormEvent::ThemeChanged { .. } => "form.theme_changed",
                FormEvent::SettingsUpdated { .. } => "form.settings_updated",
            },
        }
    }
}
