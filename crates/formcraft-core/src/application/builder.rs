//! Builder context
//!
//! Owns the editor, the preview session and the theme library of one
//! editing session and wires the cross-cutting flows between them.

use serde_json::Value;

use crate::config::BuilderConfig;
use crate::domain::value_objects::{FieldId, Theme, ThemeId};
use crate::error::Result;
use crate::ports::{DraftStore, SubmissionSink};

use super::editor::FormEditor;
use super::preview::{PreviewSession, PreviewSummary, SubmitOutcome};
use super::themes::ThemeLibrary;

#[derive(Debug)]
pub struct FormBuilder {
    editor: FormEditor,
    preview: PreviewSession,
    themes: ThemeLibrary,
}

impl FormBuilder {
    pub fn new(config: BuilderConfig) -> Self {
        let preview = PreviewSession::new(config.cache_patterns);
        Self {
            editor: FormEditor::new(config),
            preview,
            themes: ThemeLibrary::new(),
        }
    }

    pub fn editor(&self) -> &FormEditor { &self.editor }
    pub fn editor_mut(&mut self) -> &mut FormEditor { &mut self.editor }
    pub fn preview(&self) -> &PreviewSession { &self.preview }
    pub fn themes(&self) -> &ThemeLibrary { &self.themes }

    pub fn update_preview_value(&mut self, field_id: FieldId, value: Value) {
        self.preview.update_value(field_id, value);
    }

    pub fn validate_preview(&mut self) -> bool {
        self.preview.validate(self.editor.form())
    }

    pub fn preview_summary(&self) -> PreviewSummary {
        self.preview.summary(self.editor.form())
    }

    pub fn submit_preview(&mut self, sink: &mut dyn SubmissionSink) -> Result<SubmitOutcome> {
        self.preview.submit(self.editor.form(), sink)
    }

    pub fn save_draft(&self, store: &mut dyn DraftStore) -> Result<()> {
        self.preview.save_draft(self.editor.form(), store)
    }

    /// Apply a theme from the library; unknown ids leave the form unchanged
    pub fn select_theme(&mut self, id: &ThemeId) -> bool {
        match self.themes.find(id).cloned() {
            Some(theme) => {
                self.editor.update_theme(theme);
                true
            }
            None => false,
        }
    }

    /// Derive a custom theme from the current one and apply it
    pub fn create_custom_theme(&mut self, name: &str) -> Option<Theme> {
        let base = self.editor.form().theme().clone();
        let theme = self.themes.create_custom(name, &base)?;
        self.editor.update_theme(theme.clone());
        Some(theme)
    }

    /// Import exported theme JSON and apply it
    pub fn import_theme(&mut self, text: &str) -> Option<Theme> {
        let theme = self.themes.import(text)?;
        self.editor.update_theme(theme.clone());
        Some(theme)
    }
}

impl Default for FormBuilder {
    fn default() -> Self {
        Self::new(BuilderConfig::default())
    }
}
