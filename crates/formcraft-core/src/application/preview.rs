//! Preview session
//!
//! Values entered while previewing a form, the errors of the last
//! validation pass, and the validate-then-submit flow.

use serde::Serialize;
use serde_json::Value;

use crate::domain::aggregates::Form;
use crate::domain::services::completion::RequiredProgress;
use crate::domain::services::validation::{ValidationError, ValidationReport, Validator};
use crate::domain::value_objects::{FieldId, FieldValues};
use crate::error::{FormsError, Result};
use crate::ports::{DraftStore, Submission, SubmissionSink};

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Handed to the sink; the session values were cleared
    Submitted(Submission),
    /// Validation failed; values and errors are kept for correction
    Rejected { errors: usize, rule_errors: usize },
}

/// Progress figures shown above a previewed form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewSummary {
    pub required_fields: usize,
    pub completed_required_fields: usize,
    pub remaining_required_fields: usize,
    pub completion_percentage: u8,
    pub error_count: usize,
    pub is_complete: bool,
}

#[derive(Debug)]
pub struct PreviewSession {
    values: FieldValues,
    report: ValidationReport,
    validator: Validator,
}

impl Default for PreviewSession {
    fn default() -> Self {
        Self::new(true)
    }
}

impl PreviewSession {
    pub fn new(cache_patterns: bool) -> Self {
        let validator = if cache_patterns {
            Validator::cached()
        } else {
            Validator::uncached()
        };
        Self {
            values: FieldValues::new(),
            report: ValidationReport::default(),
            validator,
        }
    }

    pub fn values(&self) -> &FieldValues { &self.values }
    pub fn errors(&self) -> &[ValidationError] { &self.report.errors }
    pub fn rule_errors(&self) -> &[FormsError] { &self.report.rule_errors }

    pub fn value(&self, field_id: &FieldId) -> Option<&Value> {
        self.values.get(field_id)
    }

    pub fn error_for(&self, field_id: &FieldId) -> Option<&str> {
        self.report.error_for(field_id)
    }

    /// Set a value and drop the stored error of that field only
    pub fn update_value(&mut self, field_id: FieldId, value: Value) {
        self.report.errors.retain(|e| e.field_id != field_id);
        self.values.insert(field_id, value);
    }

    /// Forget all values and errors
    pub fn reset(&mut self) {
        self.values.clear();
        self.report = ValidationReport::default();
    }

    pub fn completion(&self, form: &Form) -> u8 {
        RequiredProgress::measure(form.fields(), &self.values).percentage()
    }

    pub fn summary(&self, form: &Form) -> PreviewSummary {
        let progress = RequiredProgress::measure(form.fields(), &self.values);
        let completion_percentage = progress.percentage();
        PreviewSummary {
            required_fields: progress.required,
            completed_required_fields: progress.filled,
            remaining_required_fields: progress.remaining(),
            completion_percentage,
            error_count: self.report.errors.len(),
            is_complete: completion_percentage == 100,
        }
    }

    /// Re-run validation over the form's current fields, replacing the
    /// stored errors. Returns whether the form is valid.
    pub fn validate(&mut self, form: &Form) -> bool {
        self.report = self.validator.validate_form(form.fields(), &self.values);
        self.report.is_valid()
    }

    /// Validate, then hand the values to `sink` and clear them.
    ///
    /// Nothing is sent when validation fails. A sink error leaves the values
    /// in place and is returned.
    pub fn submit(&mut self, form: &Form, sink: &mut dyn SubmissionSink) -> Result<SubmitOutcome> {
        if !self.validate(form) {
            tracing::debug!(
                form_id = %form.id(),
                errors = self.report.errors.len(),
                rule_errors = self.report.rule_errors.len(),
                "submit rejected"
            );
            return Ok(SubmitOutcome::Rejected {
                errors: self.report.errors.len(),
                rule_errors: self.report.rule_errors.len(),
            });
        }

        let submission = Submission::new(form.id(), self.values.clone());
        sink.submit(&submission)?;
        self.values.clear();
        tracing::info!(form_id = %form.id(), fields = submission.values.len(), "submitted preview values");
        Ok(SubmitOutcome::Submitted(submission))
    }

    /// Store the current values as a draft; values stay in the session
    pub fn save_draft(&self, form: &Form, store: &mut dyn DraftStore) -> Result<()> {
        if !form.settings().allow_drafts {
            return Err(FormsError::DraftsDisabled);
        }
        store.save_draft(form.id(), &self.values)?;
        tracing::info!(form_id = %form.id(), fields = self.values.len(), "saved draft");
        Ok(())
    }

    /// Replace the values with a stored draft, if any
    pub fn restore_draft(&mut self, form: &Form, store: &dyn DraftStore) -> bool {
        match store.load_draft(form.id()) {
            Some(values) => {
                self.values = values;
                self.report = ValidationReport::default();
                true
            }
            None => false,
        }
    }
}
