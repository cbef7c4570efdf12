//! In-memory and tracing-backed adapters for the outbound ports

use std::collections::HashMap;

use crate::domain::value_objects::FieldValues;
use crate::error::Result;
use crate::ports::{DraftStore, Submission, SubmissionSink};

/// Keeps every submission it receives (for testing and previews)
#[derive(Debug, Default)]
pub struct InMemorySubmissionSink {
    submissions: Vec<Submission>,
}

impl InMemorySubmissionSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submissions(&self) -> &[Submission] {
        &self.submissions
    }
}

impl SubmissionSink for InMemorySubmissionSink {
    fn submit(&mut self, submission: &Submission) -> Result<()> {
        self.submissions.push(submission.clone());
        Ok(())
    }
}

/// Logs submissions instead of delivering them
#[derive(Debug, Default)]
pub struct TracingSubmissionSink;

impl SubmissionSink for TracingSubmissionSink {
    fn submit(&mut self, submission: &Submission) -> Result<()> {
        let values = serde_json::to_string(&submission.values)?;
        tracing::info!(form_id = %submission.form_id, %values, "form submitted");
        Ok(())
    }
}

/// Latest draft per form
#[derive(Debug, Default)]
pub struct InMemoryDraftStore {
    drafts: HashMap<String, FieldValues>,
}

impl InMemoryDraftStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DraftStore for InMemoryDraftStore {
    fn save_draft(&mut self, form_id: &str, values: &FieldValues) -> Result<()> {
        self.drafts.insert(form_id.to_string(), values.clone());
        Ok(())
    }

    fn load_draft(&self, form_id: &str) -> Option<FieldValues> {
        self.drafts.get(form_id).cloned()
    }
}
