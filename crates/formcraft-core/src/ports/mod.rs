//! Outbound ports
//!
//! Hexagonal architecture: the interfaces that hosts implement to receive
//! submitted and drafted preview values.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::FieldValues;
use crate::error::Result;

/// Values handed off after a successful validation pass
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub form_id: String,
    pub values: FieldValues,
    pub submitted_at: DateTime<Utc>,
}

impl Submission {
    pub fn new(form_id: impl Into<String>, values: FieldValues) -> Self {
        Self {
            form_id: form_id.into(),
            values,
            submitted_at: Utc::now(),
        }
    }
}

/// Receives validated submissions (persistence, network delivery)
pub trait SubmissionSink {
    fn submit(&mut self, submission: &Submission) -> Result<()>;
}

/// Stores in-progress values for forms that allow drafts
pub trait DraftStore {
    fn save_draft(&mut self, form_id: &str, values: &FieldValues) -> Result<()>;

    fn load_draft(&self, form_id: &str) -> Option<FieldValues>;
}
