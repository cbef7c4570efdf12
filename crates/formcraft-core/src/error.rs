//! Error types for Formcraft

use thiserror::Error;

/// Formcraft error type
#[derive(Error, Debug)]
pub enum FormsError {
    /// No field with this id in the form
    #[error("field not found: {0}")]
    FieldNotFound(String),

    /// A field with this id already exists in the form
    #[error("duplicate field id: {0}")]
    DuplicateField(String),

    /// Position outside the current sequence
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Validation pattern configured by the form author does not compile
    #[error("invalid pattern `{pattern}` on field {field_id}: {reason}")]
    InvalidPattern {
        field_id: String,
        pattern: String,
        reason: String,
    },

    /// Draft saving is switched off in the form settings
    #[error("drafts are disabled for this form")]
    DraftsDisabled,

    /// Submission hand-off failed
    #[error("submission failed: {0}")]
    Submission(String),

    /// Configuration error
    #[error("config error: {0}")]
    Config(String),

    /// JSON error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FormsError {
    /// Stable code for the error kind
    pub fn code(&self) -> &'static str {
        match self {
            FormsError::FieldNotFound(_) => "FIELD_NOT_FOUND",
            FormsError::DuplicateField(_) => "DUPLICATE_FIELD",
            FormsError::IndexOutOfRange { .. } => "INDEX_OUT_OF_RANGE",
            FormsError::InvalidPattern { .. } => "INVALID_PATTERN",
            FormsError::DraftsDisabled => "DRAFTS_DISABLED",
            FormsError::Submission(_) => "SUBMISSION_FAILED",
            FormsError::Config(_) => "CONFIG_ERROR",
            FormsError::Serialization(_) => "SERIALIZATION_ERROR",
            FormsError::Io(_) => "IO_ERROR",
        }
    }
}

/// Result type for Formcraft
pub type Result<T> = std::result::Result<T, FormsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FormsError::IndexOutOfRange { index: 7, len: 3 };
        assert_eq!(err.to_string(), "index 7 out of range for length 3");

        let err = FormsError::InvalidPattern {
            field_id: "field-1".into(),
            pattern: "[a-".into(),
            reason: "unclosed class".into(),
        };
        assert!(err.to_string().starts_with("invalid pattern `[a-` on field field-1"));
    }

    #[test]
    fn test_error_code() {
        assert_eq!(FormsError::FieldNotFound("x".into()).code(), "FIELD_NOT_FOUND");
        assert_eq!(FormsError::DraftsDisabled.code(), "DRAFTS_DISABLED");
    }
}
