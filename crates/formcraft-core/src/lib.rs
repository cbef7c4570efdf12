//! Formcraft Form Builder Core
//!
//! Rendering-independent core of the Formcraft form builder: the form,
//! field and theme model, the field validation engine and the editor /
//! preview session state that sits behind a drag-and-drop builder UI.
//!
//! ## Architecture
//!
//! - **Domain Layer**: fields, themes, the `Form` aggregate, domain events,
//!   validation and theme services
//! - **Application Layer**: `FormEditor`, `PreviewSession`, `ThemeLibrary`
//!   and the `FormBuilder` context that ties them together
//! - **Ports Layer**: submission and draft hand-off interfaces
//! - **Infrastructure Layer**: in-memory and tracing-backed adapters
//!
//! ## Features
//!
//! - Nine field kinds with per-kind validation rules
//! - Ordered field list with add / update / delete / reorder semantics
//! - Five built-in themes, custom themes, JSON import/export
//! - Live preview validation, completion tracking, drafts and submission

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ports;

pub use application::{
    EditorMode, FormBuilder, FormEditor, PreviewSession, PreviewSummary, SubmitOutcome,
    ThemeLibrary,
};
pub use config::BuilderConfig;
pub use domain::aggregates::{Form, FormPatch, FormSettings, SettingsPatch};
pub use domain::events::{DomainEvent, FormEvent};
pub use domain::services::completion::{completion_percentage, is_filled, RequiredProgress};
pub use domain::services::themes::{
    create_custom_theme, default_themes, export_theme, get_theme_by_id, import_theme, theme_css,
};
pub use domain::services::validation::{
    is_blank, validate_field, validate_form, ValidationError, ValidationReport, Validator,
};
pub use domain::value_objects::{
    Field, FieldId, FieldPatch, FieldStyle, FieldType, FieldValues, FieldWidth, FontSize,
    FontWeight, Theme, ThemeColors, ThemeId, ThemeSpacing, ThemeToken, ThemeTypography,
    ValidationRules,
};
pub use error::{FormsError, Result};
pub use infrastructure::{InMemoryDraftStore, InMemorySubmissionSink, TracingSubmissionSink};
pub use ports::{DraftStore, Submission, SubmissionSink};
