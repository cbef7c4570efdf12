//! Domain services
//!
//! Stateless logic that spans several value objects.

pub mod completion;
pub mod themes;
pub mod validation;

pub use completion::{completion_percentage, is_filled, RequiredProgress};
pub use themes::{
    create_custom_theme, default_themes, export_theme, get_theme_by_id, import_theme, theme_css,
};
pub use validation::{
    is_blank, validate_field, validate_form, ValidationError, ValidationReport, Validator,
};
