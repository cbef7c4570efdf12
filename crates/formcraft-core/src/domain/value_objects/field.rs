//! Field Value Object
//!
//! A single input definition inside a form, plus the patch type used to
//! edit it.

use serde::{Deserialize, Serialize};

use super::FieldId;

/// Kind of input a field renders as and validates against
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Email,
    Number,
    Textarea,
    Select,
    Checkbox,
    Radio,
    File,
    Date,
}

impl FieldType {
    /// All kinds in palette order
    pub const ALL: [FieldType; 9] = [
        FieldType::Text,
        FieldType::Email,
        FieldType::Number,
        FieldType::Textarea,
        FieldType::Select,
        FieldType::Checkbox,
        FieldType::Radio,
        FieldType::File,
        FieldType::Date,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Email => "email",
            FieldType::Number => "number",
            FieldType::Textarea => "textarea",
            FieldType::Select => "select",
            FieldType::Checkbox => "checkbox",
            FieldType::Radio => "radio",
            FieldType::File => "file",
            FieldType::Date => "date",
        }
    }

    /// Label shown in the field palette
    pub fn palette_label(&self) -> &'static str {
        match self {
            FieldType::Text => "Text",
            FieldType::Email => "Email",
            FieldType::Number => "Number",
            FieldType::Textarea => "Textarea",
            FieldType::Select => "Select",
            FieldType::Checkbox => "Checkbox",
            FieldType::Radio => "Radio",
            FieldType::File => "File Upload",
            FieldType::Date => "Date",
        }
    }

    /// Rendered from the `options` list
    pub fn has_options(&self) -> bool {
        matches!(self, FieldType::Select | FieldType::Radio)
    }

    /// `min` / `max` are checked for this kind
    pub fn supports_bounds(&self) -> bool {
        matches!(self, FieldType::Number | FieldType::Text | FieldType::Textarea)
    }

    /// `pattern` is checked for this kind
    pub fn supports_pattern(&self) -> bool {
        matches!(self, FieldType::Text | FieldType::Textarea)
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FieldType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown field type: {}", s))
    }
}

/// Optional rule set attached to a field
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationRules {
    /// Minimum length (text) or value (number)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// Maximum length (text) or value (number)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    /// Replaces the default pattern-mismatch message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldWidth {
    #[default]
    Full,
    Half,
    Third,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Sm,
    #[default]
    Base,
    Lg,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Normal,
    Medium,
    Semibold,
    Bold,
}

/// Presentation hints, carried as data only
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldStyle {
    pub width: FieldWidth,
    pub font_size: FontSize,
    pub font_weight: FontWeight,
}

/// Form field definition
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub id: FieldId,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<ValidationRules>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<FieldStyle>,
}

impl Field {
    /// Bare field with no placeholder, rules or style
    pub fn new(id: FieldId, field_type: FieldType, label: impl Into<String>) -> Self {
        Self {
            id,
            field_type,
            label: label.into(),
            placeholder: None,
            required: false,
            options: vec![],
            validation: None,
            style: None,
        }
    }

    /// Field as the palette creates it: `"<Type> Field"` label,
    /// `"Enter <type>..."` placeholder, default style, and the given
    /// options for choice kinds only.
    pub fn from_palette(id: FieldId, field_type: FieldType, default_options: &[String]) -> Self {
        let name = field_type.as_str();
        let mut label = String::with_capacity(name.len() + 6);
        let mut chars = name.chars();
        if let Some(first) = chars.next() {
            label.extend(first.to_uppercase());
            label.push_str(chars.as_str());
        }
        label.push_str(" Field");

        let mut field = Self::new(id, field_type, label);
        field.placeholder = Some(format!("Enter {}...", name));
        field.style = Some(FieldStyle::default());
        if field_type.has_options() {
            field.options = default_options.to_vec();
        }
        field
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_validation(mut self, rules: ValidationRules) -> Self {
        self.validation = Some(rules);
        self
    }

    /// Choice field that can be rendered in preview
    pub fn is_choice_renderable(&self) -> bool {
        self.field_type.has_options() && !self.options.is_empty()
    }

    /// Shallow merge: properties set in `patch` replace ours, the rest are kept.
    pub fn patched(&self, patch: &FieldPatch) -> Field {
        Field {
            id: self.id.clone(),
            field_type: patch.field_type.unwrap_or(self.field_type),
            label: patch.label.clone().unwrap_or_else(|| self.label.clone()),
            placeholder: match &patch.placeholder {
                Some(value) => value.clone(),
                None => self.placeholder.clone(),
            },
            required: patch.required.unwrap_or(self.required),
            options: patch.options.clone().unwrap_or_else(|| self.options.clone()),
            validation: match &patch.validation {
                Some(value) => value.clone(),
                None => self.validation.clone(),
            },
            style: match &patch.style {
                Some(value) => *value,
                None => self.style,
            },
        }
    }
}

/// Partial update for a field.
///
/// `None` leaves a property alone. For optional properties `Some(None)`
/// clears the value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldPatch {
    pub field_type: Option<FieldType>,
    pub label: Option<String>,
    pub placeholder: Option<Option<String>>,
    pub required: Option<bool>,
    pub options: Option<Vec<String>>,
    pub validation: Option<Option<ValidationRules>>,
    pub style: Option<Option<FieldStyle>>,
}

impl FieldPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn field_type(mut self, field_type: FieldType) -> Self {
        self.field_type = Some(field_type);
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn placeholder(mut self, placeholder: Option<String>) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    pub fn options(mut self, options: Vec<String>) -> Self {
        self.options = Some(options);
        self
    }

    pub fn validation(mut self, rules: Option<ValidationRules>) -> Self {
        self.validation = Some(rules);
        self
    }

    pub fn style(mut self, style: Option<FieldStyle>) -> Self {
        self.style = Some(style);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<String> {
        vec!["Option 1".into(), "Option 2".into(), "Option 3".into()]
    }

    #[test]
    fn test_palette_defaults() {
        let field = Field::from_palette(FieldId::from("f1"), FieldType::Email, &options());
        assert_eq!(field.label, "Email Field");
        assert_eq!(field.placeholder.as_deref(), Some("Enter email..."));
        assert!(!field.required);
        assert!(field.options.is_empty());
        assert_eq!(field.style, Some(FieldStyle::default()));
    }

    #[test]
    fn test_palette_choice_fields_get_options() {
        for kind in [FieldType::Select, FieldType::Radio] {
            let field = Field::from_palette(FieldId::from("f1"), kind, &options());
            assert_eq!(field.options, options());
            assert!(field.is_choice_renderable());
        }
        let checkbox = Field::from_palette(FieldId::from("f2"), FieldType::Checkbox, &options());
        assert!(checkbox.options.is_empty());
    }

    #[test]
    fn test_default_style() {
        let style = FieldStyle::default();
        assert_eq!(style.width, FieldWidth::Full);
        assert_eq!(style.font_size, FontSize::Base);
        assert_eq!(style.font_weight, FontWeight::Normal);
    }

    #[test]
    fn test_patch_preserves_unspecified() {
        let field = Field::new(FieldId::from("f1"), FieldType::Text, "X").required(true);
        let patched = field.patched(&FieldPatch::new().label("Y"));
        assert_eq!(patched.label, "Y");
        assert!(patched.required);
        assert_eq!(patched.id, field.id);
    }

    #[test]
    fn test_patch_clears_optional() {
        let mut field = Field::new(FieldId::from("f1"), FieldType::Text, "X");
        field.placeholder = Some("hint".into());
        let patched = field.patched(&FieldPatch::new().placeholder(None));
        assert_eq!(patched.placeholder, None);
    }

    #[test]
    fn test_empty_patch_is_identity() {
        let field = Field::from_palette(FieldId::from("f1"), FieldType::Radio, &options());
        assert!(FieldPatch::new().is_empty());
        assert_eq!(field.patched(&FieldPatch::new()), field);
    }

    #[test]
    fn test_field_type_capabilities() {
        assert!(FieldType::Number.supports_bounds());
        assert!(!FieldType::Number.supports_pattern());
        assert!(FieldType::Textarea.supports_pattern());
        assert!(!FieldType::Date.supports_bounds());
        assert_eq!("file".parse::<FieldType>().unwrap(), FieldType::File);
        assert!("slider".parse::<FieldType>().is_err());
        assert_eq!(FieldType::File.palette_label(), "File Upload");
    }

    #[test]
    fn test_field_json_shape() {
        let field = Field::new(FieldId::from("f1"), FieldType::Number, "Age").with_validation(
            ValidationRules {
                min: Some(18.0),
                ..Default::default()
            },
        );
        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(json["type"], "number");
        assert_eq!(json["validation"]["min"], 18.0);
        assert!(json.get("options").is_none());

        let back: Field = serde_json::from_value(json).unwrap();
        assert_eq!(back, field);
    }
}
