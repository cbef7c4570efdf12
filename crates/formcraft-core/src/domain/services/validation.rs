//! Field validation engine
//!
//! Evaluates a field's rules against an entered value. Value problems are
//! returned as messages; a pattern that does not compile is a rule error
//! on the form definition and is reported separately.

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use crate::domain::value_objects::{Field, FieldId, FieldType, FieldValues};
use crate::error::{FormsError, Result};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

const INVALID_EMAIL: &str = "Please enter a valid email address";
const INVALID_NUMBER: &str = "Please enter a valid number";
const INVALID_FORMAT: &str = "Invalid format";

/// Error attached to one field of a form
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationError {
    pub field_id: FieldId,
    pub message: String,
}

/// Outcome of validating a whole form
#[derive(Debug, Default)]
pub struct ValidationReport {
    /// Value errors in field order
    pub errors: Vec<ValidationError>,
    /// Broken rules in the form definition, in field order
    pub rule_errors: Vec<FormsError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty() && self.rule_errors.is_empty()
    }

    pub fn error_for(&self, field_id: &FieldId) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| &e.field_id == field_id)
            .map(|e| e.message.as_str())
    }
}

/// Absent, null, whitespace-only text, `false`, or an empty list / object
pub fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(Value::Bool(b)) => !b,
        Some(Value::Array(items)) => items.is_empty(),
        Some(Value::Object(map)) => map.is_empty(),
        Some(Value::Number(_)) => false,
    }
}

fn value_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s.as_str()),
        other => Cow::Owned(other.to_string()),
    }
}

fn parse_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    }
}

/// Value checks in precedence order: required, then the per-kind rules.
/// `regex` is the compiled pattern of a text field, if it has a usable one.
fn check_value(field: &Field, value: Option<&Value>, regex: Option<&Regex>) -> Option<String> {
    if is_blank(value) {
        return field
            .required
            .then(|| format!("{} is required", field.label));
    }
    let value = value?;

    let rules = field.validation.as_ref();
    let min = rules.and_then(|r| r.min);
    let max = rules.and_then(|r| r.max);

    match field.field_type {
        FieldType::Email => {
            if !EMAIL_RE.is_match(&value_text(value)) {
                return Some(INVALID_EMAIL.to_string());
            }
        }
        FieldType::Number => {
            let Some(number) = parse_number(value) else {
                return Some(INVALID_NUMBER.to_string());
            };
            if let Some(min) = min.filter(|min| number < *min) {
                return Some(format!("Value must be at least {}", min));
            }
            if let Some(max) = max.filter(|max| number > *max) {
                return Some(format!("Value must be at most {}", max));
            }
        }
        FieldType::Text | FieldType::Textarea => {
            let text = value_text(value);
            let length = text.chars().count() as f64;
            if let Some(min) = min.filter(|min| length < *min) {
                return Some(format!("Must be at least {} characters", min));
            }
            if let Some(max) = max.filter(|max| length > *max) {
                return Some(format!("Must be at most {} characters", max));
            }
            if let Some(regex) = regex {
                if !regex.is_match(&text) {
                    let message = rules
                        .and_then(|r| r.message.as_deref())
                        .filter(|m| !m.is_empty())
                        .unwrap_or(INVALID_FORMAT);
                    return Some(message.to_string());
                }
            }
        }
        FieldType::Select
        | FieldType::Checkbox
        | FieldType::Radio
        | FieldType::File
        | FieldType::Date => {}
    }

    None
}

/// Validation engine with an optional cache of compiled patterns.
///
/// The cache holds at most one pattern per field id; editing a field's
/// pattern replaces its entry.
#[derive(Debug, Default)]
pub struct Validator {
    patterns: HashMap<FieldId, (String, Regex)>,
    cache_patterns: bool,
}

impl Validator {
    /// Validator that keeps compiled patterns between calls
    pub fn cached() -> Self {
        Self {
            patterns: HashMap::new(),
            cache_patterns: true,
        }
    }

    /// Validator that compiles patterns on every call
    pub fn uncached() -> Self {
        Self::default()
    }

    pub fn cached_patterns(&self) -> usize {
        self.patterns.len()
    }

    /// Validate one value against one field.
    ///
    /// `Ok(None)` means the value is acceptable, `Ok(Some(msg))` carries the
    /// user-facing error. Blank values are settled by the required check
    /// alone. A non-blank value for a text field whose pattern does not
    /// compile yields `Err(InvalidPattern)`.
    pub fn validate_field(&mut self, field: &Field, value: Option<&Value>) -> Result<Option<String>> {
        if is_blank(value) {
            return Ok(check_value(field, value, None));
        }
        let regex = self.pattern_for(field)?;
        Ok(check_value(field, value, regex.as_ref()))
    }

    /// Validate every field in sequence order.
    ///
    /// A broken pattern is reported in `rule_errors` whatever the value;
    /// the field's remaining checks (required, length) still produce value
    /// errors.
    pub fn validate_form(&mut self, fields: &[Field], values: &FieldValues) -> ValidationReport {
        let mut report = ValidationReport::default();
        for field in fields {
            let regex = match self.pattern_for(field) {
                Ok(regex) => regex,
                Err(err) => {
                    tracing::warn!(field_id = %field.id, error = %err, "ignoring broken pattern rule");
                    report.rule_errors.push(err);
                    None
                }
            };
            if let Some(message) = check_value(field, values.get(&field.id), regex.as_ref()) {
                report.errors.push(ValidationError {
                    field_id: field.id.clone(),
                    message,
                });
            }
        }
        if self.cache_patterns {
            let live: HashSet<&FieldId> = fields.iter().map(|f| &f.id).collect();
            self.patterns.retain(|id, _| live.contains(id));
        }
        tracing::debug!(
            fields = fields.len(),
            errors = report.errors.len(),
            rule_errors = report.rule_errors.len(),
            "validated form"
        );
        report
    }

    /// Compiled pattern of a text field, `None` when it has no pattern rule
    fn pattern_for(&mut self, field: &Field) -> Result<Option<Regex>> {
        let pattern = field
            .validation
            .as_ref()
            .and_then(|r| r.pattern.as_deref())
            .filter(|p| !p.is_empty() && field.field_type.supports_pattern());
        let Some(pattern) = pattern else {
            return Ok(None);
        };

        if let Some((cached, regex)) = self.patterns.get(&field.id) {
            if cached == pattern {
                return Ok(Some(regex.clone()));
            }
        }
        let regex = Regex::new(pattern).map_err(|e| FormsError::InvalidPattern {
            field_id: field.id.to_string(),
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?;
        if self.cache_patterns {
            self.patterns
                .insert(field.id.clone(), (pattern.to_string(), regex.clone()));
        }
        Ok(Some(regex))
    }
}

/// Validate one value without keeping compiled patterns
pub fn validate_field(field: &Field, value: Option<&Value>) -> Result<Option<String>> {
    Validator::uncached().validate_field(field, value)
}

/// Validate a whole form without keeping compiled patterns
pub fn validate_form(fields: &[Field], values: &FieldValues) -> ValidationReport {
    Validator::uncached().validate_form(fields, values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::ValidationRules;
    use serde_json::json;

    fn field(kind: FieldType) -> Field {
        Field::new(FieldId::from("f1"), kind, "Name")
    }

    fn check(field: &Field, value: Value) -> Option<String> {
        validate_field(field, Some(&value)).unwrap()
    }

    fn bounds(min: f64, max: f64) -> ValidationRules {
        ValidationRules {
            min: Some(min),
            max: Some(max),
            ..Default::default()
        }
    }

    #[test]
    fn test_required_blank_values() {
        let f = field(FieldType::Text).required(true);
        assert_eq!(validate_field(&f, None).unwrap().as_deref(), Some("Name is required"));
        for blank in [json!(null), json!(""), json!("   ")] {
            assert_eq!(check(&f, blank).as_deref(), Some("Name is required"));
        }
        assert_eq!(check(&f, json!("Ada")), None);
    }

    #[test]
    fn test_required_takes_precedence() {
        let f = field(FieldType::Email)
            .required(true)
            .with_validation(bounds(3.0, 5.0));
        assert_eq!(check(&f, json!(" ")).as_deref(), Some("Name is required"));
    }

    #[test]
    fn test_optional_blank_always_passes() {
        for kind in FieldType::ALL {
            let f = field(kind).with_validation(ValidationRules {
                min: Some(2.0),
                pattern: Some("^x$".into()),
                ..Default::default()
            });
            assert_eq!(validate_field(&f, None).unwrap(), None);
            assert_eq!(check(&f, json!("  ")), None);
        }
    }

    #[test]
    fn test_unchecked_required_checkbox() {
        let f = field(FieldType::Checkbox).required(true);
        assert!(check(&f, json!(false)).is_some());
        assert_eq!(check(&f, json!(true)), None);
    }

    #[test]
    fn test_email() {
        let f = field(FieldType::Email).required(true);
        assert_eq!(check(&f, json!("a@b.com")), None);
        assert_eq!(
            check(&f, json!("not-an-email")).as_deref(),
            Some("Please enter a valid email address")
        );
        assert!(check(&f, json!("a b@c.com")).is_some());
        assert!(check(&f, json!("a@b")).is_some());
        assert!(check(&f, json!("a@@b.com")).is_some());
    }

    #[test]
    fn test_number_bounds() {
        let f = field(FieldType::Number).with_validation(bounds(5.0, 10.0));
        assert_eq!(check(&f, json!("3")).as_deref(), Some("Value must be at least 5"));
        assert_eq!(check(&f, json!("7")), None);
        assert_eq!(check(&f, json!("20")).as_deref(), Some("Value must be at most 10"));
        assert_eq!(check(&f, json!("abc")).as_deref(), Some("Please enter a valid number"));
        assert_eq!(check(&f, json!(8)), None);
        assert_eq!(check(&f, json!(" 6 ")), None);
    }

    #[test]
    fn test_number_without_rules() {
        let f = field(FieldType::Number);
        assert_eq!(check(&f, json!("-1.5e3")), None);
        assert!(check(&f, json!("NaN")).is_some());
    }

    #[test]
    fn test_infinity_is_not_a_number() {
        let f = field(FieldType::Number);
        for text in ["inf", "infinity", "-inf", "Infinity"] {
            assert_eq!(check(&f, json!(text)).as_deref(), Some("Please enter a valid number"));
        }
    }

    #[test]
    fn test_text_length_counts_chars() {
        let f = field(FieldType::Textarea).with_validation(bounds(2.0, 3.0));
        assert_eq!(check(&f, json!("a")).as_deref(), Some("Must be at least 2 characters"));
        assert_eq!(check(&f, json!("héé")), None);
        assert_eq!(check(&f, json!("abcd")).as_deref(), Some("Must be at most 3 characters"));
    }

    #[test]
    fn test_text_pattern() {
        let f = field(FieldType::Text).with_validation(ValidationRules {
            pattern: Some("^[A-Za-z]+$".into()),
            message: Some("letters only".into()),
            ..Default::default()
        });
        assert_eq!(check(&f, json!("abc123")).as_deref(), Some("letters only"));
        assert_eq!(check(&f, json!("abc")), None);
    }

    #[test]
    fn test_pattern_default_message() {
        let f = field(FieldType::Text).with_validation(ValidationRules {
            pattern: Some(r"^\d+$".into()),
            ..Default::default()
        });
        assert_eq!(check(&f, json!("x")).as_deref(), Some("Invalid format"));
    }

    #[test]
    fn test_pattern_ignored_for_other_kinds() {
        let f = field(FieldType::Email).with_validation(ValidationRules {
            pattern: Some("[".into()),
            ..Default::default()
        });
        assert_eq!(check(&f, json!("a@b.com")), None);
    }

    #[test]
    fn test_invalid_pattern_is_rule_error() {
        let f = field(FieldType::Text).with_validation(ValidationRules {
            pattern: Some("[a-".into()),
            ..Default::default()
        });
        let err = validate_field(&f, Some(&json!("abc"))).unwrap_err();
        assert!(matches!(err, FormsError::InvalidPattern { .. }));
        assert_eq!(validate_field(&f, None).unwrap(), None);

        let report = validate_form(&[f], &FieldValues::new());
        assert_eq!(report.rule_errors.len(), 1);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn test_form_errors_follow_field_order() {
        let a = Field::new(FieldId::from("a"), FieldType::Text, "A").required(true);
        let b = Field::new(FieldId::from("b"), FieldType::Email, "B");
        let c = Field::new(FieldId::from("c"), FieldType::Text, "C").required(true);
        let mut values = FieldValues::new();
        values.insert(FieldId::from("b"), json!("b@example.com"));

        let report = validate_form(&[a.clone(), b.clone()], &values);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].field_id.as_str(), "a");
        assert_eq!(report.error_for(&FieldId::from("a")), Some("A is required"));

        let report = validate_form(&[c, b, a], &values);
        let ids: Vec<&str> = report.errors.iter().map(|e| e.field_id.as_str()).collect();
        assert_eq!(ids, ["c", "a"]);
    }

    #[test]
    fn test_broken_rule_does_not_stop_other_fields() {
        let broken = field(FieldType::Text).with_validation(ValidationRules {
            pattern: Some("(".into()),
            ..Default::default()
        });
        let required = Field::new(FieldId::from("f2"), FieldType::Date, "When").required(true);
        let report = validate_form(&[broken, required], &FieldValues::new());
        assert_eq!(report.rule_errors.len(), 1);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].field_id.as_str(), "f2");
        assert!(!report.is_valid());
    }

    #[test]
    fn test_required_still_reported_with_broken_pattern() {
        let f = Field::new(FieldId::from("a"), FieldType::Text, "Name")
            .required(true)
            .with_validation(ValidationRules {
                min: Some(3.0),
                pattern: Some("(".into()),
                ..Default::default()
            });
        assert_eq!(
            validate_field(&f, None).unwrap().as_deref(),
            Some("Name is required")
        );

        let report = validate_form(std::slice::from_ref(&f), &FieldValues::new());
        assert_eq!(report.rule_errors.len(), 1);
        assert_eq!(report.error_for(&FieldId::from("a")), Some("Name is required"));

        let mut values = FieldValues::new();
        values.insert(FieldId::from("a"), json!("ab"));
        let report = validate_form(&[f], &values);
        assert_eq!(report.rule_errors.len(), 1);
        assert_eq!(
            report.error_for(&FieldId::from("a")),
            Some("Must be at least 3 characters")
        );
    }

    #[test]
    fn test_pattern_cache() {
        let f = field(FieldType::Text).with_validation(ValidationRules {
            pattern: Some("^a".into()),
            ..Default::default()
        });
        let mut cached = Validator::cached();
        for _ in 0..3 {
            assert_eq!(cached.validate_field(&f, Some(&json!("abc"))).unwrap(), None);
        }
        assert_eq!(cached.cached_patterns(), 1);

        let mut uncached = Validator::uncached();
        uncached.validate_field(&f, Some(&json!("abc"))).unwrap();
        assert_eq!(uncached.cached_patterns(), 0);
    }

    #[test]
    fn test_pattern_cache_keeps_one_entry_per_field() {
        let mut validator = Validator::cached();
        let mut values = FieldValues::new();
        values.insert(FieldId::from("f1"), json!("abc"));

        for pattern in ["^a", "^ab", "^abc", "^x"] {
            let f = field(FieldType::Text).with_validation(ValidationRules {
                pattern: Some(pattern.into()),
                ..Default::default()
            });
            validator.validate_form(&[f], &values);
            assert_eq!(validator.cached_patterns(), 1);
        }

        validator.validate_form(&[], &values);
        assert_eq!(validator.cached_patterns(), 0);
    }
}
