//! Completion tracking over required fields

use serde_json::Value;

use crate::domain::value_objects::{Field, FieldValues};

/// Anything but absent, `null` or the empty string
pub fn is_filled(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequiredProgress {
    pub required: usize,
    pub filled: usize,
}

impl RequiredProgress {
    pub fn measure(fields: &[Field], values: &FieldValues) -> Self {
        let (required, filled) = fields
            .iter()
            .filter(|f| f.required)
            .fold((0, 0), |(required, filled), f| {
                let filled = filled + usize::from(is_filled(values.get(&f.id)));
                (required + 1, filled)
            });
        Self { required, filled }
    }

    pub fn remaining(&self) -> usize {
        self.required - self.filled
    }

    /// Rounded share of filled required fields; 100 when none are required
    pub fn percentage(&self) -> u8 {
        if self.required == 0 {
            return 100;
        }
        (self.filled as f64 * 100.0 / self.required as f64).round() as u8
    }
}

pub fn completion_percentage(fields: &[Field], values: &FieldValues) -> u8 {
    RequiredProgress::measure(fields, values).percentage()
}
