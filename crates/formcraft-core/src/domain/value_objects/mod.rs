//! Value Objects module
//!
//! Immutable domain primitives: identifiers, fields and themes.

pub mod field;
pub mod theme;

pub use field::{
    Field, FieldPatch, FieldStyle, FieldType, FieldWidth, FontSize, FontWeight, ValidationRules,
};
pub use theme::{Theme, ThemeColors, ThemeSpacing, ThemeToken, ThemeTypography};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};

/// Values entered during preview, keyed by field id
pub type FieldValues = HashMap<FieldId, serde_json::Value>;

static LAST_TICK: AtomicI64 = AtomicI64::new(0);

/// Millisecond timestamp that strictly increases across calls in this process.
pub(crate) fn next_tick() -> i64 {
    let now = Utc::now().timestamp_millis();
    let mut last = LAST_TICK.load(Ordering::Relaxed);
    loop {
        let next = now.max(last + 1);
        match LAST_TICK.compare_exchange_weak(last, next, Ordering::SeqCst, Ordering::Relaxed) {
            Ok(_) => return next,
            Err(current) => last = current,
        }
    }
}

/// Identifier of a field, the join key to entered values and errors
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldId(String);

impl FieldId {
    /// Generate a fresh `<prefix>-<tick>` id
    pub fn generate(prefix: &str) -> Self {
        Self(format!("{}-{}", prefix, next_tick()))
    }

    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for FieldId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FieldId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Identifier of a theme
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeId(String);

impl ThemeId {
    /// Generate a fresh `custom-<tick>` id for a user-created theme
    pub fn custom() -> Self {
        Self(format!("custom-{}", next_tick()))
    }

    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_custom(&self) -> bool {
        self.0.starts_with("custom-")
    }
}

impl std::fmt::Display for ThemeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ThemeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ThemeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}
