//! Aggregates module

pub mod form;

pub use form::{Form, FormPatch, FormSettings, SettingsPatch};
