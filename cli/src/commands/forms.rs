//! Form commands

use crate::commands::read_document;
use crate::output::OutputFormat;
use crate::FormCommands;
use anyhow::{anyhow, bail, Result};
use colored::Colorize;
use formcraft_core::{
    get_theme_by_id, BuilderConfig, Field, FieldType, FieldValues, Form, FormEditor, FormPatch,
    FormsError, RequiredProgress, ValidationReport, Validator,
};
use serde::Serialize;
use std::path::Path;
use tabled::Tabled;

#[derive(Tabled)]
struct FieldRow {
    id: String,
    #[tabled(rename = "type")]
    kind: String,
    label: String,
    required: bool,
    options: usize,
}

impl From<&Field> for FieldRow {
    fn from(field: &Field) -> Self {
        Self {
            id: field.id.to_string(),
            kind: field.field_type.to_string(),
            label: field.label.clone(),
            required: field.required,
            options: field.options.len(),
        }
    }
}

#[derive(Clone, Serialize, Tabled)]
#[serde(rename_all = "camelCase")]
struct IssueRow {
    field_id: String,
    code: String,
    message: String,
}

#[derive(Clone, Copy, Serialize, Tabled)]
#[serde(rename_all = "camelCase")]
struct CompletionRow {
    required: usize,
    filled: usize,
    remaining: usize,
    percentage: u8,
}

pub fn handle(action: FormCommands, config: &BuilderConfig, format: OutputFormat) -> Result<()> {
    match action {
        FormCommands::New {
            title,
            fields,
            theme,
        } => {
            let form = new_form(config, title, &fields, theme.as_deref())?;
            format.print(&form, form.fields().iter().map(FieldRow::from))?;
        }
        FormCommands::Validate { form, values } => {
            let (form, values) = load_inputs(&form, &values)?;
            let mut validator = if config.cache_patterns {
                Validator::cached()
            } else {
                Validator::uncached()
            };
            let report = validator.validate_form(form.fields(), &values);
            let issues = issues(&report);
            if issues.is_empty() {
                if format == OutputFormat::Table {
                    println!("{} {} fields valid", "✓".green(), form.fields().len());
                } else {
                    format.print(&issues, Vec::<IssueRow>::new())?;
                }
                return Ok(());
            }
            format.print(&issues, issues.iter().cloned())?;
            bail!("{} validation issue(s)", issues.len());
        }
        FormCommands::Completion { form, values } => {
            let (form, values) = load_inputs(&form, &values)?;
            let progress = RequiredProgress::measure(form.fields(), &values);
            let row = CompletionRow {
                required: progress.required,
                filled: progress.filled,
                remaining: progress.remaining(),
                percentage: progress.percentage(),
            };
            format.print(&row, [row])?;
        }
    }
    Ok(())
}

/// Build a form from palette field types, in order.
pub fn new_form(
    config: &BuilderConfig,
    title: Option<String>,
    fields: &[String],
    theme: Option<&str>,
) -> Result<Form> {
    let mut editor = FormEditor::new(config.clone());
    for name in fields {
        let kind: FieldType = name.parse().map_err(|e: String| anyhow!(e))?;
        editor.add_field(kind)?;
    }
    if let Some(id) = theme {
        editor.update_theme(get_theme_by_id(id));
    }
    if let Some(title) = title {
        editor.update_form_settings(&FormPatch::default().title(title));
    }
    Ok(editor.form().clone())
}

fn load_inputs(form: &Path, values: &Path) -> Result<(Form, FieldValues)> {
    Ok((read_document(form)?, read_document(values)?))
}

fn issues(report: &ValidationReport) -> Vec<IssueRow> {
    let rules = report.rule_errors.iter().map(|e| IssueRow {
        field_id: match e {
            FormsError::InvalidPattern { field_id, .. } => field_id.clone(),
            _ => String::new(),
        },
        code: e.code().to_string(),
        message: e.to_string(),
    });
    let values = report.errors.iter().map(|e| IssueRow {
        field_id: e.field_id.to_string(),
        code: "INVALID_VALUE".to_string(),
        message: e.message.clone(),
    });
    rules.chain(values).collect()
}
