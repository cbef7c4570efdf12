//! Output formatting

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
}

impl OutputFormat {
    /// Print `data` as JSON / YAML, or `rows` as a table.
    pub fn print<T, R>(&self, data: &T, rows: impl IntoIterator<Item = R>) -> Result<()>
    where
        T: Serialize + ?Sized,
        R: Tabled,
    {
        println!("{}", self.render(data, rows)?);
        Ok(())
    }

    pub fn render<T, R>(&self, data: &T, rows: impl IntoIterator<Item = R>) -> Result<String>
    where
        T: Serialize + ?Sized,
        R: Tabled,
    {
        Ok(match self {
            OutputFormat::Json => serde_json::to_string_pretty(data)?,
            OutputFormat::Yaml => serde_yaml::to_string(data)?,
            OutputFormat::Table => Table::new(rows).with(Style::rounded()).to_string(),
        })
    }
}
