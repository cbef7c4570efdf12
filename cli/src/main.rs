//! Formcraft CLI
//!
//! Command-line host for the Formcraft form builder core.
//!
//! # Usage
//!
//! ```bash
//! formcraft themes list
//! formcraft themes export clean-blue > clean-blue.json
//! formcraft forms new --title "Contact" --field text --field email > contact.json
//! formcraft forms validate --form contact.json --values answers.json
//! formcraft forms completion --form contact.json --values answers.yaml
//! ```

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod output;

#[derive(Parser)]
#[command(name = "formcraft")]
#[command(author = "Formcraft")]
#[command(version = "0.1.0")]
#[command(about = "Formcraft Command Line Interface", long_about = None)]
struct Cli {
    /// Builder config file (TOML)
    #[arg(long, short, env = "FORMCRAFT_CONFIG")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, short, default_value = "table")]
    format: output::OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse, export and import themes
    Themes {
        #[command(subcommand)]
        action: ThemeCommands,
    },
    /// Build and check form definitions
    Forms {
        #[command(subcommand)]
        action: FormCommands,
    },
    /// Inspect builder configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ThemeCommands {
    /// List built-in themes
    List,
    /// Show one theme (falls back to the first built-in theme)
    Show { id: String },
    /// Print a theme as pretty JSON
    Export { id: String },
    /// Check an exported theme file
    Import {
        #[arg(short, long)]
        file: PathBuf,
    },
    /// Print CSS custom properties for a theme
    Css { id: String },
}

#[derive(Subcommand)]
enum FormCommands {
    /// Create a form from palette field types
    New {
        #[arg(long)]
        title: Option<String>,
        /// Field type to append (repeatable)
        #[arg(long = "field")]
        fields: Vec<String>,
        /// Built-in theme id
        #[arg(long)]
        theme: Option<String>,
    },
    /// Validate entered values against a form
    Validate {
        #[arg(long)]
        form: PathBuf,
        #[arg(long)]
        values: PathBuf,
    },
    /// Show completion of required fields
    Completion {
        #[arg(long)]
        form: PathBuf,
        #[arg(long)]
        values: PathBuf,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Print the effective configuration
    Show,
    /// Write the default configuration
    Init {
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = config::load(cli.config.as_deref()).and_then(|config| match cli.command {
        Commands::Themes { action } => commands::themes::handle(action, cli.format),
        Commands::Forms { action } => commands::forms::handle(action, &config, cli.format),
        Commands::Config { action } => commands::config::handle(action, &config),
    });

    if let Err(e) = result {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}
