//! Config commands

use crate::config;
use crate::ConfigCommands;
use anyhow::{bail, Result};
use formcraft_core::BuilderConfig;

pub fn handle(action: ConfigCommands, current: &BuilderConfig) -> Result<()> {
    match action {
        ConfigCommands::Show => {
            print!("{}", current.to_toml_string()?);
        }
        ConfigCommands::Init { path } => {
            let path = match path {
                Some(path) => path,
                None => config::default_path()?,
            };
            if path.exists() {
                bail!("{} already exists", path.display());
            }
            config::save(&BuilderConfig::default(), &path)?;
            println!("Configuration initialized at {}", path.display());
        }
    }
    Ok(())
}
