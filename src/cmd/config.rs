//! `tagpro-onboard config` — show, validate, or initialize configuration.

use crate::ConfigCommands;
use anyhow::{Context, Result};
use console::style;
use std::path::Path;
use tagpro_onboard::config::OnboardConfig;

pub fn cmd_config(config_path: Option<&Path>, command: Option<ConfigCommands>) -> Result<()> {
    match command.unwrap_or(ConfigCommands::Show) {
        ConfigCommands::Show => {
            let config = OnboardConfig::load(config_path)?;
            let rendered =
                toml::to_string_pretty(&config).context("Failed to render configuration")?;
            println!("{}", rendered);
        }
        ConfigCommands::Validate => {
            let config = OnboardConfig::load(config_path)?;
            let warnings = config.validate();
            if warnings.is_empty() {
                println!("{} Configuration is valid", style("✓").green());
            } else {
                for warning in &warnings {
                    println!("{} {}", style("warning:").yellow().bold(), warning);
                }
                anyhow::bail!("{} configuration warning(s)", warnings.len());
            }
        }
        ConfigCommands::Init => {
            let path = config_path.unwrap_or_else(|| Path::new("onboard.toml"));
            if path.exists() {
                anyhow::bail!("Config file already exists: {}", path.display());
            }
            OnboardConfig::default().write_starter_file(path)?;
            println!("Wrote starter config to {}", path.display());
        }
    }
    Ok(())
}
