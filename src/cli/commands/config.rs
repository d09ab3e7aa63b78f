//! Configuration command implementation

use anyhow::{Context, Result};

use crate::cli::{ConfigCommands, Output};
use crate::config::VettyConfig;

pub async fn execute(cmd: ConfigCommands, config_path: Option<&str>, output: &Output) -> Result<()> {
    match cmd {
        ConfigCommands::Show => {
            let config = VettyConfig::load(config_path, None)?;
            let rendered =
                toml::to_string_pretty(&config).context("Failed to render configuration")?;
            output.header("Effective configuration");
            println!("{rendered}");
            Ok(())
        }
        ConfigCommands::Validate => match VettyConfig::load(config_path, None) {
            Ok(_) => {
                output.success("Configuration is valid");
                Ok(())
            }
            Err(err) => Err(err.context("Configuration is invalid")),
        },
    }
}
