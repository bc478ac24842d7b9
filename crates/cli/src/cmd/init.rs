//! Init command

use std::fs;
use std::path::Path;

use clap::Parser;
use color_eyre::eyre::{eyre, Result, WrapErr};
use tracing::info;

use valstream_config::Config;

#[derive(Parser, Clone, Debug, Default, PartialEq)]
pub struct InitCmd {
    /// Overwrite an existing configuration file
    #[clap(long)]
    pub overwrite: bool,
}

impl InitCmd {
    /// Execute the init command
    pub fn run(&self, config_file: &Path) -> Result<()> {
        if config_file.exists() && !self.overwrite {
            return Err(eyre!(
                "Configuration file already exists at {}, run with --overwrite to replace it",
                config_file.display()
            ));
        }

        save_config(config_file, &Config::default())?;
        info!(file = %config_file.display(), "Wrote default configuration");

        Ok(())
    }
}

/// Save configuration to file
pub fn save_config(config_file: &Path, config: &Config) -> Result<()> {
    if let Some(dir) = config_file.parent() {
        fs::create_dir_all(dir)
            .wrap_err_with(|| format!("failed to create directory {}", dir.display()))?;
    }

    fs::write(config_file, toml::to_string_pretty(config)?)
        .wrap_err_with(|| format!("failed to write {}", config_file.display()))
}
