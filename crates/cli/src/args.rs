//! Command-line interface arguments
//!
//! The daemon reads its configuration from the file given with `--config`, by default
//! `<HOME_DIR>/config/config.toml`. Logging options can be overridden on the command-line.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{eyre, Result};
use directories::BaseDirs;

use valstream_config::{LogFormat, LogLevel};

use crate::cmd::decode::DecodeCmd;
use crate::cmd::init::InitCmd;
use crate::cmd::start::StartCmd;

const APP_FOLDER: &str = ".valstream";
const CONFIG_FILE: &str = "config.toml";

#[derive(Parser, Clone, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Home directory (default: `~/.valstream`)
    #[arg(long, global = true, value_name = "HOME_DIR", env = "VALSTREAM_HOME")]
    pub home: Option<PathBuf>,

    /// Configuration file (default: `<HOME_DIR>/config/config.toml`)
    #[arg(long, global = true, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Log level, overrides the configuration file
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Log format, overrides the configuration file
    #[arg(long, global = true, value_name = "FORMAT")]
    pub log_format: Option<LogFormat>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Clone, Debug, PartialEq)]
pub enum Commands {
    /// Write a default configuration file
    Init(InitCmd),

    /// Subscribe to the validations stream and store verified validations
    Start(StartCmd),

    /// Decode a hex encoded validation message and print it as JSON
    Decode(DecodeCmd),
}

impl Args {
    /// Returns the application home folder.
    /// Typically `$HOME/.valstream`, dependent on the operating system.
    pub fn get_home_dir(&self) -> Result<PathBuf> {
        match &self.home {
            Some(path) => Ok(path.clone()),
            None => Ok(BaseDirs::new()
                .ok_or_else(|| eyre!("could not determine home directory path"))?
                .home_dir()
                .join(APP_FOLDER)),
        }
    }

    /// Returns the configuration folder based on the home folder.
    pub fn get_config_dir(&self) -> Result<PathBuf> {
        Ok(self.get_home_dir()?.join("config"))
    }

    /// Returns the configuration file path based on the command-line arguments
    /// and the configuration folder.
    pub fn get_config_file_path(&self) -> Result<PathBuf> {
        match &self.config {
            Some(path) => Ok(path.clone()),
            None => Ok(self.get_config_dir()?.join(CONFIG_FILE)),
        }
    }
}
