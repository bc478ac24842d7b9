use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing::debug;

use valstream_config::{load_config, LogFormat, LogLevel};

use crate::args::{Args, Commands};

mod args;
mod cmd;
mod logging;
mod metrics;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    match &args.command {
        Commands::Init(cmd) => {
            init_logging(&args, LogLevel::Info, LogFormat::Plaintext)?;
            cmd.run(&args.get_config_file_path()?)
        }

        Commands::Start(cmd) => {
            let config_file = args.get_config_file_path()?;
            let config = load_config(&config_file, None).wrap_err_with(|| {
                format!("failed to load configuration from {}", config_file.display())
            })?;

            init_logging(&args, config.logging.log_level, config.logging.log_format)?;
            debug!(file = %config_file.display(), "Loaded configuration");

            cmd.run(&args.get_home_dir()?, config).await
        }

        Commands::Decode(cmd) => {
            init_logging(&args, LogLevel::Warn, LogFormat::Plaintext)?;
            cmd.run()
        }
    }
}

/// Initializes logging, letting command-line flags override the given defaults.
fn init_logging(args: &Args, log_level: LogLevel, log_format: LogFormat) -> Result<()> {
    logging::init(
        args.log_level.unwrap_or(log_level),
        args.log_format.unwrap_or(log_format),
    )
}
