use std::io::IsTerminal;

use color_eyre::eyre::{eyre, Result};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use valstream_config::{LogFormat, LogLevel};

/// Builds the log filter. `RUST_LOG` takes precedence over `log_level`.
pub fn filter(log_level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level.as_str()))
}

/// Installs the global subscriber, logging to stderr.
pub fn init(log_level: LogLevel, log_format: LogFormat) -> Result<()> {
    let builder = FmtSubscriber::builder()
        .with_target(false)
        .with_env_filter(filter(log_level))
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_thread_ids(false);

    let result = match log_format {
        LogFormat::Plaintext => builder.finish().try_init(),
        LogFormat::Json => builder.json().finish().try_init(),
    };

    result.map_err(|e| eyre!("failed to initialize logging: {e}"))
}
