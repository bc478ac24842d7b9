//! Start command

use std::path::Path;
use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tokio::sync::mpsc;
use tracing::{error, info, Instrument};

use valstream_config::Config;
use valstream_metrics::{Metrics, SharedRegistry};
use valstream_pipeline::Ingester;
use valstream_store::{MemoryStore, RedbStore, Store};
use valstream_transport::Client;

use crate::metrics::serve_metrics;

#[derive(Parser, Clone, Debug, Default, PartialEq)]
pub struct StartCmd {
    /// Keep validations in memory instead of the database
    #[clap(long)]
    pub ephemeral: bool,
}

impl StartCmd {
    pub async fn run(&self, home_dir: &Path, config: Config) -> Result<()> {
        let span = tracing::error_span!("valstream", moniker = %config.moniker);

        self.start(home_dir, config).instrument(span).await
    }

    async fn start(&self, home_dir: &Path, config: Config) -> Result<()> {
        let registry = SharedRegistry::global();
        let metrics = Metrics::register(registry);

        if config.metrics.enabled {
            let listen_addr = config.metrics.listen_addr;
            let registry = registry.clone();

            tokio::spawn(
                async move {
                    if let Err(e) = serve_metrics(listen_addr, registry).await {
                        error!("Metrics endpoint failed: {e:#}");
                    }
                }
                .in_current_span(),
            );
        }

        let store = self.open_store(home_dir, &config)?;

        let (tx, rx) = mpsc::channel(config.runtime.channel_capacity.max(1));
        let ingester = tokio::spawn(Ingester::new(store, metrics.clone()).run(rx).in_current_span());

        let client = Client::new(
            config.transport.url.clone(),
            config.transport.streams.clone(),
            metrics,
        );

        info!(url = %client.url(), "Starting");

        // Dropping the client closes the channel, letting the ingester drain.
        let result = tokio::select! {
            result = client.run(tx) => result,
            _ = tokio::signal::ctrl_c() => {
                info!("Shutting down...");
                Ok(())
            }
        };

        ingester.await?;

        match result {
            Ok(()) => {
                info!("Validation stream ended");
                Ok(())
            }
            Err(e) => Err(e).wrap_err("validation stream failed"),
        }
    }

    fn open_store(&self, home_dir: &Path, config: &Config) -> Result<Arc<dyn Store>> {
        if self.ephemeral {
            info!("Storing validations in memory");
            return Ok(Arc::new(MemoryStore::new()));
        }

        let path = config.store.resolve(home_dir);

        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)
                .wrap_err_with(|| format!("failed to create directory {}", dir.display()))?;
        }

        let store = RedbStore::open(&path)
            .wrap_err_with(|| format!("failed to open store at {}", path.display()))?;

        info!(path = %path.display(), "Storing validations");

        Ok(Arc::new(store))
    }
}
