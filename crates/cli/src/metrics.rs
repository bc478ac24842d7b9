use std::net::SocketAddr;

use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use color_eyre::eyre::{Result, WrapErr};
use tokio::net::TcpListener;
use tracing::info;

use valstream_metrics::SharedRegistry;

pub fn router(registry: SharedRegistry) -> Router {
    Router::new().route(
        "/metrics",
        get(move || {
            let registry = registry.clone();
            async move {
                registry
                    .export()
                    .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
            }
        }),
    )
}

#[tracing::instrument(name = "metrics", skip_all)]
pub async fn serve_metrics(listen_addr: SocketAddr, registry: SharedRegistry) -> Result<()> {
    let listener = TcpListener::bind(listen_addr)
        .await
        .wrap_err_with(|| format!("failed to bind metrics endpoint to {listen_addr}"))?;

    let address = listener.local_addr()?;

    info!(%address, "Serving metrics");
    axum::serve(listener, router(registry)).await?;

    Ok(())
}
