use futures::{SinkExt, StreamExt};
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::sync::mpsc;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{connect_async, WebSocketStream};
use tracing::{debug, info, trace, warn};

use valstream_metrics::Metrics;
use valstream_pipeline::InboundValidation;

use crate::frame::{parse_inbound, subscribe_command, Inbound};
use crate::TransportError;

/// A websocket client for the validations stream.
#[derive(Clone, Debug)]
pub struct Client {
    url: String,
    streams: Vec<String>,
    metrics: Metrics,
}

impl Client {
    pub fn new(url: impl Into<String>, streams: Vec<String>, metrics: Metrics) -> Self {
        Self {
            url: url.into(),
            streams,
            metrics,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Connects, subscribes and forwards validations until the stream ends.
    ///
    /// Returns `Ok` when the server closes the stream or the receiving end of
    /// `validations` is dropped.
    pub async fn run(
        self,
        validations: mpsc::Sender<InboundValidation>,
    ) -> Result<(), TransportError> {
        info!(url = %self.url, "Connecting to validations stream");

        let (ws, _response) = connect_async(self.url.as_str()).await?;

        info!(url = %self.url, "Connected");

        self.stream(ws, validations).await
    }

    /// Subscribes over an established connection and forwards validations.
    pub async fn stream<S>(
        self,
        ws: WebSocketStream<S>,
        validations: mpsc::Sender<InboundValidation>,
    ) -> Result<(), TransportError>
    where
        S: AsyncRead + AsyncWrite + Unpin,
    {
        let (mut sink, mut source) = ws.split();

        sink.send(Message::Text(subscribe_command(&self.streams)))
            .await?;

        debug!(streams = ?self.streams, "Sent subscription");

        while let Some(msg) = source.next().await {
            match msg? {
                Message::Text(text) => match parse_inbound(&text) {
                    Ok(Inbound::Validation(validation)) => {
                        if validations.send(validation).await.is_err() {
                            debug!("Validation receiver dropped, closing stream");
                            break;
                        }
                    }

                    Ok(Inbound::Response(response)) => {
                        debug!(%response, "Received response");
                    }

                    Ok(Inbound::Other(kind)) => {
                        trace!(?kind, "Ignoring frame");
                    }

                    Err(e) => {
                        self.metrics.parse_failures.inc();
                        warn!("Dropping stream frame: {e}");
                    }
                },

                Message::Ping(payload) => {
                    sink.send(Message::Pong(payload)).await?;
                }

                Message::Close(frame) => {
                    info!(?frame, "Stream closed by server");
                    break;
                }

                Message::Binary(_) | Message::Pong(_) | Message::Frame(_) => {}
            }
        }

        Ok(())
    }
}
