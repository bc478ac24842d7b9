//! Subscription to the validations stream.
//!
//! [`Client`] connects to a websocket endpoint, subscribes to the configured streams and
//! forwards every validation it receives to a channel. Frames are parsed by
//! [`parse_inbound`].

mod client;
mod frame;

pub use client::Client;
pub use frame::{parse_inbound, subscribe_command, Inbound, VALIDATIONS_STREAM};

use tokio_tungstenite::tungstenite;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("malformed stream frame: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("websocket error: {0}")]
    WebSocket(#[from] tungstenite::Error),
}
