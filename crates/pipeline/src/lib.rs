//! The validation pipeline.
//!
//! [`Pipeline::handle`] turns one inbound message into a [`PersistDecision`].
//! [`Ingester`] runs the pipeline over a channel of inbound messages and hands verified
//! records to a [`Store`](valstream_store::Store) without waiting for the writes.

mod ingest;
mod pipeline;

pub use ingest::Ingester;
pub use pipeline::{DropReason, PersistDecision, Pipeline};

use serde::Deserialize;

/// A validation as announced by the stream.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct InboundValidation {
    /// Node public key in its network (base58) encoding.
    pub validation_public_key: String,
    /// Hex encoded validation message.
    pub data: String,
}
