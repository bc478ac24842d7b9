//! Fixtures shared by the valstream test suites.
//!
//! The encoder here is written independently of the decoder so that tests compare the
//! decoder against a second rendition of the wire format.

mod builder;
mod signer;

pub mod fixtures;

pub use builder::{encode_length_prefix, SignedMessage, ValidationBuilder};
pub use signer::{signing_digest, TestSigner, NODE_PUBLIC_VERSION};

/// Wraps a validation in the JSON frame sent by the validations stream.
pub fn stream_frame(node_key: &str, data: &[u8]) -> String {
    serde_json::json!({
        "type": "validationReceived",
        "validation_public_key": node_key,
        "data": hex::encode_upper(data),
    })
    .to_string()
}
