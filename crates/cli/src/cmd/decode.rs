//! Decode command

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use serde::Serialize;

use valstream_address::NodePublicKey;
use valstream_codec::{decode, DecodedValidation};
use valstream_verify::verify;

#[derive(Parser, Clone, Debug, Default, PartialEq)]
pub struct DecodeCmd {
    /// Hex encoded validation message
    #[clap(value_name = "HEX")]
    pub hex: String,

    /// Node public key to verify the signature against
    #[clap(long, value_name = "KEY")]
    pub node_key: Option<String>,
}

#[derive(Serialize)]
struct Output<'a> {
    #[serde(flatten)]
    validation: &'a DecodedValidation,

    #[serde(skip_serializing_if = "Option::is_none")]
    verified: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    verification_error: Option<String>,
}

impl DecodeCmd {
    pub fn run(&self) -> Result<()> {
        println!("{}", self.render()?);
        Ok(())
    }

    /// Decodes the message, verifying it if a node key was given, and renders it as JSON.
    pub fn render(&self) -> Result<String> {
        let bytes = hex::decode(self.hex.trim()).wrap_err("invalid hex")?;
        let validation = decode(&bytes)?;

        let outcome = match &self.node_key {
            Some(key) => {
                let key: NodePublicKey = key.parse().wrap_err("invalid node key")?;
                Some(verify(&key.to_hex(), &bytes, &validation))
            }
            None => None,
        };

        let output = Output {
            validation: &validation,
            verified: outcome.as_ref().map(|o| o.verified),
            verification_error: outcome.and_then(|o| o.error).map(|e| e.to_string()),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}
