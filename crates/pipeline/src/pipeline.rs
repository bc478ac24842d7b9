use tracing::{debug, trace, warn};

use valstream_address::{AddressCodec, AddressError, Base58Codec};
use valstream_codec::{decode, DecodeError};
use valstream_store::ValidationRecord;
use valstream_verify::{try_verify, VerificationError};

#[derive(Clone, Debug, PartialEq)]
pub enum PersistDecision {
    Persist(ValidationRecord),
    Drop(DropReason),
}

impl PersistDecision {
    pub fn is_persist(&self) -> bool {
        matches!(self, Self::Persist(_))
    }
}

/// Why a message was not persisted.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum DropReason {
    #[error("invalid node key: {0}")]
    InvalidNodeKey(#[from] AddressError),

    #[error("invalid hex payload: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("failed to decode validation: {0}")]
    Decode(#[from] DecodeError),

    #[error("validation not verified: {0}")]
    Unverified(#[from] VerificationError),
}

impl DropReason {
    /// Whether the message was well formed but failed verification.
    pub fn is_unverified(&self) -> bool {
        matches!(self, Self::Unverified(_))
    }
}

/// Decides, message by message, which validations to persist.
///
/// Holds no state between messages.
#[derive(Clone, Debug, Default)]
pub struct Pipeline<A = Base58Codec> {
    address_codec: A,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<A> Pipeline<A>
where
    A: AddressCodec,
{
    pub fn with_address_codec(address_codec: A) -> Self {
        Self { address_codec }
    }

    /// Decodes and verifies a validation announced by `public_key_wire_format`.
    ///
    /// Failures are logged and turned into [`PersistDecision::Drop`].
    pub fn handle(&self, public_key_wire_format: &str, hex_data: &str) -> PersistDecision {
        match self.check(public_key_wire_format, hex_data) {
            Ok(record) => {
                debug!(
                    ledger.sequence = record.ledger_sequence,
                    node_key = %public_key_wire_format,
                    "Verified validation"
                );

                PersistDecision::Persist(record)
            }

            Err(reason) => {
                if reason.is_unverified() {
                    debug!(node_key = %public_key_wire_format, %reason, "Dropping validation");
                } else {
                    warn!(node_key = %public_key_wire_format, %reason, "Dropping validation");
                }

                PersistDecision::Drop(reason)
            }
        }
    }

    fn check(
        &self,
        public_key_wire_format: &str,
        hex_data: &str,
    ) -> Result<ValidationRecord, DropReason> {
        let public_key = self
            .address_codec
            .decode_node_public(public_key_wire_format)?;

        let claimed = hex::encode_upper(public_key);
        let data = hex::decode(hex_data)?;

        let decoded = decode(&data)?;
        trace!(
            ledger.sequence = decoded.ledger_sequence,
            key_type = %decoded.key_type,
            "Decoded validation"
        );

        try_verify(&claimed, &data, &decoded)?;

        Ok(ValidationRecord {
            ledger_sequence: decoded.ledger_sequence,
            pubkey: public_key_wire_format.to_string(),
            data,
        })
    }
}
