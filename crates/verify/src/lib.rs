//! Signature verification for validation messages.
//!
//! A validation is accepted when the key announced by the stream matches the
//! `SigningPubKey` field and the `Signature` field is a valid signature by that key over
//! the [signing digest](signing_digest) of the message.

mod digest;

pub use digest::{signing_digest, VALIDATION_PREFIX};

use valstream_codec::{DecodedValidation, KeyType};
use valstream_signing::{SignatureError, SigningScheme};
use valstream_signing_ecdsa::K256;
use valstream_signing_ed25519::Ed25519;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum VerificationError {
    #[error("SigningPubKey did not match or was not present")]
    PublicKeyMismatch,

    #[error("Signature ({key_type}) did not match or was not present")]
    InvalidSignature {
        key_type: KeyType,
        source: SignatureError,
    },

    #[error("signature span {start}..{end} lies outside the {len}-byte message")]
    SpanOutOfBounds { start: usize, end: usize, len: usize },
}

/// Result of checking a decoded validation against its claimed signer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerificationOutcome {
    pub verified: bool,
    /// Why verification failed; `None` when `verified` is true.
    pub error: Option<VerificationError>,
}

impl VerificationOutcome {
    pub fn verified() -> Self {
        Self {
            verified: true,
            error: None,
        }
    }

    pub fn rejected(error: VerificationError) -> Self {
        Self {
            verified: false,
            error: Some(error),
        }
    }
}

impl From<Result<(), VerificationError>> for VerificationOutcome {
    fn from(result: Result<(), VerificationError>) -> Self {
        match result {
            Ok(()) => Self::verified(),
            Err(e) => Self::rejected(e),
        }
    }
}

/// Verifies `decoded` against the signer claimed for it.
///
/// `claimed_public_key` is the hex encoding of the signer's public key, `raw` the bytes
/// `decoded` was decoded from.
pub fn verify(
    claimed_public_key: &str,
    raw: &[u8],
    decoded: &DecodedValidation,
) -> VerificationOutcome {
    try_verify(claimed_public_key, raw, decoded).into()
}

/// Like [`verify`], returning the failure as an error.
pub fn try_verify(
    claimed_public_key: &str,
    raw: &[u8],
    decoded: &DecodedValidation,
) -> Result<(), VerificationError> {
    if !claimed_public_key.eq_ignore_ascii_case(&decoded.signing_pub_key_hex()) {
        return Err(VerificationError::PublicKeyMismatch);
    }

    let span = decoded.signature_span.clone();
    if span.start > span.end || span.end > raw.len() {
        return Err(VerificationError::SpanOutOfBounds {
            start: span.start,
            end: span.end,
            len: raw.len(),
        });
    }

    let digest = signing_digest(raw, span);

    let result = match decoded.key_type {
        KeyType::Ed25519 => Ed25519::verify(&decoded.signing_pub_key, &digest, &decoded.signature),
        KeyType::Secp256k1 => K256::verify(&decoded.signing_pub_key, &digest, &decoded.signature),
    };

    result.map_err(|source| VerificationError::InvalidSignature {
        key_type: decoded.key_type,
        source,
    })
}
