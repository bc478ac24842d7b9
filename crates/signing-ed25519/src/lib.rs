use valstream_signing::{Digest, SignatureError, SigningScheme};

pub use ed25519_consensus::{Signature, VerificationKey as PublicKey};

/// Marker byte in front of Ed25519 keys in the `SigningPubKey` field.
pub const KEY_MARKER: u8 = 0xED;

/// Size of a marked Ed25519 public key.
pub const MARKED_KEY_SIZE: usize = 33;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Ed25519;

impl SigningScheme for Ed25519 {
    const NAME: &'static str = "ed25519";

    type PublicKey = PublicKey;
    type Signature = Signature;

    fn decode_public_key(bytes: &[u8]) -> Result<PublicKey, SignatureError> {
        let invalid = |reason: String| SignatureError::InvalidPublicKey {
            scheme: Self::NAME,
            reason,
        };

        let key = match bytes {
            [KEY_MARKER, key @ ..] if bytes.len() == MARKED_KEY_SIZE => key,
            _ => {
                return Err(invalid(format!(
                    "expected {MARKED_KEY_SIZE} bytes starting with {KEY_MARKER:#04x}"
                )))
            }
        };

        PublicKey::try_from(key).map_err(|e| invalid(e.to_string()))
    }

    fn decode_signature(bytes: &[u8]) -> Result<Signature, SignatureError> {
        Signature::try_from(bytes).map_err(|e| SignatureError::InvalidEncoding {
            scheme: Self::NAME,
            reason: e.to_string(),
        })
    }

    fn verify_digest(
        public_key: &PublicKey,
        digest: &Digest,
        signature: &Signature,
    ) -> Result<(), SignatureError> {
        public_key
            .verify(signature, digest)
            .map_err(|_| SignatureError::Mismatch { scheme: Self::NAME })
    }
}
