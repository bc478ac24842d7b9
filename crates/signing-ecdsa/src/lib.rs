//! ECDSA over secp256k1.
//!
//! Public keys are compressed SEC1 points and signatures are DER-encoded. The signing
//! digest is verified as a prehash: it is not hashed again.

pub use k256::ecdsa::{Signature, VerifyingKey};
use signature::hazmat::PrehashVerifier;

use valstream_signing::{Digest, SignatureError, SigningScheme};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct K256;

impl SigningScheme for K256 {
    const NAME: &'static str = "secp256k1";

    type PublicKey = VerifyingKey;
    type Signature = Signature;

    fn decode_public_key(bytes: &[u8]) -> Result<VerifyingKey, SignatureError> {
        VerifyingKey::from_sec1_bytes(bytes).map_err(|e| SignatureError::InvalidPublicKey {
            scheme: Self::NAME,
            reason: e.to_string(),
        })
    }

    /// Parses a DER signature. High-S signatures are normalised to their low-S form.
    fn decode_signature(bytes: &[u8]) -> Result<Signature, SignatureError> {
        let signature = Signature::from_der(bytes).map_err(|e| SignatureError::InvalidEncoding {
            scheme: Self::NAME,
            reason: e.to_string(),
        })?;

        Ok(signature.normalize_s().unwrap_or(signature))
    }

    fn verify_digest(
        public_key: &VerifyingKey,
        digest: &Digest,
        signature: &Signature,
    ) -> Result<(), SignatureError> {
        public_key
            .verify_prehash(digest, signature)
            .map_err(|_| SignatureError::Mismatch { scheme: Self::NAME })
    }
}
