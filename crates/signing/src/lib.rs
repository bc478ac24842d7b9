//! Signature scheme abstraction.
//!
//! Validation messages are signed either with Ed25519 or with ECDSA over secp256k1.
//! Both schemes verify a signature over the same 32-byte signing digest; each
//! implementation of [`SigningScheme`] knows how to parse its own key and signature
//! encodings.

use core::fmt::Debug;

/// Size of the digest a validation signature commits to.
pub const DIGEST_SIZE: usize = 32;

/// A signing digest.
pub type Digest = [u8; DIGEST_SIZE];

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SignatureError {
    #[error("invalid {scheme} public key: {reason}")]
    InvalidPublicKey { scheme: &'static str, reason: String },

    #[error("invalid {scheme} signature encoding: {reason}")]
    InvalidEncoding { scheme: &'static str, reason: String },

    #[error("{scheme} signature does not match")]
    Mismatch { scheme: &'static str },
}

/// A digital signature scheme used by validators.
pub trait SigningScheme {
    /// Human-readable name, used in error messages.
    const NAME: &'static str;

    type PublicKey: Clone + Debug;
    type Signature: Clone + Debug;

    /// Parses a public key as carried in the `SigningPubKey` field.
    fn decode_public_key(bytes: &[u8]) -> Result<Self::PublicKey, SignatureError>;

    /// Parses a signature as carried in the `Signature` field.
    fn decode_signature(bytes: &[u8]) -> Result<Self::Signature, SignatureError>;

    /// Checks `signature` over `digest`.
    fn verify_digest(
        public_key: &Self::PublicKey,
        digest: &Digest,
        signature: &Self::Signature,
    ) -> Result<(), SignatureError>;

    /// Parses the key and signature, then checks the signature over `digest`.
    fn verify(public_key: &[u8], digest: &Digest, signature: &[u8]) -> Result<(), SignatureError> {
        let public_key = Self::decode_public_key(public_key)?;
        let signature = Self::decode_signature(signature)?;

        Self::verify_digest(&public_key, digest, &signature)
    }
}
