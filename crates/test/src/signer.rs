use k256::ecdsa::signature::hazmat::PrehashSigner;
use sha2::{Digest, Sha512};

/// Version byte of base58-encoded node public keys.
pub const NODE_PUBLIC_VERSION: u8 = 28;

const VALIDATION_PREFIX: [u8; 4] = *b"VAL\0";

/// First half of `SHA-512("VAL\0" || unsigned)`.
pub fn signing_digest(unsigned: &[u8]) -> [u8; 32] {
    let mut hasher = Sha512::new();
    hasher.update(VALIDATION_PREFIX);
    hasher.update(unsigned);

    let full = hasher.finalize();
    let mut half = [0; 32];
    half.copy_from_slice(&full[..32]);
    half
}

/// A deterministic validator key.
#[derive(Clone)]
pub enum TestSigner {
    Ed25519(ed25519_consensus::SigningKey),
    Secp256k1(k256::ecdsa::SigningKey),
}

impl TestSigner {
    pub fn ed25519(seed: u8) -> Self {
        Self::Ed25519(ed25519_consensus::SigningKey::from([seed; 32]))
    }

    /// `seed` must be non-zero.
    pub fn secp256k1(seed: u8) -> Self {
        let key = k256::ecdsa::SigningKey::from_slice(&[seed; 32]).expect("valid scalar");
        Self::Secp256k1(key)
    }

    /// The signing public key as it appears in the `SigningPubKey` field.
    pub fn public_key(&self) -> Vec<u8> {
        match self {
            Self::Ed25519(key) => {
                let mut bytes = vec![0xED];
                bytes.extend_from_slice(&key.verification_key().to_bytes());
                bytes
            }
            Self::Secp256k1(key) => key
                .verifying_key()
                .to_encoded_point(true)
                .as_bytes()
                .to_vec(),
        }
    }

    pub fn public_key_hex(&self) -> String {
        hex::encode_upper(self.public_key())
    }

    /// The base58 node identifier announced on the validations stream.
    pub fn node_key(&self) -> String {
        bs58::encode(self.public_key())
            .with_alphabet(bs58::Alphabet::RIPPLE)
            .with_check_version(NODE_PUBLIC_VERSION)
            .into_string()
    }

    pub fn sign_digest(&self, digest: &[u8; 32]) -> Vec<u8> {
        match self {
            Self::Ed25519(key) => key.sign(digest).to_bytes().to_vec(),
            Self::Secp256k1(key) => {
                let signature: k256::ecdsa::Signature =
                    key.sign_prehash(digest).expect("prehash signing");
                signature.to_der().as_bytes().to_vec()
            }
        }
    }
}
