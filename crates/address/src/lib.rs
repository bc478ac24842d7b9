//! Node public key identifiers.
//!
//! Validators are announced on the stream by a base58check string (Ripple alphabet)
//! wrapping a one-byte version and the 33-byte signing public key.

use core::fmt;
use core::str::FromStr;

/// Version byte of node public keys.
pub const NODE_PUBLIC_VERSION: u8 = 28;

/// Size of a node public key.
pub const PUBLIC_KEY_SIZE: usize = 33;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
    #[error("invalid base58 node key: {0}")]
    Base58(#[from] bs58::decode::Error),

    #[error("node key payload has {0} bytes, expected {PUBLIC_KEY_SIZE}")]
    InvalidLength(usize),
}

/// Decodes node identifiers into raw public key bytes.
pub trait AddressCodec {
    fn decode_node_public(&self, identifier: &str) -> Result<Vec<u8>, AddressError>;
}

/// The base58check codec used by the network.
#[derive(Copy, Clone, Debug, Default)]
pub struct Base58Codec;

impl AddressCodec for Base58Codec {
    fn decode_node_public(&self, identifier: &str) -> Result<Vec<u8>, AddressError> {
        NodePublicKey::from_str(identifier).map(|key| key.as_bytes().to_vec())
    }
}

/// A validator's signing public key.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct NodePublicKey([u8; PUBLIC_KEY_SIZE]);

impl NodePublicKey {
    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_SIZE] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode_upper(self.0)
    }

    pub fn to_base58(&self) -> String {
        bs58::encode(self.0)
            .with_alphabet(bs58::Alphabet::RIPPLE)
            .with_check_version(NODE_PUBLIC_VERSION)
            .into_string()
    }
}

impl FromStr for NodePublicKey {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let decoded = bs58::decode(s)
            .with_alphabet(bs58::Alphabet::RIPPLE)
            .with_check(Some(NODE_PUBLIC_VERSION))
            .into_vec()?;

        // The decoded payload still carries the version byte.
        let key = decoded.get(1..).unwrap_or_default();

        let key: [u8; PUBLIC_KEY_SIZE] = key
            .try_into()
            .map_err(|_| AddressError::InvalidLength(key.len()))?;

        Ok(Self(key))
    }
}

impl fmt::Display for NodePublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base58())
    }
}

impl fmt::Debug for NodePublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodePublicKey({})", self.to_hex())
    }
}
