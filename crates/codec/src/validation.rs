use core::fmt;
use core::ops::Range;

use serde::{Serialize, Serializer};

use valstream_signing_ed25519::KEY_MARKER;

/// A 32-byte digest, rendered as uppercase hexadecimal.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hash256([u8; 32]);

impl Hash256 {
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn to_hex(&self) -> String {
        hex::encode_upper(self.0)
    }
}

impl From<[u8; 32]> for Hash256 {
    fn from(bytes: [u8; 32]) -> Self {
        Self::new(bytes)
    }
}

impl fmt::Display for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash256({self})")
    }
}

impl Serialize for Hash256 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

/// The signature scheme a signing public key belongs to.
///
/// Ed25519 keys carry a leading `0xED` marker byte in front of the 32-byte key;
/// every other key is a compressed secp256k1 point.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyType {
    Ed25519,
    Secp256k1,
}

impl KeyType {
    pub fn from_public_key(public_key: &[u8]) -> Self {
        match public_key.first() {
            Some(&KEY_MARKER) => Self::Ed25519,
            _ => Self::Secp256k1,
        }
    }
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ed25519 => f.write_str("ed25519"),
            Self::Secp256k1 => f.write_str("secp256k1"),
        }
    }
}

/// A decoded validation message.
///
/// Optional fields are `None` when their tag was absent from the message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DecodedValidation {
    pub flags: u32,
    pub ledger_sequence: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close_time: Option<u32>,
    pub signing_time: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_fee: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reserve_base: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reserve_increment: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_fee: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cookie: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server_version: Option<u64>,
    pub ledger_hash: Hash256,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consensus_hash: Option<Hash256>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validated_hash: Option<Hash256>,
    #[serde(serialize_with = "upper_hex")]
    pub signing_pub_key: Vec<u8>,
    pub key_type: KeyType,
    #[serde(serialize_with = "upper_hex")]
    pub signature: Vec<u8>,
    /// Byte range covering the tag, length prefix and payload of the `Signature` field.
    #[serde(skip)]
    pub signature_span: Range<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amendments: Option<Vec<Hash256>>,
}

impl DecodedValidation {
    pub fn signing_pub_key_hex(&self) -> String {
        hex::encode_upper(&self.signing_pub_key)
    }
}

fn upper_hex<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&hex::encode_upper(bytes))
}
