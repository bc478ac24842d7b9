use core::ops::Range;

use crate::signer::{signing_digest, TestSigner};

/// Encodes a length prefix for vector fields.
pub fn encode_length_prefix(len: usize) -> Vec<u8> {
    match len {
        0..=192 => vec![len as u8],
        193..=12480 => {
            let rest = len - 193;
            vec![193 + (rest / 256) as u8, (rest % 256) as u8]
        }
        12481..=929984 => {
            let rest = len - 12481;
            vec![
                241 + (rest / 65536) as u8,
                ((rest / 256) % 256) as u8,
                (rest % 256) as u8,
            ]
        }
        _ => panic!("length {len} cannot be encoded"),
    }
}

/// A signed, encoded validation message.
#[derive(Clone, Debug)]
pub struct SignedMessage {
    pub bytes: Vec<u8>,
    pub signature: Vec<u8>,
    pub signature_span: Range<usize>,
}

impl SignedMessage {
    pub fn hex(&self) -> String {
        hex::encode_upper(&self.bytes)
    }
}

/// Builds validation messages field by field.
#[derive(Clone, Debug)]
pub struct ValidationBuilder {
    pub flags: u32,
    pub ledger_sequence: u32,
    pub close_time: Option<u32>,
    pub signing_time: u32,
    pub load_fee: Option<u32>,
    pub reserve_base: Option<u32>,
    pub reserve_increment: Option<u32>,
    pub base_fee: Option<u64>,
    pub cookie: Option<u64>,
    pub server_version: Option<u64>,
    pub ledger_hash: [u8; 32],
    pub consensus_hash: Option<[u8; 32]>,
    pub validated_hash: Option<[u8; 32]>,
    /// Raw `Amendments` payload, written behind its length prefix.
    pub amendments: Option<Vec<u8>>,
}

impl ValidationBuilder {
    pub fn new(ledger_sequence: u32) -> Self {
        Self {
            flags: 0x8000_0001,
            ledger_sequence,
            close_time: None,
            signing_time: 0x2C3D_4E5F,
            load_fee: None,
            reserve_base: None,
            reserve_increment: None,
            base_fee: None,
            cookie: None,
            server_version: None,
            ledger_hash: [0x11; 32],
            consensus_hash: None,
            validated_hash: None,
            amendments: None,
        }
    }

    /// A builder with every optional field set.
    pub fn full(ledger_sequence: u32) -> Self {
        Self {
            close_time: Some(0x2C3D_4E00),
            load_fee: Some(256),
            reserve_base: Some(10_000_000),
            reserve_increment: Some(2_000_000),
            base_fee: Some(10),
            cookie: Some(0xFEDC_BA98_7654_3210),
            server_version: Some(0x1826_0000_0000_0000),
            consensus_hash: Some([0x22; 32]),
            validated_hash: Some([0x33; 32]),
            ..Self::new(ledger_sequence)
        }
        .with_amendments(&[[0xA1; 32], [0xA2; 32]])
    }

    pub fn with_amendments(mut self, ids: &[[u8; 32]]) -> Self {
        self.amendments = Some(ids.concat());
        self
    }

    pub fn with_raw_amendments(mut self, payload: Vec<u8>) -> Self {
        self.amendments = Some(payload);
        self
    }

    /// Bytes preceding the `Signature` field.
    pub fn head(&self, signing_pub_key: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();

        u32_field(&mut out, &[0x22], Some(self.flags));
        u32_field(&mut out, &[0x26], Some(self.ledger_sequence));
        u32_field(&mut out, &[0x27], self.close_time);
        u32_field(&mut out, &[0x29], Some(self.signing_time));
        u32_field(&mut out, &[0x20, 0x18], self.load_fee);
        u32_field(&mut out, &[0x20, 0x1F], self.reserve_base);
        u32_field(&mut out, &[0x20, 0x20], self.reserve_increment);
        u64_field(&mut out, &[0x35], self.base_fee);
        u64_field(&mut out, &[0x3A], self.cookie);
        u64_field(&mut out, &[0x3B], self.server_version);
        hash_field(&mut out, &[0x51], Some(self.ledger_hash));
        hash_field(&mut out, &[0x50, 0x17], self.consensus_hash);
        hash_field(&mut out, &[0x50, 0x19], self.validated_hash);
        blob_field(&mut out, 0x73, signing_pub_key);

        out
    }

    /// Bytes following the `Signature` field.
    pub fn tail(&self) -> Vec<u8> {
        let mut out = Vec::new();

        if let Some(payload) = &self.amendments {
            out.extend_from_slice(&[0x03, 0x13]);
            out.extend_from_slice(&encode_length_prefix(payload.len()));
            out.extend_from_slice(payload);
        }

        out
    }

    /// Encodes the message around an arbitrary signature.
    pub fn encode(&self, signing_pub_key: &[u8], signature: &[u8]) -> SignedMessage {
        let head = self.head(signing_pub_key);
        let tail = self.tail();

        let mut bytes = head.clone();
        blob_field(&mut bytes, 0x76, signature);
        let signature_span = head.len()..bytes.len();
        bytes.extend_from_slice(&tail);

        SignedMessage {
            bytes,
            signature: signature.to_vec(),
            signature_span,
        }
    }

    /// Signs the message with `signer` and encodes it.
    pub fn sign(&self, signer: &TestSigner) -> SignedMessage {
        let public_key = signer.public_key();

        let mut unsigned = self.head(&public_key);
        unsigned.extend_from_slice(&self.tail());

        let signature = signer.sign_digest(&signing_digest(&unsigned));
        self.encode(&public_key, &signature)
    }
}

fn u32_field(out: &mut Vec<u8>, tag: &[u8], value: Option<u32>) {
    if let Some(value) = value {
        out.extend_from_slice(tag);
        out.extend_from_slice(&value.to_be_bytes());
    }
}

fn u64_field(out: &mut Vec<u8>, tag: &[u8], value: Option<u64>) {
    if let Some(value) = value {
        out.extend_from_slice(tag);
        out.extend_from_slice(&value.to_be_bytes());
    }
}

fn hash_field(out: &mut Vec<u8>, tag: &[u8], value: Option<[u8; 32]>) {
    if let Some(value) = value {
        out.extend_from_slice(tag);
        out.extend_from_slice(&value);
    }
}

fn blob_field(out: &mut Vec<u8>, tag: u8, value: &[u8]) {
    let len = u8::try_from(value.len()).expect("blob longer than 255 bytes");
    out.push(tag);
    out.push(len);
    out.extend_from_slice(value);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_prefix_boundaries() {
        assert_eq!(encode_length_prefix(192), vec![192]);
        assert_eq!(encode_length_prefix(193), vec![193, 0]);
        assert_eq!(encode_length_prefix(2016), vec![200, 31]);
        assert_eq!(encode_length_prefix(12480), vec![240, 255]);
        assert_eq!(encode_length_prefix(12481), vec![241, 0, 0]);
    }
}
