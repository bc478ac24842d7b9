use crate::reader::Reader;
use crate::{DecodeError, DecodedValidation, Field, Hash256, KeyType};

/// Size of a single amendment identifier.
pub const AMENDMENT_SIZE: usize = 32;

/// Decodes a validation message.
///
/// Fields are read in wire order with a single forward-only cursor. A missing or truncated
/// required field stops decoding; an optional field whose tag is not next is skipped.
/// Bytes following the last recognised field are left unread.
pub fn decode(bytes: &[u8]) -> Result<DecodedValidation, DecodeError> {
    let mut r = Reader::new(bytes);

    let flags = required(&mut r, Field::Flags, Reader::read_u32)?;
    let ledger_sequence = required(&mut r, Field::LedgerSequence, Reader::read_u32)?;
    let close_time = optional(&mut r, Field::CloseTime, Reader::read_u32)?;
    let signing_time = required(&mut r, Field::SigningTime, Reader::read_u32)?;
    let load_fee = optional(&mut r, Field::LoadFee, Reader::read_u32)?;
    let reserve_base = optional(&mut r, Field::ReserveBase, Reader::read_u32)?;
    let reserve_increment = optional(&mut r, Field::ReserveIncrement, Reader::read_u32)?;
    let base_fee = optional(&mut r, Field::BaseFee, Reader::read_u64)?;
    let cookie = optional(&mut r, Field::Cookie, Reader::read_u64)?;
    let server_version = optional(&mut r, Field::ServerVersion, Reader::read_u64)?;
    let ledger_hash = required(&mut r, Field::LedgerHash, read_hash)?;
    let consensus_hash = optional(&mut r, Field::ConsensusHash, read_hash)?;
    let validated_hash = optional(&mut r, Field::ValidatedHash, read_hash)?;
    let signing_pub_key = required(&mut r, Field::SigningPubKey, read_blob)?;

    let signature_start = r.position();
    let signature = required(&mut r, Field::Signature, read_blob)?;
    let signature_span = signature_start..r.position();

    let amendments = if take_tag(&mut r, Field::Amendments)? {
        Some(read_amendments(&mut r)?)
    } else {
        None
    };

    Ok(DecodedValidation {
        flags,
        ledger_sequence,
        close_time,
        signing_time,
        load_fee,
        reserve_base,
        reserve_increment,
        base_fee,
        cookie,
        server_version,
        ledger_hash,
        consensus_hash,
        validated_hash,
        key_type: KeyType::from_public_key(&signing_pub_key),
        signing_pub_key,
        signature,
        signature_span,
        amendments,
    })
}

fn required<'a, T>(
    r: &mut Reader<'a>,
    field: Field,
    read: impl FnOnce(&mut Reader<'a>) -> Option<T>,
) -> Result<T, DecodeError> {
    if !take_tag(r, field)? {
        let offset = r.position();

        return Err(if r.is_empty() {
            DecodeError::Truncated { field, offset }
        } else {
            DecodeError::MissingField { field, offset }
        });
    }

    payload(r, field, read)
}

fn optional<'a, T>(
    r: &mut Reader<'a>,
    field: Field,
    read: impl FnOnce(&mut Reader<'a>) -> Option<T>,
) -> Result<Option<T>, DecodeError> {
    if !take_tag(r, field)? {
        return Ok(None);
    }

    payload(r, field, read).map(Some)
}

fn payload<'a, T>(
    r: &mut Reader<'a>,
    field: Field,
    read: impl FnOnce(&mut Reader<'a>) -> Option<T>,
) -> Result<T, DecodeError> {
    read(&mut *r).ok_or_else(|| truncated(r, field))
}

/// Consumes the tag of `field` if it is next in the input.
///
/// Returns `Ok(false)` when another tag follows. Input that ends partway through the tag
/// is a truncation of `field`.
fn take_tag(r: &mut Reader<'_>, field: Field) -> Result<bool, DecodeError> {
    let tag = field.tag();

    if r.starts_with(tag) {
        r.read_slice(tag.len());
        return Ok(true);
    }

    let rest = r.rest();
    if !rest.is_empty() && tag.starts_with(rest) {
        return Err(truncated(r, field));
    }

    Ok(false)
}

fn truncated(r: &Reader<'_>, field: Field) -> DecodeError {
    DecodeError::Truncated {
        field,
        offset: r.position() + r.remaining(),
    }
}

fn read_hash(r: &mut Reader<'_>) -> Option<Hash256> {
    r.read_array().map(Hash256::new)
}

fn read_blob(r: &mut Reader<'_>) -> Option<Vec<u8>> {
    let mut lookahead = r.clone();
    let len = lookahead.read_u8()?;
    let blob = lookahead.read_slice(usize::from(len))?;
    *r = lookahead;
    Some(blob.to_vec())
}

/// Reads the variable-length prefix used by vector fields.
///
/// | first byte `b` | bytes consumed | length                                   |
/// |----------------|----------------|------------------------------------------|
/// | 0..=192        | 1              | `b`                                      |
/// | 193..=240      | 2              | `193 + (b - 193) * 256 + b2`             |
/// | 241..=254      | 3              | `12481 + (b - 241) * 65536 + b2 * 256 + b3` |
pub(crate) fn read_length_prefix(r: &mut Reader<'_>, field: Field) -> Result<usize, DecodeError> {
    let offset = r.position();
    let prefix = r.read_u8().ok_or_else(|| truncated(r, field))?;
    let b = usize::from(prefix);

    match prefix {
        0..=192 => Ok(b),
        193..=240 => {
            let b2 = usize::from(r.read_u8().ok_or_else(|| truncated(r, field))?);
            Ok(193 + (b - 193) * 256 + b2)
        }
        241..=254 => {
            let [b2, b3] = r.read_array::<2>().ok_or_else(|| truncated(r, field))?;
            Ok(12481 + (b - 241) * 65536 + usize::from(b2) * 256 + usize::from(b3))
        }
        _ => Err(DecodeError::InvalidLengthPrefix {
            field,
            prefix,
            offset,
        }),
    }
}

/// Reads the amendment identifiers following the `Amendments` tag.
///
/// The whole declared payload is consumed. A trailing chunk shorter than
/// [`AMENDMENT_SIZE`] does not form an identifier and is discarded.
fn read_amendments(r: &mut Reader<'_>) -> Result<Vec<Hash256>, DecodeError> {
    let len = read_length_prefix(r, Field::Amendments)?;

    let payload = r
        .read_slice(len)
        .ok_or_else(|| truncated(r, Field::Amendments))?;

    let amendments = payload
        .chunks_exact(AMENDMENT_SIZE)
        .map(|chunk| {
            let mut id = [0; AMENDMENT_SIZE];
            id.copy_from_slice(chunk);
            Hash256::new(id)
        })
        .collect();

    Ok(amendments)
}
