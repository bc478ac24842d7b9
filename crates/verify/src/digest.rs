use core::ops::Range;

use sha2::{Digest as _, Sha512};

use valstream_signing::{Digest, DIGEST_SIZE};

/// Hash prefix of validation messages (`"VAL\0"`).
pub const VALIDATION_PREFIX: [u8; 4] = *b"VAL\0";

/// Computes the digest a validation signature commits to.
///
/// This is the first half of `SHA-512(prefix || message)`, where `message` is the raw
/// message with the bytes in `signature_span` removed.
///
/// # Panics
/// If `signature_span` is not within `raw`.
pub fn signing_digest(raw: &[u8], signature_span: Range<usize>) -> Digest {
    let mut hasher = Sha512::new();
    hasher.update(VALIDATION_PREFIX);
    hasher.update(&raw[..signature_span.start]);
    hasher.update(&raw[signature_span.end..]);

    let full = hasher.finalize();

    let mut half = [0; DIGEST_SIZE];
    half.copy_from_slice(&full[..DIGEST_SIZE]);
    half
}
