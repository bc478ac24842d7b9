use crate::Field;

/// Why a validation message could not be decoded.
///
/// Every variant names the field the decoder was reading when it stopped.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("{field} is required but was not found at offset {offset}")]
    MissingField { field: Field, offset: usize },

    #[error("{field} is truncated, input ended at offset {offset}")]
    Truncated { field: Field, offset: usize },

    #[error("{field} has an invalid length prefix {prefix:#04x} at offset {offset}")]
    InvalidLengthPrefix {
        field: Field,
        prefix: u8,
        offset: usize,
    },
}
