//! Decoder for the canonical binary encoding of ledger validation messages.
//!
//! A validation message is a fixed sequence of tagged fields. Each field is announced by a
//! one- or two-byte tag and followed by either a fixed-width payload or a length-prefixed
//! one. Optional fields are simply absent when their tag does not appear.
//!
//! ```text
//! +------+---------+----------+------+-----+-----------+---------------+-----------+------------+
//! | 0x22 | Flags   | 0x26     | Seq  | ... | 0x73 len  | SigningPubKey | 0x76 len  | Signature  | ...
//! +------+---------+----------+------+-----+-----------+---------------+-----------+------------+
//! ```
//!
//! Decoding never reads past the end of the input and fails with a [`DecodeError`]
//! naming the offending field.

mod decode;
mod error;
mod field;
mod reader;
mod validation;

pub use decode::{decode, AMENDMENT_SIZE};
pub use error::DecodeError;
pub use field::Field;
pub use reader::Reader;
pub use validation::{DecodedValidation, Hash256, KeyType};
