use core::fmt;

/// The fields of a validation message, in the order they appear on the wire.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Flags,
    LedgerSequence,
    CloseTime,
    SigningTime,
    LoadFee,
    ReserveBase,
    ReserveIncrement,
    BaseFee,
    Cookie,
    ServerVersion,
    LedgerHash,
    ConsensusHash,
    ValidatedHash,
    SigningPubKey,
    Signature,
    Amendments,
}

impl Field {
    /// All fields in wire order.
    #[cfg(test)]
    pub const ALL: [Field; 16] = [
        Field::Flags,
        Field::LedgerSequence,
        Field::CloseTime,
        Field::SigningTime,
        Field::LoadFee,
        Field::ReserveBase,
        Field::ReserveIncrement,
        Field::BaseFee,
        Field::Cookie,
        Field::ServerVersion,
        Field::LedgerHash,
        Field::ConsensusHash,
        Field::ValidatedHash,
        Field::SigningPubKey,
        Field::Signature,
        Field::Amendments,
    ];

    /// The tag bytes announcing this field.
    ///
    /// The high nibble of the first byte is the type code and the low nibble the field code.
    /// A zero field nibble means the field code follows in the next byte, a zero type
    /// nibble means the type code follows.
    pub const fn tag(self) -> &'static [u8] {
        match self {
            Field::Flags => &[0x22],
            Field::LedgerSequence => &[0x26],
            Field::CloseTime => &[0x27],
            Field::SigningTime => &[0x29],
            Field::LoadFee => &[0x20, 0x18],
            Field::ReserveBase => &[0x20, 0x1F],
            Field::ReserveIncrement => &[0x20, 0x20],
            Field::BaseFee => &[0x35],
            Field::Cookie => &[0x3A],
            Field::ServerVersion => &[0x3B],
            Field::LedgerHash => &[0x51],
            Field::ConsensusHash => &[0x50, 0x17],
            Field::ValidatedHash => &[0x50, 0x19],
            Field::SigningPubKey => &[0x73],
            Field::Signature => &[0x76],
            Field::Amendments => &[0x03, 0x13],
        }
    }

    #[cfg(test)]
    pub const fn is_required(self) -> bool {
        matches!(
            self,
            Field::Flags
                | Field::LedgerSequence
                | Field::SigningTime
                | Field::LedgerHash
                | Field::SigningPubKey
                | Field::Signature
        )
    }

    pub const fn name(self) -> &'static str {
        match self {
            Field::Flags => "Flags",
            Field::LedgerSequence => "LedgerSequence",
            Field::CloseTime => "CloseTime",
            Field::SigningTime => "SigningTime",
            Field::LoadFee => "LoadFee",
            Field::ReserveBase => "ReserveBase",
            Field::ReserveIncrement => "ReserveIncrement",
            Field::BaseFee => "BaseFee",
            Field::Cookie => "Cookie",
            Field::ServerVersion => "ServerVersion",
            Field::LedgerHash => "LedgerHash",
            Field::ConsensusHash => "ConsensusHash",
            Field::ValidatedHash => "ValidatedHash",
            Field::SigningPubKey => "SigningPubKey",
            Field::Signature => "Signature",
            Field::Amendments => "Amendments",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
