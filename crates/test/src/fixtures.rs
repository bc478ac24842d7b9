//! Signed validation messages encoded outside this workspace.
//!
//! The messages were produced with an independent encoder that derives each tag from the
//! field's type and field codes. They were signed over the first half of
//! `SHA-512("VAL\0" || message without Signature)`. ECDSA signatures cover that digest as a
//! prehash and are low-S DER. The Ed25519 key is the first RFC 8032 test key.
//!
//! Every optional field is present. `Amendments` follows the signature, so verifying these
//! messages requires excising the signature rather than truncating at it.

/// A validation message together with the node key that announced it.
#[derive(Copy, Clone, Debug)]
pub struct Fixture {
    pub node_key: &'static str,
    pub ledger_sequence: u32,
    pub ledger_hash: &'static str,
    pub data: &'static str,
}

impl Fixture {
    pub fn bytes(&self) -> Vec<u8> {
        hex::decode(self.data).expect("fixture data is valid hex")
    }
}

/// A validation signed with a secp256k1 key.
pub const SECP256K1_VALIDATION: Fixture = Fixture {
    node_key: "n9MmVGWaBNPY99XHA6KayC8eRkJXDxUCodKwqzdtBxzS7HRzpx5s",
    ledger_sequence: 91_234_567,
    ledger_hash: "1F6DA22E9E8A2F6D24DAAFCCF0604B3CD858056FD988E310749339F30388D8FC",
    data: concat!(
        "2280000001260570210727307659002930765902201800000100201F000F4240",
        "202000030D4035000000000000000A3A5A1E0D3C8B29F4173B18260100000000",
        "00511F6DA22E9E8A2F6D24DAAFCCF0604B3CD858056FD988E310749339F30388",
        "D8FC5017DC9DB7CD61B15D193C828A2D42A24ACB61D9B8C8629CBAA4749FB26C",
        "8D3FA3255019F2E8A491C4639377C2F125A322377587155DE5F374217815FECE",
        "F5CE81D7F8C5732103A8952CF499E918A1465322E9B94824BC88105AC2D08052",
        "DF843ECBFDD479454C7646304402207F31AA761421BE4FDF4C34E6D4C3AF7A43",
        "F346A61306639FA379CCE9E757B80F0220769DA3E7A6B6829C6CF8D7A3F06F2B",
        "30BC70CD9CE572B4529E9E4636DAA2BA76031360E41A066FEE860DC7792D263D",
        "8A9A8B7193F145DF1DE1B6E1F09012170245274A4D683FEA9F279FA691B95FAC",
        "0EA0DDB37CB108EE5047150134AC6C81DC43578430C9F2561636C43228959E47",
        "35C38DC6330360007EC60BAD9989485CF91D1003",
    ),
};

/// A validation signed with an Ed25519 key.
pub const ED25519_VALIDATION: Fixture = Fixture {
    node_key: "nHUzHEkDS2p3BzdD2eUN8sfcDBzF9JzYp9Nq2HtkhXvZroyJU1uN",
    ledger_sequence: 91_234_568,
    ledger_hash: "C25F8DD48F99C99076F8868F2B5299C2F391EBFFB522848F241FFD6769988C9A",
    data: concat!(
        "2280000001260570210827307659002930765902201800000100201F000F4240",
        "202000030D4035000000000000000A3A5A1E0D3C8B29F4173B18260100000000",
        "0051C25F8DD48F99C99076F8868F2B5299C2F391EBFFB522848F241FFD676998",
        "8C9A5017ADD12279AFC9EDBC0F2175C912C2F24BA55270C3BA2FD1038926BC97",
        "C8AABC4250194187FEE2B800A29D597326DE9702B03CAEC4BF744191203B817A",
        "5D65916B00347321EDD75A980182B10AB7D54BFED3C964073A0EE172F3DAA623",
        "25AF021A68F707511A76407F3B7514F16ECCE2E9587C4651D80ED6BB29435551",
        "0C816C097852036D2105A13BDB98724A32183D71269850FD12F5C0A3DF0C01E4",
        "7EE241B555C9F62E3D3104031360E41A066FEE860DC7792D263D8A9A8B7193F1",
        "45DF1DE1B6E1F09012170245274A4D683FEA9F279FA691B95FAC0EA0DDB37CB1",
        "08EE5047150134AC6C81DC43578430C9F2561636C43228959E4735C38DC63303",
        "60007EC60BAD9989485CF91D1003",
    ),
};
