//! Sale and order-status class discriminants.
//!
//! The exchange contract tags orders with 4-byte classes (fixed sale,
//! auction sale, new/cancelled/completed status). A class is the first four
//! bytes of keccak256 over the label's *leading hex pairs*: complete pairs
//! of hex digits are decoded from the front of the label until the first
//! non-hex character, and a trailing lone digit is dropped. Labels with no
//! leading hex pair therefore hash the empty input. The deployed contract
//! expects exactly these values, so the decoding must not be changed to
//! plain ASCII hashing.

use alloy_primitives::FixedBytes;
use std::fmt;

use crate::error::{Error, Result};

/// Label for fixed-price sales.
pub const FIXED_SALE_LABEL: &str = "FIXED";

/// Label for auction sales.
pub const AUCTION_SALE_LABEL: &str = "AUCTION";

/// Label for freshly created orders.
pub const NEW_ORDER_LABEL: &str = "NEW";

/// Label for cancelled orders.
pub const CANCELLED_ORDER_LABEL: &str = "CANCELLED";

/// Label for completed orders.
pub const COMPLETED_ORDER_LABEL: &str = "COMPLETED";

/// Derive the 4-byte class for a label.
pub fn derive_class(label: &str) -> FixedBytes<4> {
    let bytes = hex_prefix_bytes(label);
    let digest = alloy_primitives::keccak256(&bytes);
    FixedBytes::<4>::from_slice(&digest[..4])
}

/// Decode the longest run of complete hex digit pairs at the front of the
/// label, stopping at the first non-hex character.
fn hex_prefix_bytes(label: &str) -> Vec<u8> {
    let digits = label.as_bytes();
    let mut out = Vec::with_capacity(digits.len() / 2);
    for pair in digits.chunks_exact(2) {
        match (
            (pair[0] as char).to_digit(16),
            (pair[1] as char).to_digit(16),
        ) {
            (Some(hi), Some(lo)) => out.push((hi * 16 + lo) as u8),
            _ => break,
        }
    }
    out
}

/// Parse a class from its 0x-prefixed hex form, e.g. `"0xc5d24601"`.
pub fn class_from_hex(value: &str) -> Result<FixedBytes<4>> {
    let digits = value
        .strip_prefix("0x")
        .ok_or_else(|| Error::SchemaMismatch {
            message: format!("bytes4 value {value:?} is missing the 0x prefix"),
        })?;
    let bytes = hex::decode(digits).map_err(|err| Error::SchemaMismatch {
        message: format!("bytes4 value {value:?} is not valid hex: {err}"),
    })?;
    if bytes.len() != 4 {
        return Err(Error::SchemaMismatch {
            message: format!(
                "bytes4 value {value:?} must be exactly 4 bytes, got {}",
                bytes.len()
            ),
        });
    }
    Ok(FixedBytes::<4>::from_slice(&bytes))
}

/// Sale mechanics selected by an order's `saleType` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SaleKind {
    #[default]
    Fixed,
    Auction,
}

impl SaleKind {
    /// The label the class is derived from.
    pub fn label(&self) -> &'static str {
        match self {
            SaleKind::Fixed => FIXED_SALE_LABEL,
            SaleKind::Auction => AUCTION_SALE_LABEL,
        }
    }

    /// The 4-byte class written into the order's `saleType` field.
    pub fn class(&self) -> FixedBytes<4> {
        derive_class(self.label())
    }
}

impl fmt::Display for SaleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lifecycle classes the exchange contract records per order hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderClass {
    New,
    Cancelled,
    Completed,
}

impl OrderClass {
    /// The label the class is derived from.
    pub fn label(&self) -> &'static str {
        match self {
            OrderClass::New => NEW_ORDER_LABEL,
            OrderClass::Cancelled => CANCELLED_ORDER_LABEL,
            OrderClass::Completed => COMPLETED_ORDER_LABEL,
        }
    }

    /// The 4-byte status class.
    pub fn class(&self) -> FixedBytes<4> {
        derive_class(self.label())
    }
}

impl fmt::Display for OrderClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::fixed_bytes;

    #[test]
    fn fixed_sale_class_matches_contract_constant() {
        // The value the deployed exchange stores for fixed sales.
        assert_eq!(derive_class("FIXED"), fixed_bytes!("c5d24601"));
        assert_eq!(SaleKind::Fixed.class(), fixed_bytes!("c5d24601"));
    }

    #[test]
    fn cancelled_class_hashes_leading_ca_pair() {
        // "CANCELLED" decodes to the single byte 0xca before hashing.
        assert_eq!(derive_class("CANCELLED"), fixed_bytes!("e69f0302"));
        assert_eq!(OrderClass::Cancelled.class(), fixed_bytes!("e69f0302"));
    }

    #[test]
    fn labels_without_leading_hex_pair_share_the_empty_class() {
        // AUCTION, NEW, and COMPLETED all decode to zero bytes.
        let empty = derive_class("");
        assert_eq!(derive_class("AUCTION"), empty);
        assert_eq!(derive_class("NEW"), empty);
        assert_eq!(derive_class("COMPLETED"), empty);
        assert_eq!(empty, fixed_bytes!("c5d24601"));
    }

    #[test]
    fn hex_prefix_decoding_is_lenient() {
        assert_eq!(hex_prefix_bytes("CANCELLED"), vec![0xca]);
        assert_eq!(hex_prefix_bytes("FIXED"), Vec::<u8>::new());
        // Decoding stops at the first invalid character.
        assert_eq!(hex_prefix_bytes("a1g2b3"), vec![0xa1]);
        // A trailing lone digit is dropped.
        assert_eq!(hex_prefix_bytes("abc"), vec![0xab]);
        assert_eq!(hex_prefix_bytes("AbCd"), vec![0xab, 0xcd]);
    }

    #[test]
    fn class_from_hex_round_trips() {
        let class = class_from_hex("0xc5d24601").unwrap();
        assert_eq!(class, SaleKind::Fixed.class());
    }

    #[test]
    fn class_from_hex_rejects_bad_input() {
        assert!(class_from_hex("c5d24601").is_err()); // no prefix
        assert!(class_from_hex("0xc5d246").is_err()); // 3 bytes
        assert!(class_from_hex("0xc5d2460102").is_err()); // 5 bytes
        assert!(class_from_hex("0xzzzz").is_err()); // not hex
    }

    #[test]
    fn labels_render_via_display() {
        assert_eq!(format!("{}", SaleKind::Auction), "AUCTION");
        assert_eq!(format!("{}", OrderClass::Completed), "COMPLETED");
    }
}
