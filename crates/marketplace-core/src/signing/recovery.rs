//! Signer recovery from typed-data signatures.
//!
//! Pure functions: every input arrives as an explicit parameter and the
//! result is the recovered address. Recovery never judges *who* signed —
//! a structurally valid signature over any digest always yields some
//! address, and comparing it against an expected signer is the caller's
//! responsibility.

use alloy_primitives::{Address, Signature, B256, U256};
use tracing::debug;

use super::domain::Eip712Domain;
use super::order_types::{BidOrder, Order};
use super::typed_data::{eip712_digest, TypedDocument};
use crate::error::{Error, Result};

/// Length of an `r || s || v` signature in bytes.
pub const SIGNATURE_LENGTH: usize = 65;

/// Recover the signing address of a typed-data document.
pub fn recover_signer(document: &TypedDocument, signature: &str) -> Result<Address> {
    recover_from_digest(document.signing_hash(), signature)
}

/// Recover the signing address of an order against a domain.
pub fn recover_order_signer(
    order: &Order,
    domain: &Eip712Domain,
    signature: &str,
) -> Result<Address> {
    recover_from_digest(eip712_digest(domain.separator(), order.struct_hash()), signature)
}

/// Recover the signing address of a bid against a domain.
pub fn recover_bid_signer(
    bid: &BidOrder,
    domain: &Eip712Domain,
    signature: &str,
) -> Result<Address> {
    recover_from_digest(eip712_digest(domain.separator(), bid.struct_hash()), signature)
}

/// Recover the signing address from a precomputed EIP-712 digest.
pub fn recover_from_digest(digest: B256, signature: &str) -> Result<Address> {
    let signature = parse_signature(signature)?;

    let recovered = signature
        .recover_address_from_prehash(&digest)
        .map_err(|err| Error::RecoveryFailure {
            message: err.to_string(),
        })?;

    debug!(%digest, signer = %recovered, "recovered signer");
    Ok(recovered)
}

/// Parse a 65-byte `r || s || v` hex signature.
///
/// `v` is normalized: 27/28 map to parity 0/1, raw 0/1 pass through, and
/// anything else is a [`Error::RecoveryFailure`]. Wrong length or non-hex
/// input is a [`Error::InvalidSignatureFormat`].
fn parse_signature(signature: &str) -> Result<Signature> {
    let stripped = signature.strip_prefix("0x").unwrap_or(signature);
    let bytes = hex::decode(stripped).map_err(|err| Error::InvalidSignatureFormat {
        message: format!("signature is not valid hex: {err}"),
    })?;
    if bytes.len() != SIGNATURE_LENGTH {
        return Err(Error::InvalidSignatureFormat {
            message: format!(
                "expected a {SIGNATURE_LENGTH}-byte r||s||v signature, got {} bytes",
                bytes.len()
            ),
        });
    }

    let r = U256::from_be_slice(&bytes[..32]);
    let s = U256::from_be_slice(&bytes[32..64]);
    let parity = match bytes[64] {
        0 | 27 => false,
        1 | 28 => true,
        other => {
            return Err(Error::RecoveryFailure {
                message: format!("recovery id {other} is outside the 0/1/27/28 range"),
            })
        }
    };

    Ok(Signature::new(r, s, parity))
}
