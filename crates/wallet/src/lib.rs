//! Private-key custody for marketplace order signing.
//!
//! Loads a secp256k1 signing key from the environment or a hex string and
//! hands it to the signing layer as an `alloy` local signer. Key material
//! never appears in logs or debug output.

pub mod wallet;

pub use wallet::MarketplaceWallet;
