//! Marketplace wallet management for order signing.

use alloy_primitives::Address;
use alloy_signer_local::PrivateKeySigner;
use anyhow::{Context, Result};
use std::str::FromStr;

/// A wallet with private-key access for signing orders and bids.
///
/// The wallet can be loaded from an environment variable or directly from
/// a hex-encoded private key.
#[derive(Clone)]
pub struct MarketplaceWallet {
    signer: PrivateKeySigner,
    address: Address,
}

impl MarketplaceWallet {
    /// Load the wallet from the `WALLET_PRIVATE_KEY` environment variable.
    ///
    /// The private key should be a 64-character hex string, optionally
    /// prefixed with "0x". A `.env` file is honored if present.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment variable is not set or the
    /// private key format is invalid.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let private_key = std::env::var("WALLET_PRIVATE_KEY")
            .context("WALLET_PRIVATE_KEY environment variable not set")?;

        Self::from_private_key(&private_key)
    }

    /// Create a wallet from a hex-encoded private key.
    ///
    /// # Errors
    ///
    /// Returns an error if the private key format is invalid.
    pub fn from_private_key(key: &str) -> Result<Self> {
        let key_clean = key.trim().trim_start_matches("0x");

        let signer = PrivateKeySigner::from_str(key_clean)
            .context("Invalid private key format - expected 64 hex characters")?;

        let address = signer.address();

        Ok(Self { signer, address })
    }

    /// The wallet's address.
    pub fn address(&self) -> Address {
        self.address
    }

    /// The wallet address as a checksummed hex string.
    pub fn address_string(&self) -> String {
        format!("{}", self.address)
    }

    /// A reference to the underlying signer for EIP-712 signing.
    pub fn signer(&self) -> &PrivateKeySigner {
        &self.signer
    }

    /// Consume the wallet and return the signer.
    pub fn into_signer(self) -> PrivateKeySigner {
        self.signer
    }
}

impl std::fmt::Debug for MarketplaceWallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never expose the private key in debug output
        f.debug_struct("MarketplaceWallet")
            .field("address", &self.address_string())
            .finish()
    }
}
