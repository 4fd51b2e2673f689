//! Order signing for the marketplace exchange.
//!
//! Binds a local private-key signer to an EIP-712 domain and signs the
//! canonical order/bid digests. Signing is the only async path in the
//! crate (the underlying signer API is async); hashing and recovery stay
//! synchronous.

use alloy_primitives::{Address, B256};
use alloy_signer::Signer;
use alloy_signer_local::PrivateKeySigner;
use tracing::debug;

use super::domain::Eip712Domain;
use super::order_types::{BidOrder, Order, OrderBuilder, SignedBidOrder, SignedOrder};
use super::typed_data::{eip712_digest, TypedDocument};
use crate::error::{Error, Result};

/// Order signer for the marketplace exchange.
#[derive(Clone)]
pub struct OrderSigner {
    signer: PrivateKeySigner,
    domain: Eip712Domain,
}

impl OrderSigner {
    /// Create a signer bound to the BSC testnet exchange domain.
    pub fn new(signer: PrivateKeySigner) -> Self {
        Self {
            signer,
            domain: Eip712Domain::bsc_exchange(),
        }
    }

    /// Create a signer bound to a custom domain.
    pub fn with_domain(signer: PrivateKeySigner, domain: Eip712Domain) -> Self {
        Self { signer, domain }
    }

    /// The signing address.
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// The domain signatures are bound to.
    pub fn domain(&self) -> &Eip712Domain {
        &self.domain
    }

    /// An order builder pre-configured with this signer as the seller.
    pub fn order_builder(&self) -> OrderBuilder {
        OrderBuilder::new().seller(self.address())
    }

    /// Sign a sell order, returning it with its signature attached.
    pub async fn sign_order(&self, order: &Order) -> Result<SignedOrder> {
        let digest = eip712_digest(self.domain.separator(), order.struct_hash());
        let signature = self.sign_digest(digest).await?;
        Ok(SignedOrder {
            order: order.clone(),
            signature,
        })
    }

    /// Sign a bid, returning it with its signature attached.
    pub async fn sign_bid_order(&self, bid: &BidOrder) -> Result<SignedBidOrder> {
        let digest = eip712_digest(self.domain.separator(), bid.struct_hash());
        let signature = self.sign_digest(digest).await?;
        Ok(SignedBidOrder {
            bid: bid.clone(),
            signature,
        })
    }

    /// Sign a complete typed-data document.
    ///
    /// The document carries its own domain, which may differ from this
    /// signer's default.
    pub async fn sign_document(&self, document: &TypedDocument) -> Result<String> {
        self.sign_digest(document.signing_hash()).await
    }

    async fn sign_digest(&self, digest: B256) -> Result<String> {
        let signature = self
            .signer
            .sign_hash(&digest)
            .await
            .map_err(|err| Error::Signing {
                message: err.to_string(),
            })?;

        debug!(%digest, signer = %self.address(), "signed digest");
        Ok(format!("0x{}", hex::encode(signature.as_bytes())))
    }
}

impl std::fmt::Debug for OrderSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderSigner")
            .field("address", &format!("{}", self.address()))
            .field("domain", &self.domain.name)
            .finish()
    }
}
