//! EIP-712 signing for marketplace orders.
//!
//! Everything needed to take an order from construction to a verifiable
//! signature and back:
//!
//! ```text
//! OrderBuilder ──► Order ──► TypedDocument ──► digest ──► OrderSigner
//!                    │                           │
//!                    └── BidOrder::from_order    └── recover_signer ──► Address
//! ```
//!
//! # Example
//!
//! ```ignore
//! use marketplace_core::signing::{OrderSigner, SaleKind, recover_order_signer};
//! use alloy_signer_local::PrivateKeySigner;
//! use alloy_primitives::U256;
//!
//! let signer = OrderSigner::new(PrivateKeySigner::from_str("0x...")?);
//!
//! let order = signer
//!     .order_builder()
//!     .sale_kind(SaleKind::Fixed)
//!     .token_address("0xAC62...".parse()?)
//!     .token_id(U256::from(8))
//!     .amount(U256::from(100_000_000_000_000u64))
//!     .build()
//!     .unwrap();
//!
//! let signed = signer.sign_order(&order).await?;
//! let recovered = recover_order_signer(&order, signer.domain(), &signed.signature)?;
//! assert_eq!(recovered, signer.address());
//! ```

pub mod classes;
pub mod domain;
pub mod order_types;
pub mod recovery;
pub mod signer;
pub mod typed_data;

pub use classes::{
    class_from_hex, derive_class, OrderClass, SaleKind, AUCTION_SALE_LABEL,
    CANCELLED_ORDER_LABEL, COMPLETED_ORDER_LABEL, FIXED_SALE_LABEL, NEW_ORDER_LABEL,
};

pub use domain::{
    exchange_address, Eip712Domain, BSC_TESTNET_CHAIN_ID, EXCHANGE_ADDRESS, ORDER_DOMAIN_NAME,
    ORDER_DOMAIN_VERSION,
};

pub use order_types::{
    BidOrder, Order, OrderBuilder, SignedBidOrder, SignedOrder, BID_ORDER_PRIMARY_TYPE,
    ORDER_PRIMARY_TYPE,
};

pub use recovery::{
    recover_bid_signer, recover_from_digest, recover_order_signer, recover_signer,
    SIGNATURE_LENGTH,
};

pub use signer::OrderSigner;

pub use typed_data::{eip712_digest, DocumentTypes, FieldDef, TypedDocument, TypedMessage};
