//! Submission boundary to the on-chain exchange.
//!
//! The codec side of this crate stays pure; relaying a signed order to the
//! exchange contract (transport, gas, retries) belongs to whatever service
//! implements this interface.

use alloy_primitives::B256;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::signing::{SignedBidOrder, SignedOrder};

/// Receipt returned once a submission lands on chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitReceipt {
    /// Hash of the transaction that carried the submission.
    pub transaction_hash: B256,
    /// Block the transaction was included in, if already known.
    pub block_number: Option<u64>,
}

/// Interface to a service that relays signed orders to the exchange.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExchangeGateway: Send + Sync {
    /// Submit a signed sell order for on-chain order creation.
    async fn submit_order(&self, order: &SignedOrder) -> Result<SubmitReceipt>;

    /// Submit a signed bid to complete an auction.
    async fn submit_bid(&self, bid: &SignedBidOrder) -> Result<SubmitReceipt>;
}
