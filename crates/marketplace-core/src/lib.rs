//! Marketplace Core Library
//!
//! EIP-712 typed-data documents, order signing, and signer recovery for the
//! Ekta NFT exchange, plus the sale/status class discriminants its contract
//! consumes.

pub mod config;
pub mod error;
pub mod gateway;
pub mod signing;
pub mod u256_decimal;

pub use error::{Error, Result};
