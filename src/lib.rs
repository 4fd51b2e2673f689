//! Ekta Marketplace: off-chain order signing and signer recovery.
//!
//! This is the root crate that provides benchmark and integration-test
//! access to the internal modules. For actual functionality, use the
//! individual crates directly:
//!
//! - `marketplace-core`: EIP-712 typed-data documents, order signing,
//!   signer recovery, sale classes, configuration
//! - `wallet`: private-key custody

// Re-export for benchmarks
pub use marketplace_core as core;
pub use wallet;
