//! Configuration for marketplace signing.

use alloy_primitives::Address;
use serde::Deserialize;
use std::env;

use crate::signing::domain::{
    exchange_address, Eip712Domain, BSC_TESTNET_CHAIN_ID, ORDER_DOMAIN_NAME, ORDER_DOMAIN_VERSION,
};
use crate::{Error, Result};

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub exchange: ExchangeConfig,
    pub signing: SigningConfig,
}

/// Where the exchange contract lives.
#[derive(Debug, Clone, Deserialize)]
pub struct ExchangeConfig {
    pub chain_id: u64,
    pub contract_address: Address,
}

/// EIP-712 domain parameters signatures are bound to.
#[derive(Debug, Clone, Deserialize)]
pub struct SigningConfig {
    pub domain_name: String,
    pub domain_version: String,
}

impl Config {
    /// Load configuration from environment variables, defaulting to the
    /// BSC testnet deployment.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let chain_id = match env::var("EXCHANGE_CHAIN_ID") {
            Ok(value) => value.parse().map_err(|_| Error::Config {
                message: format!("EXCHANGE_CHAIN_ID is not a valid chain id: {value:?}"),
            })?,
            Err(_) => BSC_TESTNET_CHAIN_ID,
        };

        let contract_address = match env::var("EXCHANGE_CONTRACT_ADDRESS") {
            Ok(value) => value.parse().map_err(|_| Error::Config {
                message: format!("EXCHANGE_CONTRACT_ADDRESS is not a valid address: {value:?}"),
            })?,
            Err(_) => exchange_address(),
        };

        Ok(Self {
            exchange: ExchangeConfig {
                chain_id,
                contract_address,
            },
            signing: SigningConfig {
                domain_name: env::var("EXCHANGE_DOMAIN_NAME")
                    .unwrap_or_else(|_| ORDER_DOMAIN_NAME.to_string()),
                domain_version: env::var("EXCHANGE_DOMAIN_VERSION")
                    .unwrap_or_else(|_| ORDER_DOMAIN_VERSION.to_string()),
            },
        })
    }

    /// The EIP-712 domain this configuration describes.
    pub fn domain(&self) -> Eip712Domain {
        Eip712Domain::custom(
            &self.signing.domain_name,
            &self.signing.domain_version,
            self.exchange.chain_id,
            self.exchange.contract_address,
        )
    }

    /// Configuration for testing (BSC testnet defaults).
    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            exchange: ExchangeConfig {
                chain_id: BSC_TESTNET_CHAIN_ID,
                contract_address: exchange_address(),
            },
            signing: SigningConfig {
                domain_name: ORDER_DOMAIN_NAME.to_string(),
                domain_version: ORDER_DOMAIN_VERSION.to_string(),
            },
        }
    }
}
