//! EIP-712 domain separators for the marketplace exchange.
//!
//! Orders and bids are signed off-chain against the exchange contract's
//! EIP-712 domain; the separator binds every signature to that contract,
//! chain, and domain version so it cannot be replayed elsewhere.

use alloy_primitives::{Address, B256, U256};
use alloy_sol_types::SolValue;
use serde::{Deserialize, Serialize};

/// Chain ID for BSC testnet, where the exchange proxy is deployed.
pub const BSC_TESTNET_CHAIN_ID: u64 = 97;

/// Exchange proxy contract address on BSC testnet.
pub const EXCHANGE_ADDRESS: &str = "0x29B2aa68224108AbcEA26d73774B8acdEd06172A";

/// Domain name the exchange contract verifies against.
pub const ORDER_DOMAIN_NAME: &str = "Order";

/// Domain version the exchange contract verifies against.
pub const ORDER_DOMAIN_VERSION: &str = "1";

/// The canonical `EIP712Domain` type declaration.
pub const EIP712_DOMAIN_TYPE: &str =
    "EIP712Domain(string name,string version,uint256 chainId,address verifyingContract)";

/// The exchange proxy address as a parsed [`Address`].
pub fn exchange_address() -> Address {
    EXCHANGE_ADDRESS
        .parse()
        .expect("invalid exchange address constant")
}

/// EIP-712 domain separator for order signing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Eip712Domain {
    /// Domain name.
    pub name: String,
    /// Domain version.
    pub version: String,
    /// Chain ID.
    #[serde(with = "crate::u256_decimal")]
    pub chain_id: U256,
    /// Verifying contract address.
    pub verifying_contract: Address,
}

impl Eip712Domain {
    /// Create the domain for the exchange proxy on BSC testnet.
    pub fn bsc_exchange() -> Self {
        Self {
            name: ORDER_DOMAIN_NAME.to_string(),
            version: ORDER_DOMAIN_VERSION.to_string(),
            chain_id: U256::from(BSC_TESTNET_CHAIN_ID),
            verifying_contract: exchange_address(),
        }
    }

    /// Create a domain with custom parameters.
    pub fn custom(
        name: impl Into<String>,
        version: impl Into<String>,
        chain_id: u64,
        verifying_contract: Address,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            chain_id: U256::from(chain_id),
            verifying_contract,
        }
    }

    /// Compute the EIP-712 domain separator hash.
    pub fn separator(&self) -> B256 {
        let domain_type_hash = alloy_primitives::keccak256(EIP712_DOMAIN_TYPE.as_bytes());

        let name_hash = alloy_primitives::keccak256(self.name.as_bytes());
        let version_hash = alloy_primitives::keccak256(self.version.as_bytes());

        // encodeData: every value as a 32-byte word, addresses left-padded.
        let contract_padded = B256::left_padding_from(self.verifying_contract.as_slice());

        let encoded = (
            domain_type_hash,
            name_hash,
            version_hash,
            self.chain_id,
            contract_padded,
        )
            .abi_encode_packed();

        alloy_primitives::keccak256(&encoded)
    }
}
