//! EIP-712 typed-data documents.
//!
//! A [`TypedDocument`] is the JSON object handed to a signer: top-level
//! `types`, `primaryType`, `domain`, and `message` keys, with the field
//! lists in declared order. Serialization is deterministic — identical
//! inputs produce byte-identical JSON — and parsing re-validates the
//! schema against the canonical declarations, because a document whose
//! field order deviates hashes to a different digest and recovery would
//! silently yield the wrong address.

use alloy_primitives::B256;
use alloy_sol_types::SolValue;
use serde::{Deserialize, Serialize};

use super::domain::Eip712Domain;
use super::order_types::{BidOrder, Order, BID_ORDER_PRIMARY_TYPE, ORDER_PRIMARY_TYPE};
use crate::error::{Error, Result};

/// A single `{name, type}` entry in a document's type declarations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDef {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl FieldDef {
    fn list(fields: &[(&str, &str)]) -> Vec<FieldDef> {
        fields
            .iter()
            .map(|(name, kind)| FieldDef {
                name: (*name).to_string(),
                kind: (*kind).to_string(),
            })
            .collect()
    }
}

/// The `types` section: the domain declaration plus exactly one message
/// declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DocumentTypes {
    #[serde(rename = "EIP712Domain")]
    pub eip712_domain: Vec<FieldDef>,
    #[serde(rename = "Order", default, skip_serializing_if = "Option::is_none")]
    pub order: Option<Vec<FieldDef>>,
    #[serde(rename = "BidOrder", default, skip_serializing_if = "Option::is_none")]
    pub bid_order: Option<Vec<FieldDef>>,
}

/// The message payload, tagged by the document's `primaryType`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TypedMessage {
    Order(Order),
    BidOrder(BidOrder),
}

impl TypedMessage {
    /// The primary type name for this message shape.
    pub fn primary_type(&self) -> &'static str {
        match self {
            TypedMessage::Order(_) => ORDER_PRIMARY_TYPE,
            TypedMessage::BidOrder(_) => BID_ORDER_PRIMARY_TYPE,
        }
    }

    /// EIP-712 struct hash of the message.
    pub fn struct_hash(&self) -> B256 {
        match self {
            TypedMessage::Order(order) => order.struct_hash(),
            TypedMessage::BidOrder(bid) => bid.struct_hash(),
        }
    }
}

/// A complete EIP-712 typed-data document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TypedDocument {
    pub types: DocumentTypes,
    pub primary_type: String,
    pub domain: Eip712Domain,
    pub message: TypedMessage,
}

impl TypedDocument {
    /// Build the canonical document for a sell order.
    pub fn for_order(domain: Eip712Domain, order: Order) -> Self {
        Self {
            types: DocumentTypes {
                eip712_domain: FieldDef::list(&domain_fields()),
                order: Some(FieldDef::list(&Order::FIELDS)),
                bid_order: None,
            },
            primary_type: ORDER_PRIMARY_TYPE.to_string(),
            domain,
            message: TypedMessage::Order(order),
        }
    }

    /// Build the canonical document for a bid.
    pub fn for_bid_order(domain: Eip712Domain, bid: BidOrder) -> Self {
        Self {
            types: DocumentTypes {
                eip712_domain: FieldDef::list(&domain_fields()),
                order: None,
                bid_order: Some(FieldDef::list(&BidOrder::FIELDS)),
            },
            primary_type: BID_ORDER_PRIMARY_TYPE.to_string(),
            domain,
            message: TypedMessage::BidOrder(bid),
        }
    }

    /// The digest a signer signs: `keccak256(0x1901 || domainSeparator ||
    /// structHash)`.
    pub fn signing_hash(&self) -> B256 {
        eip712_digest(self.domain.separator(), self.message.struct_hash())
    }

    /// Serialize to the standard wire form.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse and validate an externally produced document.
    ///
    /// The declared field lists must match the canonical declarations
    /// exactly — names, types, and order — and `primaryType` must select
    /// the message shape; any deviation is a [`Error::SchemaMismatch`].
    pub fn from_json(json: &str) -> Result<Self> {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase", deny_unknown_fields)]
        struct RawDocument {
            types: DocumentTypes,
            primary_type: String,
            domain: Eip712Domain,
            message: serde_json::Value,
        }

        let raw: RawDocument =
            serde_json::from_str(json).map_err(|err| Error::SchemaMismatch {
                message: format!("malformed typed-data document: {err}"),
            })?;

        if raw.types.eip712_domain != FieldDef::list(&domain_fields()) {
            return Err(Error::SchemaMismatch {
                message: "EIP712Domain field list deviates from the canonical declaration"
                    .to_string(),
            });
        }

        let message = match raw.primary_type.as_str() {
            ORDER_PRIMARY_TYPE => {
                expect_declared(&raw.types.order, &Order::FIELDS, ORDER_PRIMARY_TYPE)?;
                if raw.types.bid_order.is_some() {
                    return Err(Error::SchemaMismatch {
                        message: "Order document declares an unused BidOrder type".to_string(),
                    });
                }
                let order: Order =
                    serde_json::from_value(raw.message).map_err(|err| Error::SchemaMismatch {
                        message: format!("message does not match the Order schema: {err}"),
                    })?;
                TypedMessage::Order(order)
            }
            BID_ORDER_PRIMARY_TYPE => {
                expect_declared(&raw.types.bid_order, &BidOrder::FIELDS, BID_ORDER_PRIMARY_TYPE)?;
                if raw.types.order.is_some() {
                    return Err(Error::SchemaMismatch {
                        message: "BidOrder document declares an unused Order type".to_string(),
                    });
                }
                let bid: BidOrder =
                    serde_json::from_value(raw.message).map_err(|err| Error::SchemaMismatch {
                        message: format!("message does not match the BidOrder schema: {err}"),
                    })?;
                TypedMessage::BidOrder(bid)
            }
            other => {
                return Err(Error::SchemaMismatch {
                    message: format!("unsupported primaryType {other:?}"),
                })
            }
        };

        Ok(Self {
            types: raw.types,
            primary_type: raw.primary_type,
            domain: raw.domain,
            message,
        })
    }
}

/// The `EIP712Domain` field declaration.
fn domain_fields() -> [(&'static str, &'static str); 4] {
    [
        ("name", "string"),
        ("version", "string"),
        ("chainId", "uint256"),
        ("verifyingContract", "address"),
    ]
}

fn expect_declared(
    declared: &Option<Vec<FieldDef>>,
    canonical: &[(&str, &str)],
    primary_type: &str,
) -> Result<()> {
    match declared {
        Some(fields) if *fields == FieldDef::list(canonical) => Ok(()),
        Some(_) => Err(Error::SchemaMismatch {
            message: format!("{primary_type} field list deviates from the canonical declaration"),
        }),
        None => Err(Error::SchemaMismatch {
            message: format!("document does not declare the {primary_type} type"),
        }),
    }
}

/// Compose the final EIP-712 digest from its two component hashes.
pub fn eip712_digest(domain_separator: B256, struct_hash: B256) -> B256 {
    let prefix = [0x19u8, 0x01];
    let data = (prefix, domain_separator, struct_hash).abi_encode_packed();
    alloy_primitives::keccak256(&data)
}
