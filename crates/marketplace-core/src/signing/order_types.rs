//! Order and bid-order message types.
//!
//! These mirror the `Order` and `BidOrder` tuples the exchange contract
//! hashes when it verifies a signature, so field names, EIP-712 types, and
//! field order here must stay in lockstep with the contract. Each struct
//! knows its own type string and struct hash; document assembly lives in
//! [`super::typed_data`].

use alloy_primitives::{Address, B256, FixedBytes, U256};
use alloy_sol_types::SolValue;
use serde::{Deserialize, Serialize};

use super::classes::SaleKind;

/// Primary type name for sell orders.
pub const ORDER_PRIMARY_TYPE: &str = "Order";

/// Primary type name for bids.
pub const BID_ORDER_PRIMARY_TYPE: &str = "BidOrder";

/// An intent to sell a token, signed off-chain by the seller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Order {
    /// The offering party.
    pub seller: Address,
    /// Sale class, see [`super::classes`].
    #[serde(rename = "saleType")]
    pub sale_type: FixedBytes<4>,
    /// Token contract being sold from.
    #[serde(rename = "tokenAddress")]
    pub token_address: Address,
    /// Token instance for multi-token standards; zero when unused.
    #[serde(rename = "tokenId", with = "crate::u256_decimal")]
    pub token_id: U256,
    /// Quantity or price unit, depending on the sale class.
    #[serde(with = "crate::u256_decimal")]
    pub amount: U256,
    /// Validity window start (unix seconds); zero together with `end_time`
    /// means no time bound.
    #[serde(rename = "startTime", with = "crate::u256_decimal")]
    pub start_time: U256,
    /// Validity window end (unix seconds).
    #[serde(rename = "endTime", with = "crate::u256_decimal")]
    pub end_time: U256,
    /// Replay protection; uniqueness per seller is enforced by the
    /// exchange contract, not here.
    #[serde(with = "crate::u256_decimal")]
    pub nonce: U256,
}

impl Order {
    /// EIP-712 field declaration, in hashing order.
    pub const FIELDS: [(&'static str, &'static str); 8] = [
        ("seller", "address"),
        ("saleType", "bytes4"),
        ("tokenAddress", "address"),
        ("tokenId", "uint256"),
        ("amount", "uint256"),
        ("startTime", "uint256"),
        ("endTime", "uint256"),
        ("nonce", "uint256"),
    ];

    /// The canonical type string the type hash is derived from.
    pub const TYPE_STRING: &'static str = "Order(address seller,bytes4 saleType,address tokenAddress,uint256 tokenId,uint256 amount,uint256 startTime,uint256 endTime,uint256 nonce)";

    /// EIP-712 type hash.
    pub fn type_hash() -> B256 {
        alloy_primitives::keccak256(Self::TYPE_STRING.as_bytes())
    }

    /// Compute the EIP-712 struct hash for this order.
    pub fn struct_hash(&self) -> B256 {
        // encodeData: all values padded to 32 bytes. Addresses are
        // left-padded, fixed bytes right-padded.
        let seller_padded = B256::left_padding_from(self.seller.as_slice());
        let sale_type_padded = B256::right_padding_from(self.sale_type.as_slice());
        let token_padded = B256::left_padding_from(self.token_address.as_slice());

        let encoded = (
            Self::type_hash(),
            seller_padded,
            sale_type_padded,
            token_padded,
            self.token_id,
            self.amount,
            self.start_time,
            self.end_time,
            self.nonce,
        )
            .abi_encode_packed();

        alloy_primitives::keccak256(&encoded)
    }
}

/// A bid against an existing order.
///
/// Carries the bid-for order's eight fields verbatim plus the bidder and
/// bid value; a distinct primary type with its own type hash, not a nested
/// struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BidOrder {
    pub seller: Address,
    #[serde(rename = "saleType")]
    pub sale_type: FixedBytes<4>,
    #[serde(rename = "tokenAddress")]
    pub token_address: Address,
    #[serde(rename = "tokenId", with = "crate::u256_decimal")]
    pub token_id: U256,
    #[serde(with = "crate::u256_decimal")]
    pub amount: U256,
    #[serde(rename = "startTime", with = "crate::u256_decimal")]
    pub start_time: U256,
    #[serde(rename = "endTime", with = "crate::u256_decimal")]
    pub end_time: U256,
    #[serde(with = "crate::u256_decimal")]
    pub nonce: U256,
    /// The bidding party.
    pub buyer: Address,
    /// The bid value.
    #[serde(rename = "bidAmount", with = "crate::u256_decimal")]
    pub bid_amount: U256,
}

impl BidOrder {
    /// EIP-712 field declaration: the eight `Order` fields, then the bid
    /// fields.
    pub const FIELDS: [(&'static str, &'static str); 10] = [
        ("seller", "address"),
        ("saleType", "bytes4"),
        ("tokenAddress", "address"),
        ("tokenId", "uint256"),
        ("amount", "uint256"),
        ("startTime", "uint256"),
        ("endTime", "uint256"),
        ("nonce", "uint256"),
        ("buyer", "address"),
        ("bidAmount", "uint256"),
    ];

    /// The canonical type string the type hash is derived from.
    pub const TYPE_STRING: &'static str = "BidOrder(address seller,bytes4 saleType,address tokenAddress,uint256 tokenId,uint256 amount,uint256 startTime,uint256 endTime,uint256 nonce,address buyer,uint256 bidAmount)";

    /// EIP-712 type hash.
    pub fn type_hash() -> B256 {
        alloy_primitives::keccak256(Self::TYPE_STRING.as_bytes())
    }

    /// Build a bid from the order it answers, copying all eight order
    /// fields unchanged.
    pub fn from_order(order: &Order, buyer: Address, bid_amount: U256) -> Self {
        Self {
            seller: order.seller,
            sale_type: order.sale_type,
            token_address: order.token_address,
            token_id: order.token_id,
            amount: order.amount,
            start_time: order.start_time,
            end_time: order.end_time,
            nonce: order.nonce,
            buyer,
            bid_amount,
        }
    }

    /// Compute the EIP-712 struct hash for this bid.
    pub fn struct_hash(&self) -> B256 {
        let seller_padded = B256::left_padding_from(self.seller.as_slice());
        let sale_type_padded = B256::right_padding_from(self.sale_type.as_slice());
        let token_padded = B256::left_padding_from(self.token_address.as_slice());
        let buyer_padded = B256::left_padding_from(self.buyer.as_slice());

        let encoded = (
            Self::type_hash(),
            seller_padded,
            sale_type_padded,
            token_padded,
            self.token_id,
            self.amount,
            self.start_time,
            self.end_time,
            self.nonce,
            buyer_padded,
            self.bid_amount,
        )
            .abi_encode_packed();

        alloy_primitives::keccak256(&encoded)
    }
}

/// An order together with its 65-byte signature, ready for submission.
#[derive(Debug, Clone, Serialize)]
pub struct SignedOrder {
    #[serde(flatten)]
    pub order: Order,
    /// EIP-712 signature as a 0x-prefixed hex string.
    pub signature: String,
}

/// A bid together with its 65-byte signature, ready for submission.
#[derive(Debug, Clone, Serialize)]
pub struct SignedBidOrder {
    #[serde(flatten)]
    pub bid: BidOrder,
    /// EIP-712 signature as a 0x-prefixed hex string.
    pub signature: String,
}

/// Order builder with a fluent API.
#[derive(Debug, Clone, Default)]
pub struct OrderBuilder {
    seller: Option<Address>,
    sale_kind: SaleKind,
    sale_class: Option<FixedBytes<4>>,
    token_address: Option<Address>,
    token_id: U256,
    amount: Option<U256>,
    start_time: U256,
    end_time: U256,
    nonce: U256,
}

impl OrderBuilder {
    /// Create a new order builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the selling party.
    pub fn seller(mut self, seller: Address) -> Self {
        self.seller = Some(seller);
        self
    }

    /// Set the sale mechanics (fixed price by default).
    pub fn sale_kind(mut self, kind: SaleKind) -> Self {
        self.sale_kind = kind;
        self.sale_class = None;
        self
    }

    /// Set the raw 4-byte sale class, overriding [`Self::sale_kind`].
    pub fn sale_class(mut self, class: FixedBytes<4>) -> Self {
        self.sale_class = Some(class);
        self
    }

    /// Set the token contract.
    pub fn token_address(mut self, token_address: Address) -> Self {
        self.token_address = Some(token_address);
        self
    }

    /// Set the token instance id.
    pub fn token_id(mut self, token_id: U256) -> Self {
        self.token_id = token_id;
        self
    }

    /// Set the amount (quantity or price unit per the sale class).
    pub fn amount(mut self, amount: U256) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Bound validity to `[start, end]` unix seconds. Both default to
    /// zero, meaning no time bound.
    pub fn valid_between(mut self, start: u64, end: u64) -> Self {
        self.start_time = U256::from(start);
        self.end_time = U256::from(end);
        self
    }

    /// Set the replay-protection nonce.
    pub fn nonce(mut self, nonce: U256) -> Self {
        self.nonce = nonce;
        self
    }

    /// Build the order.
    ///
    /// Returns None if seller, token address, or amount is missing.
    pub fn build(self) -> Option<Order> {
        let seller = self.seller?;
        let token_address = self.token_address?;
        let amount = self.amount?;

        Some(Order {
            seller,
            sale_type: self.sale_class.unwrap_or_else(|| self.sale_kind.class()),
            token_address,
            token_id: self.token_id,
            amount,
            start_time: self.start_time,
            end_time: self.end_time,
            nonce: self.nonce,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::{address, b256};

    fn fixture_order() -> Order {
        Order {
            seller: address!("217373AB5e0082B2Ce622169672ECa6F4462319C"),
            sale_type: SaleKind::Fixed.class(),
            token_address: address!("AC62f9b62d128d8551a1CedFF69D7517B8ab1134"),
            token_id: U256::from(8u64),
            amount: U256::from(100_000_000_000_000u64),
            start_time: U256::ZERO,
            end_time: U256::ZERO,
            nonce: U256::ZERO,
        }
    }

    #[test]
    fn type_strings_match_field_tables() {
        let rebuilt = format!(
            "Order({})",
            Order::FIELDS
                .iter()
                .map(|(name, kind)| format!("{kind} {name}"))
                .collect::<Vec<_>>()
                .join(",")
        );
        assert_eq!(rebuilt, Order::TYPE_STRING);

        let rebuilt = format!(
            "BidOrder({})",
            BidOrder::FIELDS
                .iter()
                .map(|(name, kind)| format!("{kind} {name}"))
                .collect::<Vec<_>>()
                .join(",")
        );
        assert_eq!(rebuilt, BidOrder::TYPE_STRING);
    }

    #[test]
    fn type_hashes_are_locked() {
        assert_eq!(
            Order::type_hash(),
            b256!("32f8590997913a0aad3fd422b92fbc303e7e759d49d1bff2c8e4a5d7f9db45c4")
        );
        assert_eq!(
            BidOrder::type_hash(),
            b256!("9b7346a4e0dc87f2b44dbc7d40322550abbe507e6b2e4b1f242e9e7fe39dc1c9")
        );
    }

    #[test]
    fn order_struct_hash_is_locked() {
        assert_eq!(
            fixture_order().struct_hash(),
            b256!("ee6416ff6f4e1cc8c685efc425ce67fd53180649a0b335f0b77dae72b794d7bf")
        );
    }

    #[test]
    fn bid_copies_order_fields_verbatim() {
        let order = fixture_order();
        let buyer = address!("FF0dF0BDA102aecDaD1b2A9BC96BBf7e59b216da");
        let bid = BidOrder::from_order(&order, buyer, U256::from(1_000_000_000_000_000u64));

        assert_eq!(bid.seller, order.seller);
        assert_eq!(bid.sale_type, order.sale_type);
        assert_eq!(bid.token_address, order.token_address);
        assert_eq!(bid.token_id, order.token_id);
        assert_eq!(bid.amount, order.amount);
        assert_eq!(bid.start_time, order.start_time);
        assert_eq!(bid.end_time, order.end_time);
        assert_eq!(bid.nonce, order.nonce);
        assert_eq!(bid.buyer, buyer);
        assert_eq!(bid.bid_amount, U256::from(1_000_000_000_000_000u64));
    }

    #[test]
    fn bid_struct_hash_is_locked() {
        let bid = BidOrder::from_order(
            &fixture_order(),
            address!("FF0dF0BDA102aecDaD1b2A9BC96BBf7e59b216da"),
            U256::from(1_000_000_000_000_000u64),
        );
        assert_eq!(
            bid.struct_hash(),
            b256!("417b1b6b253737ad02b4c1c29d0b8e55a601dfd13c541a5d0d084e438ed479b3")
        );
    }

    #[test]
    fn struct_hash_changes_with_any_field() {
        let base = fixture_order();
        let hash = base.struct_hash();

        let mut changed = base.clone();
        changed.nonce = U256::from(1u64);
        assert_ne!(changed.struct_hash(), hash);

        let mut changed = base.clone();
        changed.token_id = U256::from(9u64);
        assert_ne!(changed.struct_hash(), hash);

        let mut changed = base;
        changed.sale_type = SaleKind::Auction.class();
        assert_ne!(changed.struct_hash(), hash);
    }

    #[test]
    fn order_serializes_with_eip712_field_names() {
        let json = serde_json::to_value(fixture_order()).unwrap();
        assert_eq!(
            json["seller"],
            "0x217373ab5e0082b2ce622169672eca6f4462319c"
        );
        assert_eq!(json["saleType"], "0xc5d24601");
        assert_eq!(json["tokenId"], "8");
        assert_eq!(json["amount"], "100000000000000");
        assert_eq!(json["startTime"], "0");
    }

    #[test]
    fn order_deserialization_rejects_unknown_fields() {
        // A bid-order message must not parse as an Order.
        let bid = BidOrder::from_order(
            &fixture_order(),
            address!("FF0dF0BDA102aecDaD1b2A9BC96BBf7e59b216da"),
            U256::from(1u64),
        );
        let json = serde_json::to_string(&bid).unwrap();
        assert!(serde_json::from_str::<Order>(&json).is_err());
    }

    #[test]
    fn builder_fills_defaults() {
        let order = OrderBuilder::new()
            .seller(address!("217373AB5e0082B2Ce622169672ECa6F4462319C"))
            .token_address(address!("AC62f9b62d128d8551a1CedFF69D7517B8ab1134"))
            .token_id(U256::from(8u64))
            .amount(U256::from(100_000_000_000_000u64))
            .build()
            .unwrap();

        assert_eq!(order, fixture_order());
    }

    #[test]
    fn builder_requires_seller_token_and_amount() {
        assert!(OrderBuilder::new().build().is_none());
        assert!(OrderBuilder::new()
            .seller(address!("217373AB5e0082B2Ce622169672ECa6F4462319C"))
            .amount(U256::from(1u64))
            .build()
            .is_none());
    }

    #[test]
    fn builder_sets_window_and_auction_class() {
        let order = OrderBuilder::new()
            .seller(address!("217373AB5e0082B2Ce622169672ECa6F4462319C"))
            .sale_kind(SaleKind::Auction)
            .token_address(address!("AC62f9b62d128d8551a1CedFF69D7517B8ab1134"))
            .amount(U256::from(5u64))
            .valid_between(1_652_337_303, 1_652_423_703)
            .nonce(U256::from(3u64))
            .build()
            .unwrap();

        assert_eq!(order.sale_type, SaleKind::Auction.class());
        assert_eq!(order.start_time, U256::from(1_652_337_303u64));
        assert_eq!(order.end_time, U256::from(1_652_423_703u64));
        assert_eq!(order.nonce, U256::from(3u64));
    }

    #[test]
    fn signed_order_serializes_flat() {
        let signed = SignedOrder {
            order: fixture_order(),
            signature: "0xd5564a19".to_string(),
        };
        let json = serde_json::to_value(&signed).unwrap();
        assert_eq!(json["saleType"], "0xc5d24601");
        assert_eq!(json["signature"], "0xd5564a19");
    }
}
