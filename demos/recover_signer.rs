//! Walk through the off-chain signing flow against the deployed exchange.
//!
//! Run with:
//! ```
//! cargo run --example recover_signer
//! ```
//! Set `WALLET_PRIVATE_KEY=0x...` to also exercise local signing.

use alloy_primitives::{address, U256};
use marketplace_core::signing::{
    recover_signer, BidOrder, Eip712Domain, Order, OrderClass, OrderSigner, SaleKind,
    TypedDocument,
};
use wallet::MarketplaceWallet;

const ORDER_SIGNATURE: &str = "0xd5564a19de02b36ec8322c90a026ed927004250d1c846b7a1c8379157f2e275b1dd472e79426560b1cf50f71ce329bd2f62830989de9bf38b63d50a5e19f25461b";
const BID_SIGNATURE: &str = "0xeeb2807099fd487b426bb444b1334bea6658c648ee05e0a9975f289179dab5332ae62b1007adb5cb7f839e444fbe6de9437b996d4a84320a60090c4cb0738b321b";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt().with_env_filter("info").init();

    println!("=== Marketplace Signing Walkthrough ===\n");

    // Step 1: class discriminants the exchange contract consumes
    println!("1. Sale and status classes...");
    println!("   {} -> {}", SaleKind::Fixed, SaleKind::Fixed.class());
    println!("   {} -> {}", SaleKind::Auction, SaleKind::Auction.class());
    println!(
        "   {} -> {}",
        OrderClass::Cancelled,
        OrderClass::Cancelled.class()
    );

    // Step 2: build the order and its typed-data document
    println!("\n2. Building the order document...");
    let order = Order {
        seller: address!("217373AB5e0082B2Ce622169672ECa6F4462319C"),
        sale_type: SaleKind::Fixed.class(),
        token_address: address!("AC62f9b62d128d8551a1CedFF69D7517B8ab1134"),
        token_id: U256::from(8u64),
        amount: U256::from(100_000_000_000_000u64),
        start_time: U256::ZERO,
        end_time: U256::ZERO,
        nonce: U256::ZERO,
    };
    let domain = Eip712Domain::bsc_exchange();
    let document = TypedDocument::for_order(domain.clone(), order.clone());
    println!("   Digest: {}", document.signing_hash());
    println!("   Document: {}", document.to_json()?);

    // Step 3: recover the signer of the recorded order signature
    println!("\n3. Recovering the order signer...");
    let recovered = recover_signer(&document, ORDER_SIGNATURE)?;
    println!("   ✓ Recovered: {}", recovered);

    // Step 4: same for the bid built from that order
    println!("\n4. Recovering the bid signer...");
    let bid = BidOrder::from_order(
        &order,
        address!("FF0dF0BDA102aecDaD1b2A9BC96BBf7e59b216da"),
        U256::from(1_000_000_000_000_000u64),
    );
    let bid_document = TypedDocument::for_bid_order(domain, bid);
    let recovered = recover_signer(&bid_document, BID_SIGNATURE)?;
    println!("   ✓ Recovered: {}", recovered);

    // Step 5: optionally sign locally and recover our own address
    println!("\n5. Local signing round trip...");
    match MarketplaceWallet::from_env() {
        Ok(wallet) => {
            println!("   Wallet: {}", wallet.address_string());
            let signer = OrderSigner::new(wallet.into_signer());
            let signed = signer.sign_order(&order).await?;
            println!(
                "   Signature: {}...{}",
                &signed.signature[..10],
                &signed.signature[signed.signature.len() - 8..]
            );
            let recovered = recover_signer(
                &TypedDocument::for_order(signer.domain().clone(), order),
                &signed.signature,
            )?;
            println!("   ✓ Recovered: {}", recovered);
        }
        Err(_) => {
            println!("   Skipped (set WALLET_PRIVATE_KEY to enable)");
        }
    }

    Ok(())
}
