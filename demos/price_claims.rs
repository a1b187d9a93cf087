//! Price Claims Walkthrough
//!
//! This example replays a small retailer price feed:
//! - Submitting offers for CLOCK and BED from several retailers
//! - Claiming the lowest offer after each update
//! - Recording every observation in a JSON-lines ledger
//! - Handling a claim on an exhausted SKU
//!
//! Run with: `cargo run --example price_claims`
//! Set `RUST_LOG=lowest_price_index=debug` to see index events.

use lowest_price_index::index::{LowestPriceIndex, Offer, PriceUpdate};
use lowest_price_index::ledger::JsonLinesLedger;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("=== Lowest Price Claims ===");

    let ledger_path = std::env::temp_dir().join("price_claims.jsonl");
    let index = LowestPriceIndex::new(JsonLinesLedger::open(&ledger_path)?);
    info!("Recording observations to {}", ledger_path.display());

    // Each step submits one update, then claims the cheapest CLOCK or BED.
    let feed = [
        PriceUpdate::new("Walmart", "CLOCK", 20.0, ""),
        PriceUpdate::new("IKEA", "BED", 140.0, ""),
        PriceUpdate::new("Target", "CLOCK", 15.0, ""),
        PriceUpdate::new("Target", "CLOCK", 14.0, ""),
        PriceUpdate::new("Best Buy", "CLOCK", 30.0, ""),
        PriceUpdate::new("Wayfair", "BED", 120.0, ""),
        PriceUpdate::new("Target", "CLOCK", 25.0, ""),
        PriceUpdate::new("Walmart", "CLOCK", 27.0, ""),
        PriceUpdate::new("Costco", "CLOCK", 12.0, ""),
        PriceUpdate::new("IKEA", "BED", 100.0, ""),
        PriceUpdate::new("Costco", "CLOCK", 13.0, ""),
    ];

    info!("--- Submit and Claim ---");
    for update in feed {
        let sku = update.sku.clone();
        index.submit(Offer::try_from(update)?)?;

        let lowest = index.claim_lowest(&sku)?;
        info!(
            "Low retailer {} low price {} for {}",
            lowest.retailer(),
            lowest.price(),
            sku
        );
    }

    info!("--- Remaining Offers ---");
    for sku in index.skus() {
        info!("{}: {} unclaimed", sku, index.offer_count(&sku));
    }
    while let Ok(offer) = index.claim_lowest("CLOCK") {
        info!("Draining CLOCK: {}", offer);
    }

    info!("--- Exhausted SKU ---");
    if let Err(e) = index.claim_lowest("CLOCK") {
        warn!("Claim failed as expected: {}", e);
    }

    info!("--- Statistics ---");
    info!("{}", index.stats());

    info!("=== Example Complete ===");
    Ok(())
}
