//! Integration tests for concurrent submit and claim.

use lowest_price_index::index::{LowestPriceIndex, Offer, OfferId};
use lowest_price_index::ledger::MemoryLedger;
use rust_decimal::Decimal;
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

const THREADS: usize = 8;
const OFFERS_PER_THREAD: usize = 250;

#[test]
fn test_concurrent_submit_then_claim_same_sku() {
    let ledger = Arc::new(MemoryLedger::new());
    let index = Arc::new(LowestPriceIndex::new(Arc::clone(&ledger)));

    let submitters: Vec<_> = (0..THREADS)
        .map(|t| {
            let index = Arc::clone(&index);
            thread::spawn(move || {
                (0..OFFERS_PER_THREAD)
                    .map(|i| {
                        let price = Decimal::from((t * OFFERS_PER_THREAD + i) % 97);
                        index
                            .submit(Offer::new(format!("retailer-{t}"), "CLOCK", price, ""))
                            .unwrap()
                    })
                    .collect::<Vec<OfferId>>()
            })
        })
        .collect();

    let submitted: HashSet<OfferId> = submitters
        .into_iter()
        .flat_map(|h| h.join().unwrap())
        .collect();
    assert_eq!(submitted.len(), THREADS * OFFERS_PER_THREAD);
    assert_eq!(ledger.len(), THREADS * OFFERS_PER_THREAD);

    let claimers: Vec<_> = (0..THREADS)
        .map(|_| {
            let index = Arc::clone(&index);
            thread::spawn(move || {
                let mut ids = Vec::new();
                let mut last = Decimal::MIN;
                while let Ok(offer) = index.claim_lowest("CLOCK") {
                    // Each thread sees its own claims in non-decreasing order.
                    assert!(offer.price() >= last);
                    last = offer.price();
                    ids.push(offer.id().unwrap());
                }
                ids
            })
        })
        .collect();

    let mut claimed = HashSet::new();
    for handle in claimers {
        for id in handle.join().unwrap() {
            assert!(claimed.insert(id), "offer {id} claimed twice");
        }
    }
    assert_eq!(claimed, submitted);
    assert_eq!(index.total_offer_count(), 0);
}

#[test]
fn test_concurrent_independent_skus() {
    let index = Arc::new(LowestPriceIndex::default());

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let index = Arc::clone(&index);
            thread::spawn(move || {
                let sku = format!("SKU-{t}");
                for i in (0..OFFERS_PER_THREAD).rev() {
                    index
                        .submit(Offer::new("Costco", sku.as_str(), Decimal::from(i), ""))
                        .unwrap();
                }
                for expected in 0..OFFERS_PER_THREAD {
                    let offer = index.claim_lowest(&sku).unwrap();
                    assert_eq!(offer.price(), Decimal::from(expected));
                }
                assert!(index.claim_lowest(&sku).unwrap_err().is_no_offers());
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let stats = index.stats();
    assert_eq!(stats.sku_count, THREADS);
    assert_eq!(stats.submitted, (THREADS * OFFERS_PER_THREAD) as u64);
    assert_eq!(stats.claimed, (THREADS * OFFERS_PER_THREAD) as u64);
    assert_eq!(stats.outstanding_offers, 0);
}
