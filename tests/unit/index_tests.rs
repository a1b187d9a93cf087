//! Integration tests for claim ordering and SKU isolation.

use lowest_price_index::Error;
use lowest_price_index::index::{LowestPriceIndex, Offer, OfferId, PriceUpdate};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashSet;

fn submit(index: &LowestPriceIndex, retailer: &str, sku: &str, price: Decimal) -> OfferId {
    index.submit(Offer::new(retailer, sku, price, "")).unwrap()
}

fn claim(index: &LowestPriceIndex, sku: &str) -> (String, Decimal) {
    let offer = index.claim_lowest(sku).unwrap();
    (offer.retailer().to_string(), offer.price())
}

#[test]
fn test_sample_feed_walkthrough() {
    let index = LowestPriceIndex::default();

    submit(&index, "Walmart", "CLOCK", dec!(20));
    assert_eq!(claim(&index, "CLOCK"), ("Walmart".to_string(), dec!(20)));

    submit(&index, "IKEA", "BED", dec!(140));
    assert_eq!(claim(&index, "BED"), ("IKEA".to_string(), dec!(140)));

    submit(&index, "Target", "CLOCK", dec!(15));
    submit(&index, "Target", "CLOCK", dec!(14));
    assert_eq!(claim(&index, "CLOCK"), ("Target".to_string(), dec!(14)));

    submit(&index, "Best Buy", "CLOCK", dec!(30));
    assert_eq!(claim(&index, "CLOCK"), ("Target".to_string(), dec!(15)));

    submit(&index, "Costco", "CLOCK", dec!(12));
    submit(&index, "Costco", "CLOCK", dec!(13));
    assert_eq!(claim(&index, "CLOCK"), ("Costco".to_string(), dec!(12)));
    assert_eq!(claim(&index, "CLOCK"), ("Costco".to_string(), dec!(13)));
    assert_eq!(claim(&index, "CLOCK"), ("Best Buy".to_string(), dec!(30)));

    assert!(index.claim_lowest("CLOCK").unwrap_err().is_no_offers());
    assert!(index.claim_lowest("BED").unwrap_err().is_no_offers());
}

#[test]
fn test_claims_are_non_decreasing_and_exhaustive() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    for round in 0..20 {
        let index = LowestPriceIndex::default();
        let count = rng.gen_range(1..200);
        for _ in 0..count {
            let cents: i64 = rng.gen_range(0..10_000);
            submit(&index, "Walmart", "CLOCK", Decimal::new(cents, 2));
        }

        let mut last = Decimal::MIN;
        let mut claims = 0;
        while let Ok(offer) = index.claim_lowest("CLOCK") {
            assert!(offer.price() >= last, "round {round}: {} < {}", offer.price(), last);
            last = offer.price();
            claims += 1;
        }
        assert_eq!(claims, count, "round {round}");
        assert!(matches!(
            index.claim_lowest("CLOCK"),
            Err(Error::NoOffersAvailable { .. })
        ));
    }
}

#[test]
fn test_skus_are_isolated() {
    let index = LowestPriceIndex::default();
    submit(&index, "Target", "CLOCK", dec!(25));
    submit(&index, "Walmart", "CLOCK", dec!(27));

    // Cheaper BED offers must not leak into CLOCK claims.
    submit(&index, "Wayfair", "BED", dec!(1));
    submit(&index, "IKEA", "BED", dec!(100));

    assert_eq!(claim(&index, "CLOCK"), ("Target".to_string(), dec!(25)));
    assert_eq!(index.offer_count("BED"), 2);

    assert_eq!(claim(&index, "BED"), ("Wayfair".to_string(), dec!(1)));
    assert_eq!(claim(&index, "BED"), ("IKEA".to_string(), dec!(100)));
    assert!(index.claim_lowest("BED").unwrap_err().is_no_offers());

    assert_eq!(claim(&index, "CLOCK"), ("Walmart".to_string(), dec!(27)));
}

#[test]
fn test_claimed_offer_never_returned_twice() {
    let index = LowestPriceIndex::default();
    let mut submitted = HashSet::new();
    for price in [dec!(5), dec!(3), dec!(3), dec!(8), dec!(1)] {
        submitted.insert(submit(&index, "Costco", "LAMP", price));
    }

    let mut seen = HashSet::new();
    while let Ok(offer) = index.claim_lowest("LAMP") {
        let id = offer.id().expect("claimed offers carry an id");
        assert!(seen.insert(id), "offer {id} claimed twice");
    }
    assert_eq!(seen, submitted);
}

#[test]
fn test_tied_prices_return_one_of_the_tied_offers() {
    let index = LowestPriceIndex::default();
    submit(&index, "Target", "CLOCK", dec!(14));
    submit(&index, "Costco", "CLOCK", dec!(14));
    submit(&index, "Walmart", "CLOCK", dec!(20));

    let first = index.claim_lowest("CLOCK").unwrap();
    let second = index.claim_lowest("CLOCK").unwrap();

    assert_eq!(first.price(), dec!(14));
    assert_eq!(second.price(), dec!(14));
    let retailers: HashSet<&str> = [first.retailer(), second.retailer()].into_iter().collect();
    assert_eq!(retailers, HashSet::from(["Target", "Costco"]));
}

#[test]
fn test_claim_without_any_submission() {
    let index = LowestPriceIndex::default();
    let err = index.claim_lowest("CLOCK").unwrap_err();

    assert!(err.is_no_offers());
    assert_eq!(err.to_string(), "no offers available for sku CLOCK");
}

#[test]
fn test_price_update_feed() {
    let index = LowestPriceIndex::default();
    let feed = vec![
        PriceUpdate::new("Target", "CLOCK", 25.0, ""),
        PriceUpdate::new("Walmart", "CLOCK", 27.0, "https://walmart.example/clock"),
        PriceUpdate::new("Costco", "CLOCK", 12.0, ""),
        PriceUpdate::new("Broken", "CLOCK", f64::NAN, ""),
    ];

    let accepted = feed
        .into_iter()
        .filter_map(|update| Offer::try_from(update).ok())
        .map(|offer| index.submit(offer))
        .filter(Result::is_ok)
        .count();

    assert_eq!(accepted, 3);
    assert_eq!(claim(&index, "CLOCK"), ("Costco".to_string(), dec!(12)));
    assert_eq!(index.peek_lowest("CLOCK").unwrap().price(), dec!(25));
}
