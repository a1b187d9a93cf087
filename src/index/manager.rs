//! Lowest-price index module.
//!
//! This module provides the [`LowestPriceIndex`], which owns one
//! [`OfferQueue`] per SKU and records every accepted offer in a ledger.

use super::offer::{Offer, OfferId};
use super::queue::OfferQueue;
use crate::config::{IndexConfig, LedgerFailurePolicy};
use crate::error::{Error, Result};
use crate::ledger::{Ledger, NullLedger, PriceRecord};
use chrono::Utc;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, error, trace, warn};

/// Per-SKU lowest-price index.
///
/// Retailers [`submit`](Self::submit) offers; buyers
/// [`claim_lowest`](Self::claim_lowest) the cheapest outstanding offer for a
/// SKU, which removes it for good.
///
/// Uses `DashMap` for thread-safe concurrent access: operations on the same
/// SKU are serialized by the entry guard, operations on different SKUs
/// proceed in parallel. The ledger append happens before any guard is taken.
///
/// ## Architecture
///
/// ```text
/// LowestPriceIndex
///   ├── Ledger (append-only price records)
///   └── DashMap<String, OfferQueue>
///         └── OfferQueue (per SKU, min-heap by price)
///               └── Offer
/// ```
pub struct LowestPriceIndex {
    /// Offer queues indexed by SKU.
    books: DashMap<String, OfferQueue>,
    /// Durable record of every accepted observation.
    ledger: Box<dyn Ledger>,
    config: IndexConfig,
    /// Lifetime count of offers indexed.
    submitted: AtomicU64,
    /// Lifetime count of offers claimed.
    claimed: AtomicU64,
}

impl Default for LowestPriceIndex {
    fn default() -> Self {
        Self::new(NullLedger)
    }
}

impl std::fmt::Debug for LowestPriceIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LowestPriceIndex")
            .field("sku_count", &self.sku_count())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl LowestPriceIndex {
    /// Creates an index with the default configuration.
    ///
    /// # Arguments
    ///
    /// * `ledger` - Where accepted offers are recorded
    #[must_use]
    pub fn new(ledger: impl Ledger + 'static) -> Self {
        Self::with_config(ledger, IndexConfig::default())
    }

    /// Creates an index with an explicit configuration.
    #[must_use]
    pub fn with_config(ledger: impl Ledger + 'static, config: IndexConfig) -> Self {
        Self {
            books: DashMap::new(),
            ledger: Box::new(ledger),
            config,
            submitted: AtomicU64::new(0),
            claimed: AtomicU64::new(0),
        }
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &IndexConfig {
        &self.config
    }

    /// Submits an offer and returns the id assigned to it.
    ///
    /// The offer is validated, appended to the ledger, then inserted into the
    /// queue for its SKU (created on first use). Once this returns `Ok`, the
    /// offer is visible to [`claim_lowest`](Self::claim_lowest).
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidOffer` if validation fails, and `Error::Ledger`
    /// if the ledger append fails under [`LedgerFailurePolicy::Reject`]. In
    /// both cases the index is unchanged.
    pub fn submit(&self, mut offer: Offer) -> Result<OfferId> {
        offer.validate()?;

        let record = PriceRecord::from_offer(&offer, Utc::now());
        if let Err(err) = self.ledger.append(&record) {
            match self.config.ledger_failure_policy {
                LedgerFailurePolicy::Reject => {
                    error!(sku = %offer.sku(), retailer = %offer.retailer(), %err, "ledger append failed, offer rejected");
                    return Err(err.into());
                }
                LedgerFailurePolicy::LogAndContinue => {
                    warn!(sku = %offer.sku(), retailer = %offer.retailer(), %err, "ledger append failed, indexing offer without a record");
                }
            }
        }

        let id = OfferId::new();
        offer.assign_id(id);
        debug!(sku = %offer.sku(), retailer = %offer.retailer(), price = %offer.price(), %id, "offer submitted");

        let sku = offer.sku().to_string();
        self.books
            .entry(sku.clone())
            .or_insert_with(|| {
                trace!(sku = %sku, "created offer queue");
                OfferQueue::new(&sku)
            })
            .push(offer);
        self.submitted.fetch_add(1, Ordering::Relaxed);

        Ok(id)
    }

    /// Removes and returns the lowest-priced offer for a SKU.
    ///
    /// Among offers sharing the lowest price, which one is returned is not
    /// part of the contract.
    ///
    /// # Errors
    ///
    /// Returns `Error::NoOffersAvailable` if the SKU is unknown or has no
    /// unclaimed offers left.
    pub fn claim_lowest(&self, sku: &str) -> Result<Offer> {
        let offer = self
            .books
            .get_mut(sku)
            .and_then(|mut queue| queue.pop_lowest())
            .ok_or_else(|| Error::no_offers(sku))?;

        self.claimed.fetch_add(1, Ordering::Relaxed);
        debug!(sku = %offer.sku(), retailer = %offer.retailer(), price = %offer.price(), "offer claimed");
        Ok(offer)
    }

    /// Returns the offer [`claim_lowest`](Self::claim_lowest) would return,
    /// without removing it.
    ///
    /// # Errors
    ///
    /// Returns `Error::NoOffersAvailable` if the SKU has no unclaimed offers.
    pub fn peek_lowest(&self, sku: &str) -> Result<Offer> {
        self.books
            .get(sku)
            .and_then(|queue| queue.peek_lowest().cloned())
            .ok_or_else(|| Error::no_offers(sku))
    }

    /// Returns the number of unclaimed offers for a SKU (0 if unknown).
    #[must_use]
    pub fn offer_count(&self, sku: &str) -> usize {
        self.books.get(sku).map_or(0, |queue| queue.len())
    }

    /// Returns true if a queue exists for the SKU, even an empty one.
    #[must_use]
    pub fn contains_sku(&self, sku: &str) -> bool {
        self.books.contains_key(sku)
    }

    /// Returns the number of SKUs seen so far.
    #[must_use]
    pub fn sku_count(&self) -> usize {
        self.books.len()
    }

    /// Returns all known SKUs (sorted).
    #[must_use]
    pub fn skus(&self) -> Vec<String> {
        let mut skus: Vec<String> = self.books.iter().map(|e| e.key().clone()).collect();
        skus.sort_unstable();
        skus
    }

    /// Returns the total number of unclaimed offers across all SKUs.
    #[must_use]
    pub fn total_offer_count(&self) -> usize {
        self.books.iter().map(|e| e.value().len()).sum()
    }

    /// Returns statistics about the index.
    #[must_use]
    pub fn stats(&self) -> IndexStats {
        IndexStats {
            sku_count: self.sku_count(),
            outstanding_offers: self.total_offer_count(),
            submitted: self.submitted.load(Ordering::Relaxed),
            claimed: self.claimed.load(Ordering::Relaxed),
        }
    }
}

/// Statistics about a lowest-price index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexStats {
    /// Number of SKUs with a queue.
    pub sku_count: usize,
    /// Offers currently waiting to be claimed.
    pub outstanding_offers: usize,
    /// Offers accepted since the index was created.
    pub submitted: u64,
    /// Offers claimed since the index was created.
    pub claimed: u64,
}

impl std::fmt::Display for IndexStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} skus, {} outstanding offers, {} submitted, {} claimed",
            self.sku_count, self.outstanding_offers, self.submitted, self.claimed
        )
    }
}
