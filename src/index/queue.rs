//! Per-SKU offer queue.
//!
//! This module provides the [`OfferQueue`], the min-priority container that
//! holds every unclaimed offer for a single SKU.

use super::offer::Offer;
use rust_decimal::Decimal;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// An offer waiting in a queue, ordered by price then arrival.
#[derive(Debug)]
struct QueuedOffer {
    /// Monotonic arrival number within the queue.
    seq: u64,
    offer: Offer,
}

impl PartialEq for QueuedOffer {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueuedOffer {}

impl PartialOrd for QueuedOffer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueuedOffer {
    fn cmp(&self, other: &Self) -> Ordering {
        self.offer
            .price()
            .cmp(&other.offer.price())
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Min-priority queue of unclaimed offers for one SKU.
///
/// Push and pop are O(log n). Equal prices pop in arrival order.
///
/// ## Architecture
///
/// ```text
/// OfferQueue (per SKU)
///   └── BinaryHeap<Reverse<QueuedOffer>>
///         └── QueuedOffer (price, arrival seq, Offer)
/// ```
#[derive(Debug)]
pub struct OfferQueue {
    /// The SKU this queue holds offers for.
    sku: String,
    heap: BinaryHeap<Reverse<QueuedOffer>>,
    next_seq: u64,
}

impl OfferQueue {
    /// Creates an empty queue for a SKU.
    #[must_use]
    pub fn new(sku: impl Into<String>) -> Self {
        Self {
            sku: sku.into(),
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Returns the SKU.
    #[must_use]
    pub fn sku(&self) -> &str {
        &self.sku
    }

    /// Returns the number of unclaimed offers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if no offers remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Adds an offer.
    pub fn push(&mut self, offer: Offer) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(QueuedOffer { seq, offer }));
    }

    /// Removes and returns the lowest-priced offer.
    pub fn pop_lowest(&mut self) -> Option<Offer> {
        self.heap.pop().map(|Reverse(queued)| queued.offer)
    }

    /// Returns the lowest-priced offer without removing it.
    #[must_use]
    pub fn peek_lowest(&self) -> Option<&Offer> {
        self.heap.peek().map(|Reverse(queued)| &queued.offer)
    }

    /// Returns the lowest price in the queue.
    #[must_use]
    pub fn lowest_price(&self) -> Option<Decimal> {
        self.peek_lowest().map(Offer::price)
    }
}
