//! Lowest-price index module.
//!
//! ## Hierarchy
//!
//! ```text
//! LowestPriceIndex (all SKUs, owns the ledger handle)
//!   └── OfferQueue (per SKU, min-heap by price)
//!         └── Offer (one retailer's claimable unit)
//! ```
//!
//! ## Components
//!
//! - [`LowestPriceIndex`]: Submit offers and claim the cheapest per SKU
//! - [`OfferQueue`]: Min-priority container for a single SKU
//! - [`Offer`]: A retailer's price for one unit of a SKU
//! - [`OfferId`]: Identifier assigned on submission
//! - [`PriceUpdate`]: Raw feed payload with a floating-point price
//! - [`IndexStats`]: Counters for the whole index
//!
//! ## Example
//!
//! ```rust
//! use lowest_price_index::index::{LowestPriceIndex, Offer};
//! use rust_decimal::Decimal;
//!
//! let index = LowestPriceIndex::default();
//! index.submit(Offer::new("Target", "CLOCK", Decimal::from(15), "")).unwrap();
//! index.submit(Offer::new("Target", "CLOCK", Decimal::from(14), "")).unwrap();
//!
//! let lowest = index.claim_lowest("CLOCK").unwrap();
//! assert_eq!(lowest.price(), Decimal::from(14));
//! ```

mod manager;
mod offer;
mod queue;

pub use manager::{IndexStats, LowestPriceIndex};
pub use offer::{Offer, OfferId, PriceUpdate};
pub use queue::OfferQueue;
