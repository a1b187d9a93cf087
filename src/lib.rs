//! # Lowest-Price Index - Per-SKU Cheapest Offer Tracking
//!
//! A Rust library that tracks prices for the same product across many
//! retailers and answers "who currently has the lowest price for SKU X".
//! Claiming that offer removes it, so the next claim falls through to the
//! next-cheapest one.
//!
//! ## Key Features
//!
//! - **Per-SKU Min-Heaps**: Each SKU gets its own priority queue, created
//!   lazily on the first offer. Submit and claim are O(log n).
//!
//! - **Thread-Safe Concurrent Access**: Uses `DashMap` so operations on the
//!   same SKU are serialized while different SKUs proceed in parallel.
//!
//! - **Durable Ledger**: Every accepted offer is appended to a [`ledger::Ledger`]
//!   (in-memory, JSON-lines file, or SQLite with the `sqlite` feature).
//!
//! - **Explicit Failure Policy**: A ledger failure either rejects the
//!   submission or is logged and tolerated, per [`config::LedgerFailurePolicy`].
//!
//! - **Exact Prices**: Prices are `rust_decimal::Decimal`, so ordering never
//!   depends on floating-point rounding.
//!
//! - **Result-Based Error Handling**: All fallible operations return `Result<T, Error>`
//!   with descriptive error types. Nothing panics on bad input or empty SKUs.
//!
//! ## Architecture
//!
//! ```text
//! LowestPriceIndex
//!   ├── Ledger (append-only PriceRecord log)
//!   └── OfferQueue (per SKU)
//!         └── Offer (retailer, sku, price, url)
//! ```
//!
//! ## Module Structure
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`index`] | The lowest-price index, per-SKU queues and offer types |
//! | [`ledger`] | Ledger trait and implementations |
//! | [`config`] | Index configuration and ledger failure policy |
//! | [`error`] | Error types and `Result` type alias |
//! | [`utils`] | Utility functions (e.g., timestamp formatting) |
//!
//! ## Example Usage
//!
//! ```rust
//! use lowest_price_index::index::{LowestPriceIndex, Offer};
//! use lowest_price_index::ledger::MemoryLedger;
//! use rust_decimal::Decimal;
//! use std::sync::Arc;
//!
//! let ledger = Arc::new(MemoryLedger::new());
//! let index = LowestPriceIndex::new(Arc::clone(&ledger));
//!
//! index.submit(Offer::new("Walmart", "CLOCK", Decimal::from(20), "")).unwrap();
//! index.submit(Offer::new("Costco", "CLOCK", Decimal::from(12), "")).unwrap();
//!
//! let lowest = index.claim_lowest("CLOCK").unwrap();
//! assert_eq!(lowest.retailer(), "Costco");
//! assert_eq!(ledger.len(), 2);
//!
//! // Nothing left for BED
//! assert!(index.claim_lowest("BED").is_err());
//! ```
//!
//! ### Tolerating Ledger Failures
//!
//! ```rust
//! use lowest_price_index::config::{IndexConfig, LedgerFailurePolicy};
//! use lowest_price_index::index::{LowestPriceIndex, Offer};
//! use lowest_price_index::ledger::MemoryLedger;
//! use rust_decimal::Decimal;
//!
//! let config = IndexConfig::with_policy(LedgerFailurePolicy::LogAndContinue);
//! let index = LowestPriceIndex::with_config(MemoryLedger::failing(), config);
//!
//! index.submit(Offer::new("IKEA", "BED", Decimal::from(140), "")).unwrap();
//! assert_eq!(index.offer_count("BED"), 1);
//! ```
//!
//! ## Examples
//!
//! Replay the sample price feed with:
//! ```bash
//! cargo run --example price_claims
//! ```
//!
//! ## Benchmarks
//!
//! - **index_bench**: Submit, claim and mixed workloads at several queue sizes
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench
//! ```
//!
//! ## Dependencies
//!
//! - **dashmap** (6): Concurrent hash map for per-SKU locking
//! - **rust_decimal** (1.39): Exact price arithmetic
//! - **chrono** (0.4): Ledger timestamps
//! - **uuid** (1.19): Offer identifiers
//! - **thiserror** (2.0): Error handling
//! - **serde** / **serde_json** (1.0): Ledger records and configuration
//! - **tracing** (0.1): Structured logging
//! - **rusqlite** (0.36, optional): SQLite ledger

pub mod config;
pub mod error;
pub mod index;
pub mod ledger;
pub mod utils;

pub use error::{Error, Result};
