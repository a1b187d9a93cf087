//! Durable price ledger.
//!
//! Every offer the index accepts is appended to a [`Ledger`] as a
//! [`PriceRecord`]. The index never reads the ledger back.
//!
//! ## Implementations
//!
//! | Ledger | Backing store |
//! |--------|---------------|
//! | [`MemoryLedger`] | `Vec` behind a lock, for tests and demos |
//! | [`JsonLinesLedger`] | one JSON object per line in an append-only file |
//! | `SqliteLedger` | `products` table in SQLite (feature `sqlite`) |
//! | [`NullLedger`] | discards everything |

mod jsonl;
mod memory;
#[cfg(feature = "sqlite")]
mod sqlite;

pub use jsonl::JsonLinesLedger;
pub use memory::MemoryLedger;
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteLedger;

use crate::error::LedgerError;
use crate::index::Offer;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One price observation, tagged with its arrival time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRecord {
    /// When the observation was received.
    pub date_added: DateTime<Utc>,
    /// The product SKU.
    pub sku: String,
    /// The retailer name.
    pub retailer: String,
    /// Price per unit.
    pub price: Decimal,
    /// Product detail link, may be empty.
    pub url: String,
}

impl PriceRecord {
    /// Builds a record for an offer received at `date_added`.
    #[must_use]
    pub fn from_offer(offer: &Offer, date_added: DateTime<Utc>) -> Self {
        Self {
            date_added,
            sku: offer.sku().to_string(),
            retailer: offer.retailer().to_string(),
            price: offer.price(),
            url: offer.url().to_string(),
        }
    }
}

/// Append-only store of price observations.
///
/// Implementations must be safe to call from several threads at once.
pub trait Ledger: Send + Sync {
    /// Appends a record.
    ///
    /// # Errors
    ///
    /// Returns a [`LedgerError`] if the record could not be stored.
    fn append(&self, record: &PriceRecord) -> Result<(), LedgerError>;
}

impl<L: Ledger + ?Sized> Ledger for std::sync::Arc<L> {
    fn append(&self, record: &PriceRecord) -> Result<(), LedgerError> {
        (**self).append(record)
    }
}

/// A ledger that accepts and discards every record.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLedger;

impl Ledger for NullLedger {
    fn append(&self, _record: &PriceRecord) -> Result<(), LedgerError> {
        Ok(())
    }
}
