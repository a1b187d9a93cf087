//! Error types for the Lowest-Price Index library.
//!
//! All fallible operations return [`Result<T>`], an alias over [`Error`].
//! Ledger implementations report failures through [`LedgerError`], which the
//! index wraps into [`Error::Ledger`] when a submission is rejected.

use thiserror::Error;

/// Result type alias using the library's [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the index and its configuration layer.
#[derive(Debug, Error)]
pub enum Error {
    /// The offer failed validation and was not indexed.
    #[error("invalid offer: {reason}")]
    InvalidOffer {
        /// Why the offer was rejected.
        reason: String,
    },

    /// No unclaimed offers remain for the requested SKU.
    #[error("no offers available for sku {sku}")]
    NoOffersAvailable {
        /// The SKU that was queried.
        sku: String,
    },

    /// The ledger refused the price record and the submission was rejected.
    #[error("ledger error: {0}")]
    Ledger(#[from] LedgerError),

    /// The configuration could not be loaded or parsed.
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Creates an `InvalidOffer` error.
    #[must_use]
    pub fn invalid_offer(reason: impl Into<String>) -> Self {
        Self::InvalidOffer {
            reason: reason.into(),
        }
    }

    /// Creates a `NoOffersAvailable` error.
    #[must_use]
    pub fn no_offers(sku: impl Into<String>) -> Self {
        Self::NoOffersAvailable { sku: sku.into() }
    }

    /// Creates a `Config` error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Returns true if this is a `NoOffersAvailable` error.
    #[must_use]
    pub const fn is_no_offers(&self) -> bool {
        matches!(self, Self::NoOffersAvailable { .. })
    }

    /// Returns true if this is an `InvalidOffer` error.
    #[must_use]
    pub const fn is_invalid_offer(&self) -> bool {
        matches!(self, Self::InvalidOffer { .. })
    }
}

/// Errors raised by [`crate::ledger::Ledger`] implementations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Writing to the backing file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The record could not be encoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The SQLite statement failed.
    #[cfg(feature = "sqlite")]
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// The ledger is not accepting records.
    #[error("ledger unavailable: {0}")]
    Unavailable(String),
}
