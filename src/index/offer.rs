//! Offer types.
//!
//! This module provides the [`Offer`] stored in the index, the [`OfferId`]
//! assigned to it on submission, and the [`PriceUpdate`] inbound payload.

use crate::error::{Error, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier assigned to an offer when the index accepts it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OfferId(Uuid);

impl OfferId {
    /// Creates a new random offer identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for OfferId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for OfferId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One retailer's claimable unit of a SKU at a price point.
///
/// An offer carries no [`OfferId`] until it has been accepted by
/// [`crate::index::LowestPriceIndex::submit`]. Offers handed back by a claim
/// always carry one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offer {
    /// Assigned on submission.
    id: Option<OfferId>,
    /// The retailer name.
    retailer: String,
    /// The stock-keeping unit, shared across retailers.
    sku: String,
    /// Price per unit.
    price: Decimal,
    /// Product detail link, may be empty.
    url: String,
}

impl Offer {
    /// Creates a new offer.
    ///
    /// No validation happens here; the index validates on submission.
    ///
    /// # Arguments
    ///
    /// * `retailer` - The retailer name (e.g., "Walmart")
    /// * `sku` - The product SKU (e.g., "CLOCK")
    /// * `price` - The price per unit
    /// * `url` - Product detail link, may be empty
    #[must_use]
    pub fn new(
        retailer: impl Into<String>,
        sku: impl Into<String>,
        price: Decimal,
        url: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            retailer: retailer.into(),
            sku: sku.into(),
            price,
            url: url.into(),
        }
    }

    /// Returns the offer id, if the offer has been submitted.
    #[must_use]
    pub const fn id(&self) -> Option<OfferId> {
        self.id
    }

    /// Returns the retailer name.
    #[must_use]
    pub fn retailer(&self) -> &str {
        &self.retailer
    }

    /// Returns the SKU.
    #[must_use]
    pub fn sku(&self) -> &str {
        &self.sku
    }

    /// Returns the price per unit.
    #[must_use]
    pub const fn price(&self) -> Decimal {
        self.price
    }

    /// Returns the product link.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Checks the offer against the submission constraints.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidOffer` if the SKU or retailer is blank or the
    /// price is negative.
    pub fn validate(&self) -> Result<()> {
        if self.sku.trim().is_empty() {
            return Err(Error::invalid_offer("sku must not be empty"));
        }
        if self.retailer.trim().is_empty() {
            return Err(Error::invalid_offer("retailer must not be empty"));
        }
        if self.price.is_sign_negative() && !self.price.is_zero() {
            return Err(Error::invalid_offer(format!(
                "price must be non-negative, got {}",
                self.price
            )));
        }
        Ok(())
    }

    pub(crate) fn assign_id(&mut self, id: OfferId) {
        self.id = Some(id);
    }
}

impl std::fmt::Display for Offer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{} for {}", self.sku, self.retailer, self.price)
    }
}

/// A raw price update as delivered by a retailer feed.
///
/// The price arrives as a float; converting into an [`Offer`] rejects NaN
/// and infinite values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceUpdate {
    /// The retailer name.
    pub retailer: String,
    /// The product SKU.
    pub sku: String,
    /// Price per unit.
    pub price: f64,
    /// Product detail link, optional.
    #[serde(default)]
    pub url: String,
}

impl PriceUpdate {
    /// Creates a new price update.
    #[must_use]
    pub fn new(
        retailer: impl Into<String>,
        sku: impl Into<String>,
        price: f64,
        url: impl Into<String>,
    ) -> Self {
        Self {
            retailer: retailer.into(),
            sku: sku.into(),
            price,
            url: url.into(),
        }
    }
}

impl TryFrom<PriceUpdate> for Offer {
    type Error = Error;

    fn try_from(update: PriceUpdate) -> Result<Self> {
        if !update.price.is_finite() {
            return Err(Error::invalid_offer(format!(
                "price must be finite, got {}",
                update.price
            )));
        }
        let price = Decimal::try_from(update.price)
            .map_err(|e| Error::invalid_offer(format!("unrepresentable price: {e}")))?;
        Ok(Self::new(update.retailer, update.sku, price, update.url))
    }
}
