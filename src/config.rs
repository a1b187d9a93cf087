//! Index configuration.
//!
//! The only tunable today is what a submission does when the ledger
//! refuses its record. Configuration can be built in code or loaded from
//! JSON:
//!
//! ```json
//! { "ledger_failure_policy": "log_and_continue" }
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// What [`crate::index::LowestPriceIndex::submit`] does when the ledger
/// append fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LedgerFailurePolicy {
    /// Fail the submission with `Error::Ledger`; the offer is not indexed.
    #[default]
    Reject,
    /// Log a warning and index the offer anyway.
    LogAndContinue,
}

impl std::fmt::Display for LedgerFailurePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Reject => write!(f, "reject"),
            Self::LogAndContinue => write!(f, "log_and_continue"),
        }
    }
}

/// Configuration for a [`crate::index::LowestPriceIndex`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexConfig {
    /// Ledger failure handling.
    #[serde(default)]
    pub ledger_failure_policy: LedgerFailurePolicy,
}

impl IndexConfig {
    /// Creates a configuration with the given ledger failure policy.
    #[must_use]
    pub const fn with_policy(ledger_failure_policy: LedgerFailurePolicy) -> Self {
        Self {
            ledger_failure_policy,
        }
    }

    /// Parses a configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the JSON is malformed or names an unknown policy.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::config(e.to_string()))
    }

    /// Loads a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::config(format!("{}: {e}", path.display())))?;
        Self::from_json_str(&contents)
    }
}
