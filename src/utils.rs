//! Utility functions for the Lowest-Price Index library.

use chrono::{DateTime, Utc};

/// Formats a timestamp as `YYYY-MM-DD HH:MM:SS` in UTC.
///
/// This is the text form SQLite uses for `CURRENT_TIMESTAMP`, so rows
/// written by the ledger sort and compare alongside rows defaulted by the
/// database.
///
/// # Examples
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use lowest_price_index::utils::format_date_added;
///
/// let at = Utc.with_ymd_and_hms(2025, 12, 22, 18, 30, 0).unwrap();
/// assert_eq!(format_date_added(&at), "2025-12-22 18:30:00");
/// ```
#[must_use]
pub fn format_date_added(date_added: &DateTime<Utc>) -> String {
    date_added.format("%Y-%m-%d %H:%M:%S").to_string()
}
