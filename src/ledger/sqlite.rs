//! SQLite ledger.
//!
//! Writes every observation to a `products` table, created on open:
//!
//! ```text
//! products(id, dateAdded, sku, retailer, price, url)
//! ```

use super::{Ledger, PriceRecord};
use crate::error::LedgerError;
use crate::utils::format_date_added;
use parking_lot::{Mutex, MutexGuard};
use rusqlite::{Connection, params};
use rust_decimal::prelude::ToPrimitive;
use std::path::Path;
use tracing::info;

const CREATE_PRODUCTS_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS products (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        dateAdded TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
        sku TEXT NOT NULL,
        retailer TEXT NOT NULL,
        price REAL NOT NULL,
        url TEXT
    );
    CREATE INDEX IF NOT EXISTS idx_products_sku ON products(sku);
";

/// Ledger backed by a SQLite `products` table.
#[derive(Debug)]
pub struct SqliteLedger {
    conn: Mutex<Connection>,
}

impl SqliteLedger {
    /// Opens (or creates) a database file and initializes the schema.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Sqlite` if the database cannot be opened or the
    /// schema cannot be created.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, LedgerError> {
        Self::init(Connection::open(path)?)
    }

    /// Opens a private in-memory database.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Sqlite` if the schema cannot be created.
    pub fn open_in_memory() -> Result<Self, LedgerError> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self, LedgerError> {
        conn.execute_batch(CREATE_PRODUCTS_TABLE)?;
        info!("sqlite ledger schema initialized");
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Returns the number of rows recorded for a SKU.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Sqlite` if the query fails.
    pub fn count_for_sku(&self, sku: &str) -> Result<usize, LedgerError> {
        let count: i64 = self.lock().query_row(
            "SELECT COUNT(*) FROM products WHERE sku = ?1",
            params![sku],
            |row| row.get(0),
        )?;
        Ok(usize::try_from(count).unwrap_or_default())
    }

    fn lock(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock()
    }
}

impl Ledger for SqliteLedger {
    fn append(&self, record: &PriceRecord) -> Result<(), LedgerError> {
        let price = record.price.to_f64().ok_or_else(|| {
            LedgerError::Unavailable(format!("price {} does not fit a REAL column", record.price))
        })?;

        let conn = self.lock();
        let mut stmt = conn.prepare_cached(
            "INSERT INTO products (dateAdded, sku, retailer, price, url)
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )?;
        stmt.execute(params![
            format_date_added(&record.date_added),
            &record.sku,
            &record.retailer,
            price,
            &record.url,
        ])?;
        Ok(())
    }
}
