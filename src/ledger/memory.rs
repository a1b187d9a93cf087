//! In-memory ledger.

use super::{Ledger, PriceRecord};
use crate::error::LedgerError;
use parking_lot::{Mutex, MutexGuard};
use std::sync::atomic::{AtomicBool, Ordering};

/// Ledger that keeps records in memory.
///
/// Can be switched into a failing mode with [`MemoryLedger::set_failing`],
/// after which every append returns `LedgerError::Unavailable`.
#[derive(Debug, Default)]
pub struct MemoryLedger {
    records: Mutex<Vec<PriceRecord>>,
    failing: AtomicBool,
}

impl MemoryLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a ledger that rejects every append.
    #[must_use]
    pub fn failing() -> Self {
        let ledger = Self::new();
        ledger.set_failing(true);
        ledger
    }

    /// Turns failure mode on or off.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Returns a copy of all stored records in append order.
    #[must_use]
    pub fn records(&self) -> Vec<PriceRecord> {
        self.lock().clone()
    }

    /// Returns the number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<PriceRecord>> {
        self.records.lock()
    }
}

impl Ledger for MemoryLedger {
    fn append(&self, record: &PriceRecord) -> Result<(), LedgerError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(LedgerError::Unavailable(
                "memory ledger is in failure mode".to_string(),
            ));
        }
        self.lock().push(record.clone());
        Ok(())
    }
}
