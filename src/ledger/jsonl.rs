//! JSON-lines file ledger.

use super::{Ledger, PriceRecord};
use crate::error::LedgerError;
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Ledger that appends one JSON object per line to a file.
///
/// The file is opened in append mode, so existing history is kept across
/// restarts. Records go straight to the file with no user-space buffer:
/// a failed append never leaks into a later one.
#[derive(Debug)]
pub struct JsonLinesLedger {
    path: PathBuf,
    file: Mutex<File>,
}

impl JsonLinesLedger {
    /// Opens (or creates) the ledger file at `path`.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Io` if the file cannot be opened for appending.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, LedgerError> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        debug!(path = %path.display(), "opened json-lines ledger");
        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    /// Returns the path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Ledger for JsonLinesLedger {
    fn append(&self, record: &PriceRecord) -> Result<(), LedgerError> {
        let mut file = self.file.lock();
        let start = file.metadata()?.len();

        if let Err(err) = write_record(&mut *file, record) {
            // Cut any partial line so the next record starts on a clean line.
            if let Err(truncate_err) = file.set_len(start) {
                warn!(path = %self.path.display(), %truncate_err, "failed to truncate torn ledger line");
            }
            return Err(err);
        }
        Ok(())
    }
}

/// Encodes a record as one JSON line and hands it to `writer` in a single
/// `write_all`. Nothing is retained between calls.
fn write_record<W: Write>(writer: &mut W, record: &PriceRecord) -> Result<(), LedgerError> {
    let mut line = serde_json::to_vec(record)?;
    line.push(b'\n');
    writer.write_all(&line)?;
    writer.flush()?;
    Ok(())
}
