//! Ledger file storage
//!
//! Reads and writes the whole ledger as one JSON array. Records are handed
//! out as raw JSON values so the caller decides how to treat a bad record.

use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::Serialize;
use serde_json::Value;

use crate::error::LedgerResult;

use super::file_io::{read_json, write_json_atomic};

/// Storage adapter for the ledger file
#[derive(Debug, Clone)]
pub struct LedgerStore {
    path: PathBuf,
}

impl LedgerStore {
    /// Create a store backed by the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every stored record in file order
    ///
    /// A missing file, unreadable file, or a file that is not a JSON array
    /// all load as an empty ledger.
    pub fn load(&self) -> Vec<Value> {
        match read_json::<Vec<Value>, _>(&self.path) {
            Ok(records) => {
                debug!("Loaded {} records from {}", records.len(), self.path.display());
                records
            }
            Err(e) => {
                warn!("Ignoring unreadable ledger file: {}", e);
                Vec::new()
            }
        }
    }

    /// Overwrite the ledger file with `records`
    ///
    /// Creates the containing directory when missing.
    pub fn save<T: Serialize>(&self, records: &[T]) -> LedgerResult<()> {
        write_json_atomic(&self.path, &records)?;
        debug!("Saved {} records to {}", records.len(), self.path.display());
        Ok(())
    }
}
