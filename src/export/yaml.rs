//! YAML Export functionality
//!
//! Same document as the JSON export, for human-readable backups.

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::export::json::LedgerExport;
use crate::services::Ledger;

/// Export the ledger to YAML format
pub fn export_yaml<W: Write>(ledger: &Ledger, writer: &mut W) -> LedgerResult<()> {
    let export = LedgerExport::now(ledger);

    writeln!(writer, "# Cashbook ledger export")
        .and_then(|_| writeln!(writer, "# Generated: {}", export.exported_at))
        .map_err(|e| LedgerError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| LedgerError::Export(e.to_string()))?;

    Ok(())
}
