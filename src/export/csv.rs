//! CSV Export functionality
//!
//! Exports ledger entries to a spreadsheet-friendly CSV file.

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::services::Ledger;

const HEADER: [&str; 5] = ["date", "type", "category", "description", "amount"];

/// Export all entries to CSV in ledger order
pub fn export_csv<W: Write>(ledger: &Ledger, writer: W) -> LedgerResult<()> {
    let export_err = |e: csv::Error| LedgerError::Export(e.to_string());
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(HEADER).map_err(export_err)?;

    for txn in ledger.entries() {
        csv_writer
            .write_record([
                txn.date_string().as_str(),
                txn.kind.tag(),
                txn.category.as_str(),
                txn.description.as_str(),
                txn.amount.to_string().as_str(),
            ])
            .map_err(export_err)?;
    }

    csv_writer
        .flush()
        .map_err(|e| LedgerError::Export(e.to_string()))
}
