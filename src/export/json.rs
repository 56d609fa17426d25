//! JSON Export functionality
//!
//! Exports the ledger with its balance and schema version.

use chrono::{Local, NaiveDateTime};
use serde::Serialize;
use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Money, Transaction, DATE_FORMAT};
use crate::services::Ledger;
use crate::storage::to_pretty_json;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full ledger export structure
#[derive(Debug, Clone, Serialize)]
pub struct LedgerExport<'a> {
    /// Schema version for compatibility checking
    pub schema_version: &'static str,

    /// Export timestamp (local time)
    pub exported_at: String,

    pub transaction_count: usize,

    pub balance: Money,

    pub transactions: &'a [Transaction],
}

impl<'a> LedgerExport<'a> {
    /// Snapshot the ledger as of `now`
    pub fn from_ledger(ledger: &'a Ledger, now: NaiveDateTime) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION,
            exported_at: now.format(DATE_FORMAT).to_string(),
            transaction_count: ledger.len(),
            balance: ledger.balance(),
            transactions: ledger.entries(),
        }
    }

    /// Snapshot the ledger as of the current local time
    pub fn now(ledger: &'a Ledger) -> Self {
        Self::from_ledger(ledger, Local::now().naive_local())
    }
}

/// Export the ledger as pretty-printed JSON
pub fn export_json<W: Write>(ledger: &Ledger, writer: &mut W) -> LedgerResult<()> {
    let bytes = to_pretty_json(&LedgerExport::now(ledger))?;
    writer
        .write_all(&bytes)
        .and_then(|_| writeln!(writer))
        .map_err(|e| LedgerError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionKind;
    use crate::storage::LedgerStore;
    use tempfile::TempDir;

    #[test]
    fn test_export_json() {
        let temp_dir = TempDir::new().unwrap();
        let mut ledger = Ledger::open(LedgerStore::new(temp_dir.path().join("ledger.json"))).unwrap();
        ledger
            .add(TransactionKind::Income, Money::from_cents(500000), "工资", "十月工资")
            .unwrap();
        ledger
            .add(TransactionKind::Expense, Money::from_cents(120000), "餐饮", "聚餐")
            .unwrap();

        let mut out = Vec::new();
        export_json(&ledger, &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["schema_version"], EXPORT_SCHEMA_VERSION);
        assert_eq!(value["transaction_count"], 2);
        assert_eq!(value["balance"], 3800.0);
        assert_eq!(value["transactions"][1]["type"], "Expense");
        assert!(String::from_utf8(out).unwrap().contains("十月工资"));
    }
}
