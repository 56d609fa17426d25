//! Ledger service
//!
//! Holds the ledger in memory in entry order and rewrites the whole file
//! after every change.

use log::info;

use crate::display::{format_balance_line, format_transaction_line, NO_RECORDS};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Money, Transaction, TransactionKind};
use crate::storage::LedgerStore;

/// In-memory ledger backed by a [`LedgerStore`]
pub struct Ledger {
    store: LedgerStore,
    entries: Vec<Transaction>,
}

impl Ledger {
    /// Load the ledger from `store`
    ///
    /// A missing or unparsable file gives an empty ledger. A record that is
    /// present but malformed fails the whole load.
    pub fn open(store: LedgerStore) -> LedgerResult<Self> {
        let entries = store
            .load()
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                serde_json::from_value(record).map_err(|e| LedgerError::malformed(index, e.to_string()))
            })
            .collect::<LedgerResult<Vec<Transaction>>>()?;

        Ok(Self { store, entries })
    }

    /// Record a new entry and persist the ledger
    ///
    /// If the save fails the entry is dropped again and the error returned.
    pub fn add(
        &mut self,
        kind: TransactionKind,
        amount: Money,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> LedgerResult<&Transaction> {
        self.entries
            .push(Transaction::new(kind, amount, category, description));

        if let Err(e) = self.persist() {
            self.entries.pop();
            return Err(e);
        }

        let txn = &self.entries[self.entries.len() - 1];
        info!("Recorded {} of {} in '{}'", txn.kind, txn.amount, txn.category);
        Ok(txn)
    }

    /// Total income minus total expense
    pub fn balance(&self) -> Money {
        self.entries.iter().map(Transaction::signed_amount).sum()
    }

    /// One line per entry in entry order, followed by the balance line
    pub fn report(&self, currency_symbol: &str) -> Vec<String> {
        if self.entries.is_empty() {
            return vec![NO_RECORDS.to_string()];
        }

        let mut lines: Vec<String> = self
            .entries
            .iter()
            .map(|txn| format_transaction_line(txn, currency_symbol))
            .collect();
        lines.push(format_balance_line(self.balance(), currency_symbol));
        lines
    }

    /// Write every entry to storage
    pub fn persist(&self) -> LedgerResult<()> {
        self.store.save(&self.entries)
    }

    pub fn entries(&self) -> &[Transaction] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
