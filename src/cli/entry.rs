//! Ledger entry CLI commands
//!
//! Non-interactive counterparts of the shell menu: add, report, balance.

use clap::ValueEnum;

use crate::error::LedgerResult;
use crate::models::{Money, TransactionKind};
use crate::services::Ledger;

/// Kind argument for `add`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    /// Money coming in
    Income,
    /// Money going out
    Expense,
}

impl From<KindArg> for TransactionKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Income => TransactionKind::Income,
            KindArg::Expense => TransactionKind::Expense,
        }
    }
}

/// Handle `add`
pub fn handle_add(
    ledger: &mut Ledger,
    kind: KindArg,
    amount: &str,
    category: String,
    description: String,
    currency_symbol: &str,
) -> LedgerResult<()> {
    let amount = Money::parse(amount)?;
    let txn = ledger.add(kind.into(), amount, category, description)?;

    println!(
        "Recorded {} {} ({}) at {}",
        txn.kind,
        txn.amount.format_with_symbol(currency_symbol),
        txn.category,
        txn.date_string()
    );
    Ok(())
}

/// Handle `report`
pub fn handle_report(ledger: &Ledger, currency_symbol: &str) {
    for line in ledger.report(currency_symbol) {
        println!("{}", line);
    }
}

/// Handle `balance`
pub fn handle_balance(ledger: &Ledger, currency_symbol: &str) {
    println!("{}", ledger.balance().format_with_symbol(currency_symbol));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LedgerError;
    use crate::storage::LedgerStore;
    use tempfile::TempDir;

    #[test]
    fn test_handle_add_parses_amount() {
        let temp_dir = TempDir::new().unwrap();
        let mut ledger = Ledger::open(LedgerStore::new(temp_dir.path().join("ledger.json"))).unwrap();

        handle_add(&mut ledger, KindArg::Expense, "12.30", "交通".into(), String::new(), "¥").unwrap();

        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.balance().cents(), -1230);
    }

    #[test]
    fn test_handle_add_rejects_bad_amount() {
        let temp_dir = TempDir::new().unwrap();
        let mut ledger = Ledger::open(LedgerStore::new(temp_dir.path().join("ledger.json"))).unwrap();

        let err = handle_add(&mut ledger, KindArg::Income, "ten", "x".into(), String::new(), "¥")
            .unwrap_err();

        assert!(matches!(err, LedgerError::InvalidAmount(_)));
        assert!(ledger.is_empty());
    }
}
