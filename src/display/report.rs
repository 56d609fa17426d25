//! Ledger report formatting

use crate::models::{Money, Transaction};

/// Shown instead of a report when the ledger holds no entries
pub const NO_RECORDS: &str = "No records yet.";

/// Format one report line: `+ 2025-10-01 09:30:15 | 工资 | 十月工资 | ¥5000.00`
pub fn format_transaction_line(txn: &Transaction, symbol: &str) -> String {
    format!(
        "{} {} | {} | {} | {}",
        txn.kind.symbol(),
        txn.date_string(),
        txn.category,
        txn.description,
        txn.amount.format_with_symbol(symbol)
    )
}

/// Format the trailing balance line
pub fn format_balance_line(balance: Money, symbol: &str) -> String {
    format!("Balance: {}", balance.format_with_symbol(symbol))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionKind;
    use chrono::NaiveDate;

    #[test]
    fn test_transaction_line() {
        let date = NaiveDate::from_ymd_opt(2025, 10, 1)
            .unwrap()
            .and_hms_opt(9, 30, 15)
            .unwrap();
        let txn = Transaction::with_date(
            TransactionKind::Expense,
            Money::from_cents(120000),
            "餐饮",
            "聚餐",
            date,
        );

        assert_eq!(
            format_transaction_line(&txn, "¥"),
            "- 2025-10-01 09:30:15 | 餐饮 | 聚餐 | ¥1200.00"
        );
    }

    #[test]
    fn test_balance_line() {
        assert_eq!(format_balance_line(Money::from_cents(-10000), "¥"), "Balance: -¥100.00");
    }
}
