//! Transaction model
//!
//! A ledger entry is a single record type with a [`TransactionKind`] tag.
//! The kind decides the sign the amount contributes to the balance and the
//! `type` tag written to disk.

use chrono::{Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::money::Money;
use crate::error::LedgerError;

/// On-disk and display format of a transaction timestamp
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Whether money came in or went out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// The tag written to the ledger file
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }

    /// Sign multiplier applied to the amount when computing the balance
    pub const fn sign(&self) -> i64 {
        match self {
            Self::Income => 1,
            Self::Expense => -1,
        }
    }

    /// Symbol shown in front of report lines
    pub const fn symbol(&self) -> char {
        match self {
            Self::Income => '+',
            Self::Expense => '-',
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for TransactionKind {
    type Err = LedgerError;

    /// Parse a stored tag. Lowercase tags come from older ledger files.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Income" | "income" => Ok(Self::Income),
            "Expense" | "expense" => Ok(Self::Expense),
            other => Err(LedgerError::UnknownKind(other.to_string())),
        }
    }
}

impl TryFrom<String> for TransactionKind {
    type Error = LedgerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TransactionKind> for &'static str {
    fn from(kind: TransactionKind) -> Self {
        kind.tag()
    }
}

/// A single ledger entry
///
/// Field order here is the field order in the ledger file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Amount as entered; the sign is not validated
    pub amount: Money,

    /// Short free-text label
    pub category: String,

    /// Free-text note
    pub description: String,

    /// When the entry was recorded (local time, whole seconds)
    #[serde(with = "timestamp")]
    pub date: NaiveDateTime,

    #[serde(rename = "type")]
    pub kind: TransactionKind,
}

impl Transaction {
    /// Create a new transaction stamped with the current local time
    pub fn new(
        kind: TransactionKind,
        amount: Money,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let now = Local::now().naive_local();
        let date = now.with_nanosecond(0).unwrap_or(now);
        Self::with_date(kind, amount, category, description, date)
    }

    /// Create a transaction with an explicit timestamp
    pub fn with_date(
        kind: TransactionKind,
        amount: Money,
        category: impl Into<String>,
        description: impl Into<String>,
        date: NaiveDateTime,
    ) -> Self {
        Self {
            amount,
            category: category.into(),
            description: description.into(),
            date,
            kind,
        }
    }

    /// Amount with the kind's sign applied
    pub fn signed_amount(&self) -> Money {
        Money::from_cents(self.amount.cents() * self.kind.sign())
    }

    /// Timestamp in the on-disk format
    pub fn date_string(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} {}", self.date_string(), self.description, self.amount)
    }
}

/// Serde adapter for `YYYY-MM-DD HH:MM:SS` timestamps
mod timestamp {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::DATE_FORMAT;

    pub fn serialize<S: Serializer>(date: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(DATE_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let text = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&text, DATE_FORMAT).map_err(|e| {
            serde::de::Error::custom(format!("invalid date {:?}: {}", text, e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_date() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 10, 1)
            .unwrap()
            .and_hms_opt(9, 30, 15)
            .unwrap()
    }

    #[test]
    fn test_new_stamps_whole_seconds() {
        let txn = Transaction::new(TransactionKind::Income, Money::from_cents(100), "工资", "");
        assert_eq!(txn.date.nanosecond(), 0);
        assert_eq!(txn.date_string().len(), 19);
    }

    #[test]
    fn test_signed_amount() {
        let income = Transaction::with_date(
            TransactionKind::Income,
            Money::from_cents(500),
            "a",
            "",
            sample_date(),
        );
        let expense = Transaction::with_date(
            TransactionKind::Expense,
            Money::from_cents(500),
            "a",
            "",
            sample_date(),
        );
        assert_eq!(income.signed_amount().cents(), 500);
        assert_eq!(expense.signed_amount().cents(), -500);
    }

    #[test]
    fn test_serialize_field_order_and_tag() {
        let txn = Transaction::with_date(
            TransactionKind::Expense,
            Money::from_cents(120000),
            "餐饮",
            "聚餐",
            sample_date(),
        );
        let json = serde_json::to_string(&txn).unwrap();
        assert_eq!(
            json,
            r#"{"amount":1200.0,"category":"餐饮","description":"聚餐","date":"2025-10-01 09:30:15","type":"Expense"}"#
        );
    }

    #[test]
    fn test_round_trip_keeps_persisted_date() {
        let txn = Transaction::with_date(
            TransactionKind::Income,
            Money::from_cents(500000),
            "工资",
            "十月工资",
            sample_date(),
        );
        let value = serde_json::to_value(&txn).unwrap();
        let back: Transaction = serde_json::from_value(value).unwrap();
        assert_eq!(back, txn);
    }

    #[test]
    fn test_legacy_lowercase_tags() {
        let json = r#"{"amount":10,"category":"x","description":"","date":"2024-01-01 00:00:00","type":"income"}"#;
        let txn: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(txn.kind, TransactionKind::Income);

        let json = json.replace("\"income\"", "\"expense\"");
        let txn: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(txn.kind, TransactionKind::Expense);
    }

    #[test]
    fn test_unknown_tag_is_rejected() {
        let json = r#"{"amount":10,"category":"x","description":"","date":"2024-01-01 00:00:00","type":"General"}"#;
        let err = serde_json::from_str::<Transaction>(json).unwrap_err();
        assert!(err.to_string().contains("General"));
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let json = r#"{"amount":10,"category":"x","date":"2024-01-01 00:00:00","type":"Income"}"#;
        let err = serde_json::from_str::<Transaction>(json).unwrap_err();
        assert!(err.to_string().contains("description"));
    }

    #[test]
    fn test_bad_date_is_rejected() {
        let json = r#"{"amount":10,"category":"x","description":"","date":"yesterday","type":"Income"}"#;
        assert!(serde_json::from_str::<Transaction>(json).is_err());
    }
}
