//! Core data models for Cashbook
//!
//! This module contains the data structures that represent the ledger
//! domain: amounts and transactions.

pub mod money;
pub mod transaction;

pub use money::Money;
pub use transaction::{Transaction, TransactionKind, DATE_FORMAT};
