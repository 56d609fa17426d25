//! Service layer for Cashbook
//!
//! Business logic sitting between the command surfaces and storage.

pub mod ledger;

pub use ledger::Ledger;
