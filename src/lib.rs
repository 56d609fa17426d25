//! Cashbook - single-user personal ledger for the terminal
//!
//! Records income and expense entries, keeps them in a local JSON file and
//! reports a running balance.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data directory resolution and user settings
//! - `error`: Custom error types
//! - `models`: Amounts and transactions
//! - `storage`: JSON file storage layer
//! - `services`: The in-memory ledger
//! - `display`: Report formatting
//! - `export`: CSV, JSON and YAML export
//! - `shell`: Interactive menu
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,no_run
//! use cashbook::config::LedgerPaths;
//! use cashbook::models::{Money, TransactionKind};
//! use cashbook::services::Ledger;
//! use cashbook::storage::LedgerStore;
//!
//! let paths = LedgerPaths::default();
//! let mut ledger = Ledger::open(LedgerStore::new(paths.ledger_file()))?;
//! ledger.add(TransactionKind::Expense, Money::parse("12.50")?, "food", "lunch")?;
//! println!("{}", ledger.balance());
//! # Ok::<(), cashbook::LedgerError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod shell;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
