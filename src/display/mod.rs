//! Display formatting for terminal output

pub mod report;

pub use report::{format_balance_line, format_transaction_line, NO_RECORDS};
