//! Export module for Cashbook
//!
//! - CSV: ledger entries (spreadsheet-compatible)
//! - JSON: entries plus balance and schema version
//! - YAML: the JSON document in human-readable form

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_csv;
pub use json::{export_json, LedgerExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_yaml;
