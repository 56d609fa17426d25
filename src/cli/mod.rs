//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod entry;
pub mod export;

pub use entry::{handle_add, handle_balance, handle_report, KindArg};
pub use export::{handle_export, ExportFormat};
