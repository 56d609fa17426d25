//! Path management for Cashbook
//!
//! ## Path Resolution Order
//!
//! 1. `--data-dir` flag or `CASHBOOK_DATA_DIR` environment variable (if set)
//! 2. The relative directory `data`

use std::path::{Path, PathBuf};

use crate::error::LedgerError;

/// Directory used when no override is given
pub const DEFAULT_DATA_DIR: &str = "data";

/// Manages all paths used by Cashbook
#[derive(Debug, Clone)]
pub struct LedgerPaths {
    /// Directory holding the ledger and settings files
    base_dir: PathBuf,
}

impl LedgerPaths {
    /// Resolve paths from an optional override
    ///
    /// The override normally comes from clap, which has already folded in the
    /// `CASHBOOK_DATA_DIR` environment variable.
    pub fn resolve(data_dir: Option<PathBuf>) -> Self {
        let base_dir = data_dir.unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));
        Self { base_dir }
    }

    /// Create LedgerPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to ledger.json
    pub fn ledger_file(&self) -> PathBuf {
        self.base_dir.join("ledger.json")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("settings.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), LedgerError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| LedgerError::Io(format!("Failed to create data directory: {}", e)))
    }
}

impl Default for LedgerPaths {
    fn default() -> Self {
        Self::resolve(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_is_relative_data_dir() {
        let paths = LedgerPaths::default();
        assert_eq!(paths.ledger_file(), PathBuf::from("data").join("ledger.json"));
    }

    #[test]
    fn test_override() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::resolve(Some(temp_dir.path().to_path_buf()));

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.ledger_file(), temp_dir.path().join("ledger.json"));
        assert_eq!(paths.settings_file(), temp_dir.path().join("settings.json"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().join("nested").join("data"));

        paths.ensure_directories().unwrap();
        assert!(paths.base_dir().exists());
    }
}
