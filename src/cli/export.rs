//! CLI command for data export

use clap::ValueEnum;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::error::{LedgerError, LedgerResult};
use crate::export::{export_csv, export_json, export_yaml};
use crate::services::Ledger;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (one row per entry)
    Csv,
    /// JSON format (entries, balance and schema version)
    Json,
    /// YAML format (same document as JSON, human-readable)
    Yaml,
}

/// Handle `export`, writing to `output` or stdout
pub fn handle_export(ledger: &Ledger, format: ExportFormat, output: Option<PathBuf>) -> LedgerResult<()> {
    match output {
        Some(path) => {
            let file = File::create(&path).map_err(|e| {
                LedgerError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write_export(ledger, format, &mut writer)?;
            writer
                .flush()
                .map_err(|e| LedgerError::Export(e.to_string()))?;
            println!("Exported {} entries to: {}", ledger.len(), path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_export(ledger, format, &mut writer)?;
        }
    }

    Ok(())
}

fn write_export<W: Write>(ledger: &Ledger, format: ExportFormat, writer: &mut W) -> LedgerResult<()> {
    match format {
        ExportFormat::Csv => export_csv(ledger, writer),
        ExportFormat::Json => export_json(ledger, writer),
        ExportFormat::Yaml => export_yaml(ledger, writer),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionKind};
    use crate::storage::LedgerStore;
    use tempfile::TempDir;

    #[test]
    fn test_export_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let mut ledger = Ledger::open(LedgerStore::new(temp_dir.path().join("ledger.json"))).unwrap();
        ledger
            .add(TransactionKind::Income, Money::from_cents(100), "x", "")
            .unwrap();

        let out = temp_dir.path().join("out.csv");
        handle_export(&ledger, ExportFormat::Csv, Some(out.clone())).unwrap();

        let text = std::fs::read_to_string(out).unwrap();
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn test_export_to_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let ledger = Ledger::open(LedgerStore::new(temp_dir.path().join("ledger.json"))).unwrap();

        let out = temp_dir.path().join("missing").join("out.json");
        let err = handle_export(&ledger, ExportFormat::Json, Some(out)).unwrap_err();
        assert!(matches!(err, LedgerError::Export(_)));
    }
}
