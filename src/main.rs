use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use cashbook::cli::{handle_add, handle_balance, handle_export, handle_report, ExportFormat, KindArg};
use cashbook::config::{LedgerPaths, Settings};
use cashbook::services::Ledger;
use cashbook::shell::Shell;
use cashbook::storage::LedgerStore;

#[derive(Parser)]
#[command(
    name = "cashbook",
    version,
    about = "Personal income and expense ledger",
    long_about = "Cashbook records income and expense entries in a local JSON \
                  file and reports your running balance. Run it without a \
                  subcommand for the interactive menu."
)]
struct Cli {
    /// Directory holding ledger.json and settings.json
    #[arg(long, env = "CASHBOOK_DATA_DIR", global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive menu (default)
    #[command(alias = "menu")]
    Shell,

    /// Record an income or expense entry
    Add {
        /// Entry kind
        #[arg(value_enum)]
        kind: KindArg,
        /// Amount, e.g. "12.50"
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category label
        #[arg(short, long, default_value = "")]
        category: String,
        /// Free-text note
        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// Show every entry and the balance
    Report,

    /// Show the current balance
    Balance,

    /// Export the ledger
    Export {
        /// Export format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: ExportFormat,
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show current configuration and paths
    Config {
        /// Store a new currency symbol for reports
        #[arg(long)]
        currency: Option<String>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let paths = LedgerPaths::resolve(cli.data_dir);
    let mut settings = Settings::load_or_create(&paths)?;

    if let Some(Commands::Config {
        currency: Some(currency),
    }) = &cli.command
    {
        settings.currency_symbol = currency.clone();
        settings.save(&paths)?;
        println!("Currency symbol set to {}", settings.currency_symbol);
    }

    let symbol = settings.currency_symbol.as_str();

    let mut ledger = Ledger::open(LedgerStore::new(paths.ledger_file()))?;

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            Shell::new(&mut ledger, symbol, stdin.lock(), stdout.lock()).run()?;
        }
        Commands::Add {
            kind,
            amount,
            category,
            description,
        } => handle_add(&mut ledger, kind, &amount, category, description, symbol)?,
        Commands::Report => handle_report(&ledger, symbol),
        Commands::Balance => handle_balance(&ledger, symbol),
        Commands::Export { format, output } => handle_export(&ledger, format, output)?,
        Commands::Config { .. } => {
            println!("Cashbook Configuration");
            println!("======================");
            println!("Data directory: {}", paths.base_dir().display());
            println!("Ledger file:    {}", paths.ledger_file().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Entries:         {}", ledger.len());
        }
    }

    Ok(())
}
