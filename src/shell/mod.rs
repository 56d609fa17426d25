//! Interactive menu shell
//!
//! A thin text front end over [`Ledger`]. Input and output are generic so the
//! shell can be driven from tests as well as from a terminal.

use std::io::{BufRead, Write};

use log::debug;

use crate::error::LedgerResult;
use crate::models::{Money, TransactionKind};
use crate::services::Ledger;

const BANNER_WIDTH: usize = 30;

/// The interactive menu loop
pub struct Shell<'a, R, W> {
    ledger: &'a mut Ledger,
    currency_symbol: String,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    /// Create a new shell over `ledger`
    pub fn new(ledger: &'a mut Ledger, currency_symbol: impl Into<String>, input: R, output: W) -> Self {
        Self {
            ledger,
            currency_symbol: currency_symbol.into(),
            input,
            output,
        }
    }

    /// Run until the user picks exit or input ends
    pub fn run(&mut self) -> LedgerResult<()> {
        loop {
            self.print_menu()?;

            let Some(choice) = self.prompt("Choose an option (1-4): ")? else {
                debug!("Input closed, leaving shell");
                break;
            };

            match choice.as_str() {
                "1" => self.record(TransactionKind::Income)?,
                "2" => self.record(TransactionKind::Expense)?,
                "3" => self.show_report()?,
                "4" => {
                    writeln!(self.output, "Goodbye!")?;
                    break;
                }
                _ => writeln!(self.output, "Invalid choice, please try again.")?,
            }
        }

        Ok(())
    }

    fn print_menu(&mut self) -> LedgerResult<()> {
        let rule = "*".repeat(BANNER_WIDTH);
        writeln!(self.output)?;
        writeln!(self.output, "{}", rule)?;
        writeln!(self.output, "   Cashbook personal ledger")?;
        writeln!(self.output, "{}", rule)?;
        writeln!(self.output, "1. Record income")?;
        writeln!(self.output, "2. Record expense")?;
        writeln!(self.output, "3. View ledger")?;
        writeln!(self.output, "4. Exit")?;
        Ok(())
    }

    /// Print `text` and read one trimmed line; `None` on end of input
    fn prompt(&mut self, text: &str) -> LedgerResult<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn record(&mut self, kind: TransactionKind) -> LedgerResult<()> {
        let Some(amount_text) = self.prompt("Amount: ")? else {
            return Ok(());
        };

        let amount = match Money::parse(&amount_text) {
            Ok(amount) => amount,
            Err(_) => {
                writeln!(self.output, "Input error: the amount must be a number.")?;
                return Ok(());
            }
        };

        let Some(category) = self.prompt("Category (e.g. food, salary): ")? else {
            return Ok(());
        };
        let Some(description) = self.prompt("Description: ")? else {
            return Ok(());
        };

        match self.ledger.add(kind, amount, category, description) {
            Ok(_) => writeln!(self.output, "Transaction saved.")?,
            Err(e) => writeln!(self.output, "Could not save transaction: {}", e)?,
        }

        Ok(())
    }

    fn show_report(&mut self) -> LedgerResult<()> {
        let rule = "=".repeat(10);
        writeln!(self.output)?;
        writeln!(self.output, "{} Ledger {}", rule, rule)?;
        for line in self.ledger.report(&self.currency_symbol) {
            writeln!(self.output, "{}", line)?;
        }
        writeln!(self.output, "{}", "=".repeat(BANNER_WIDTH))?;
        Ok(())
    }
}
