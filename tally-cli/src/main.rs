use anyhow::{bail, Result};
use chrono::Local;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tally_core::{daily_series, filter_range, parse_date, Category, Ledger, Transaction};

mod chart;
mod input;
mod menu;
mod state;

#[derive(Parser, Debug)]
#[command(name = "tally", version, about = "Append-only personal finance ledger")]
struct Cli {
    /// Ledger file (default: ~/.tally/ledger.csv)
    #[arg(long, global = true)]
    ledger: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Append one transaction without entering the menu
    Add {
        /// Transaction date, dd-mm-yyyy (default: today)
        #[arg(long)]
        date: Option<String>,

        /// Positive amount
        #[arg(long)]
        amount: f64,

        /// income or expense (also i/e)
        #[arg(long)]
        category: Category,

        /// Free-text description
        #[arg(long, default_value = "")]
        description: String,
    },

    /// Print transactions and totals for a date range
    Report {
        /// Start date, dd-mm-yyyy
        #[arg(long)]
        start: String,

        /// End date, dd-mm-yyyy
        #[arg(long)]
        end: String,

        /// Draw the income/expense chart after the summary
        #[arg(long)]
        chart: bool,
    },

    /// Set the currency symbol shown in reports
    Currency {
        /// e.g. $, €, ₹
        symbol: String,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = state::read_config()?;

    let ledger_path = match cli.ledger {
        Some(p) => p,
        None => state::default_ledger_path()?,
    };
    let ledger = Ledger::init(&ledger_path)?;

    match cli.command {
        Some(Command::Add {
            date,
            amount,
            category,
            description,
        }) => {
            let date = match date {
                Some(s) => parse_date(&s)?,
                None => Local::now().date_naive(),
            };
            if !amount.is_finite() || amount <= 0.0 {
                bail!("amount must be a positive number, got {amount}");
            }

            let tx = Transaction::new(date, amount, category, description);
            ledger.append(&tx)?;
            println!(
                "Added {} {}{:.2} on {} to {}",
                tx.category,
                config.currency,
                tx.amount,
                tally_core::format_date(tx.date),
                ledger.path().display()
            );
        }

        Some(Command::Report { start, end, chart }) => {
            let start = parse_date(&start)?;
            let end = parse_date(&end)?;

            let txns = ledger.load()?;
            let in_range = filter_range(&txns, start, end);
            if in_range.is_empty() {
                println!("No transactions found in the given date range");
                return Ok(());
            }

            menu::print_report(&in_range, start, end, &config);

            if chart {
                chart::show(&daily_series(&in_range, start, end))?;
            }
        }

        Some(Command::Currency { symbol }) => {
            let symbol = symbol.trim().to_string();
            if symbol.is_empty() {
                bail!("currency symbol cannot be empty");
            }
            let config = state::Config { currency: symbol };
            state::write_config(&config)?;
            println!("Currency symbol set to {}", config.currency);
        }

        None => menu::run(&ledger, &config)?,
    }

    Ok(())
}
