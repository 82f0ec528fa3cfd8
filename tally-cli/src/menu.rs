use anyhow::Result;
use chrono::NaiveDate;
use tally_core::{daily_series, filter_range, format_date, Ledger, Summary, Transaction};

use crate::chart;
use crate::input;
use crate::state::Config;

/// The interactive numbered menu; loops until the user picks Exit.
pub fn run(ledger: &Ledger, config: &Config) -> Result<()> {
    loop {
        println!();
        println!("1. Add a new transaction");
        println!("2. View summary");
        println!("3. Exit");

        let choice = input::get_choice()?;
        match choice.as_str() {
            "1" => add_transaction(ledger, config)?,
            "2" => view_summary(ledger, config)?,
            "3" => {
                println!("Goodbye");
                return Ok(());
            }
            other => println!("Invalid choice '{other}', enter 1-3"),
        }
    }
}

fn add_transaction(ledger: &Ledger, config: &Config) -> Result<()> {
    let date = input::get_date(
        "Enter the date of the transaction (dd-mm-yyyy, blank for today)",
        true,
    )?;
    let amount = input::get_amount()?;
    let category = input::get_category()?;
    let description = input::get_description()?;

    let tx = Transaction::new(date, amount, category, description);
    ledger.append(&tx)?;
    println!(
        "Entry added: {} {}{:.2} on {}",
        tx.category,
        config.currency,
        tx.amount,
        format_date(tx.date)
    );
    Ok(())
}

fn view_summary(ledger: &Ledger, config: &Config) -> Result<()> {
    let start = input::get_date("Enter a start date (dd-mm-yyyy)", false)?;
    let end = input::get_date("Enter an end date (dd-mm-yyyy)", false)?;

    let txns = ledger.load()?;
    let in_range = filter_range(&txns, start, end);
    if in_range.is_empty() {
        println!("No transactions found in the given date range");
        return Ok(());
    }

    print_report(&in_range, start, end, config);

    if input::confirm("Do you want to see a chart? (y/n)")? {
        chart::show(&daily_series(&in_range, start, end))?;
    }
    Ok(())
}

/// Aligned transaction listing followed by the totals block. Shared between
/// the menu and the `report` subcommand.
pub fn print_report(txns: &[Transaction], start: NaiveDate, end: NaiveDate, config: &Config) {
    println!();
    println!(
        "Transactions from {} to {}",
        format_date(start),
        format_date(end)
    );
    println!(
        "{:<12} {:>12} {:<8} {}",
        "Date", "Amount", "Category", "Description"
    );
    for t in txns {
        println!(
            "{:<12} {:>12} {:<8} {}",
            format_date(t.date),
            format!("{}{:.2}", config.currency, t.amount),
            t.category.to_string(),
            t.description
        );
    }

    let summary = Summary::from_transactions(txns);
    println!();
    println!("Summary:");
    println!("Total income:  {}{:.2}", config.currency, summary.total_income);
    println!("Total expense: {}{:.2}", config.currency, summary.total_expense);
    println!("Net balance:   {}{:.2}", config.currency, summary.net);
}
