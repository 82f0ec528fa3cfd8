use chrono::NaiveDate;
use std::fs;
use std::io::Write;
use tally_core::{filter_range, Category, Ledger, Summary, Transaction};
use tempfile::TempDir;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn scratch_ledger(dir: &TempDir) -> Ledger {
    Ledger::init(dir.path().join("ledger.csv")).unwrap()
}

#[test]
fn test_init_creates_header_only_store() {
    let dir = TempDir::new().unwrap();
    let ledger = scratch_ledger(&dir);

    let contents = fs::read_to_string(ledger.path()).unwrap();
    assert_eq!(contents, "Date,Amount,Category,Description\n");
    assert!(ledger.load().unwrap().is_empty());
}

#[test]
fn test_init_leaves_existing_file_untouched() {
    let dir = TempDir::new().unwrap();
    let ledger = scratch_ledger(&dir);
    ledger
        .append(&Transaction::new(
            date(2026, 5, 1),
            75.0,
            Category::Expense,
            "utilities",
        ))
        .unwrap();

    // Re-open the same path; the existing row must survive.
    let reopened = Ledger::init(ledger.path()).unwrap();
    assert_eq!(reopened.load().unwrap().len(), 1);
}

#[test]
fn test_append_then_load_roundtrip() {
    let dir = TempDir::new().unwrap();
    let ledger = scratch_ledger(&dir);

    let tx = Transaction::new(
        date(2026, 2, 14),
        1234.56,
        Category::Income,
        "freelance invoice, net",
    );
    ledger.append(&tx).unwrap();

    let loaded = ledger.load().unwrap();
    assert_eq!(loaded, vec![tx]);
}

#[test]
fn test_load_preserves_file_order() {
    let dir = TempDir::new().unwrap();
    let ledger = scratch_ledger(&dir);

    // Out of date order on purpose; file order must win.
    let txns = vec![
        Transaction::new(date(2026, 6, 10), 40.0, Category::Expense, "fuel"),
        Transaction::new(date(2026, 6, 1), 900.0, Category::Income, "stipend"),
        Transaction::new(date(2026, 6, 5), 12.5, Category::Expense, "lunch"),
    ];
    for tx in &txns {
        ledger.append(tx).unwrap();
    }

    assert_eq!(ledger.load().unwrap(), txns);
}

#[test]
fn test_malformed_rows_are_skipped() {
    let dir = TempDir::new().unwrap();
    let ledger = scratch_ledger(&dir);
    ledger
        .append(&Transaction::new(
            date(2026, 7, 3),
            18.0,
            Category::Expense,
            "cinema",
        ))
        .unwrap();

    // Hand-corrupt the file: bad date, bad amount, bad category.
    let mut file = fs::OpenOptions::new()
        .append(true)
        .open(ledger.path())
        .unwrap();
    writeln!(file, "31-13-2026,5.00,Expense,bad month").unwrap();
    writeln!(file, "01-07-2026,abc,Expense,bad amount").unwrap();
    writeln!(file, "02-07-2026,9.99,Groceries,bad category").unwrap();

    let loaded = ledger.load().unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].description, "cinema");
}

#[test]
fn test_three_record_fixture_balance() {
    let dir = TempDir::new().unwrap();
    let ledger = scratch_ledger(&dir);

    ledger
        .append(&Transaction::new(
            date(2026, 1, 2),
            1500.0,
            Category::Income,
            "salary",
        ))
        .unwrap();
    ledger
        .append(&Transaction::new(
            date(2026, 1, 15),
            600.0,
            Category::Expense,
            "rent",
        ))
        .unwrap();
    ledger
        .append(&Transaction::new(
            date(2026, 1, 20),
            150.0,
            Category::Expense,
            "groceries",
        ))
        .unwrap();

    let loaded = ledger.load().unwrap();
    let summary = Summary::from_transactions(&loaded);
    assert_eq!(summary.total_income, 1500.0);
    assert_eq!(summary.total_expense, 750.0);
    assert_eq!(summary.net, 750.0);
}

#[test]
fn test_range_excluding_all_records_is_empty() {
    let dir = TempDir::new().unwrap();
    let ledger = scratch_ledger(&dir);
    ledger
        .append(&Transaction::new(
            date(2026, 1, 2),
            1500.0,
            Category::Income,
            "salary",
        ))
        .unwrap();

    let loaded = ledger.load().unwrap();
    let kept = filter_range(&loaded, date(2025, 1, 1), date(2025, 12, 31));
    assert!(kept.is_empty());
}
