//! Transaction model: one ledger row.

use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Wire format for dates in the ledger file (`17-03-2026`).
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// Income or Expense label for a transaction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    Income,
    Expense,
}

impl FromStr for Category {
    type Err = anyhow::Error;

    /// Case-insensitive; accepts the single-letter shortcuts `i` / `e`.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "i" | "income" => Ok(Category::Income),
            "e" | "expense" => Ok(Category::Expense),
            other => Err(anyhow!(
                "unknown category '{other}' (expected income or expense)"
            )),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Income => write!(f, "Income"),
            Category::Expense => write!(f, "Expense"),
        }
    }
}

/// One ledger row. Immutable once written; there is no update or delete.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    /// Calendar day of the transaction
    #[serde(rename = "Date", with = "ledger_date")]
    pub date: NaiveDate,
    /// Positive decimal; the sign of the flow lives in `category`
    #[serde(rename = "Amount")]
    pub amount: f64,
    /// Income or Expense
    #[serde(rename = "Category")]
    pub category: Category,
    /// Free text, may be empty
    #[serde(rename = "Description")]
    pub description: String,
}

impl Transaction {
    pub fn new(
        date: NaiveDate,
        amount: f64,
        category: Category,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date,
            amount,
            category,
            description: description.into(),
        }
    }

    /// Amount with the category's sign applied: positive for income,
    /// negative for expense.
    pub fn signed_amount(&self) -> f64 {
        match self.category {
            Category::Income => self.amount,
            Category::Expense => -self.amount,
        }
    }
}

/// Parse a ledger date string (`dd-mm-yyyy`).
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map_err(|_| anyhow!("invalid date '{s}' (expected dd-mm-yyyy)"))
}

/// Format a date in the ledger wire format.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Serde bridge for the `dd-mm-yyyy` wire format.
mod ledger_date {
    use super::DATE_FORMAT;
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(DATE_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).map_err(serde::de::Error::custom)
    }
}
