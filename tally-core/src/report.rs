//! Range filtering and aggregate reporting over a slice of transactions.

use chrono::{Duration, NaiveDate};
use std::collections::HashMap;

use crate::transaction::{Category, Transaction};

/// Aggregate totals for a set of transactions.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Summary {
    pub total_income: f64,
    pub total_expense: f64,
    /// total_income - total_expense
    pub net: f64,
}

impl Summary {
    pub fn from_transactions(txns: &[Transaction]) -> Self {
        let mut total_income = 0.0;
        let mut total_expense = 0.0;
        for t in txns {
            match t.category {
                Category::Income => total_income += t.amount,
                Category::Expense => total_expense += t.amount,
            }
        }
        Summary {
            total_income,
            total_expense,
            net: total_income - total_expense,
        }
    }
}

/// Keep transactions dated within `[start, end]`, both ends inclusive,
/// preserving file order. An inverted range yields nothing.
pub fn filter_range(txns: &[Transaction], start: NaiveDate, end: NaiveDate) -> Vec<Transaction> {
    txns.iter()
        .filter(|t| t.date >= start && t.date <= end)
        .cloned()
        .collect()
}

/// One chart point per calendar day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayPoint {
    pub date: NaiveDate,
    pub income: f64,
    pub expense: f64,
}

/// Per-day income and expense over the whole `[start, end]` range, one point
/// per calendar day, days with no activity filled with zero.
pub fn daily_series(txns: &[Transaction], start: NaiveDate, end: NaiveDate) -> Vec<DayPoint> {
    let mut buckets: HashMap<NaiveDate, (f64, f64)> = HashMap::new();
    for t in txns {
        if t.date < start || t.date > end {
            continue;
        }
        let bucket = buckets.entry(t.date).or_default();
        match t.category {
            Category::Income => bucket.0 += t.amount,
            Category::Expense => bucket.1 += t.amount,
        }
    }

    let mut points = Vec::new();
    let mut day = start;
    while day <= end {
        let (income, expense) = buckets.get(&day).copied().unwrap_or_default();
        points.push(DayPoint {
            date: day,
            income,
            expense,
        });
        day += Duration::days(1);
    }
    points
}
