//! tally-core: transaction model, flat-file ledger store, and reporting.

pub mod report;
pub mod store;
pub mod transaction;

pub use report::{daily_series, filter_range, DayPoint, Summary};
pub use store::Ledger;
pub use transaction::{format_date, parse_date, Category, Transaction, DATE_FORMAT};
