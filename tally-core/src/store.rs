//! Flat-file ledger store: a header row plus one CSV row per transaction.
//! Append-only; insertion order equals file order.

use anyhow::{Context, Result};
use log::warn;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use crate::transaction::Transaction;

/// Column header written when a new ledger file is created.
pub const HEADER: [&str; 4] = ["Date", "Amount", "Category", "Description"];

/// Handle to the ledger file. The file is opened, written, and closed per
/// operation; no state is cached in memory.
#[derive(Debug)]
pub struct Ledger {
    path: PathBuf,
}

impl Ledger {
    /// Open the ledger at `path`, creating an empty store (header only) if
    /// the file does not exist. An existing file is left untouched.
    pub fn init(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("create {}", parent.display()))?;
                }
            }
            let mut wtr = csv::WriterBuilder::new()
                .from_path(&path)
                .with_context(|| format!("create {}", path.display()))?;
            wtr.write_record(HEADER)?;
            wtr.flush()?;
        }

        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one transaction to the end of the file.
    pub fn append(&self, tx: &Transaction) -> Result<()> {
        let file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .with_context(|| format!("open {}", self.path.display()))?;

        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        wtr.serialize(tx)
            .with_context(|| format!("write {}", self.path.display()))?;
        wtr.flush()?;
        Ok(())
    }

    /// Read every transaction in file order. Rows that fail to parse are
    /// skipped with a warning rather than aborting the load.
    pub fn load(&self) -> Result<Vec<Transaction>> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(&self.path)
            .with_context(|| format!("open {}", self.path.display()))?;

        let mut txns = Vec::new();
        for result in rdr.deserialize() {
            match result {
                Ok(tx) => txns.push(tx),
                Err(e) => warn!("skipping unreadable ledger row: {e}"),
            }
        }
        Ok(txns)
    }
}
