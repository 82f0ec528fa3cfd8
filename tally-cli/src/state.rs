use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub fn tally_home() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".tally"))
}

pub fn ensure_tally_home() -> Result<PathBuf> {
    let dir = tally_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

pub fn default_ledger_path() -> Result<PathBuf> {
    Ok(ensure_tally_home()?.join("ledger.csv"))
}

/// Display preferences. The ledger itself stays currency-agnostic; this only
/// affects how amounts are printed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            currency: default_currency(),
        }
    }
}

fn default_currency() -> String {
    "$".to_string()
}

pub fn config_path() -> Result<PathBuf> {
    Ok(ensure_tally_home()?.join("config.json"))
}

/// Missing config yields the defaults without writing anything.
pub fn read_config() -> Result<Config> {
    let p = config_path()?;
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    Ok(serde_json::from_str(&s)?)
}

pub fn write_config(config: &Config) -> Result<()> {
    let p = config_path()?;
    let json = serde_json::to_string_pretty(config)?;
    fs::write(&p, json).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}
