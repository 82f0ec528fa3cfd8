use anyhow::{anyhow, bail, Result};
use chrono::{Local, NaiveDate};
use std::io::{self, Write};
use tally_core::{parse_date, Category};

fn prompt(label: &str) -> Result<String> {
    print!("{}: ", label);
    io::stdout().flush().ok();
    let mut s = String::new();
    io::stdin().read_line(&mut s)?;
    Ok(s.trim().to_string())
}

/// Parse a date reply. Blank means "today" when a default is allowed.
pub fn parse_date_reply(reply: &str, allow_default: bool, today: NaiveDate) -> Result<NaiveDate> {
    let reply = reply.trim();
    if reply.is_empty() && allow_default {
        return Ok(today);
    }
    parse_date(reply)
}

/// Parse a positive decimal amount.
pub fn parse_amount_reply(reply: &str) -> Result<f64> {
    let reply = reply.trim();
    let amount: f64 = reply
        .parse()
        .map_err(|_| anyhow!("not a number: '{reply}'"))?;
    if !amount.is_finite() || amount <= 0.0 {
        bail!("amount must be a positive number");
    }
    Ok(amount)
}

/// Prompt until a valid `dd-mm-yyyy` date arrives. Blank input returns
/// today's local date when `allow_default` is set.
pub fn get_date(label: &str, allow_default: bool) -> Result<NaiveDate> {
    loop {
        let reply = prompt(label)?;
        match parse_date_reply(&reply, allow_default, Local::now().date_naive()) {
            Ok(d) => return Ok(d),
            Err(e) => println!("{e}"),
        }
    }
}

pub fn get_amount() -> Result<f64> {
    loop {
        let reply = prompt("Enter the amount")?;
        match parse_amount_reply(&reply) {
            Ok(a) => return Ok(a),
            Err(e) => println!("{e}"),
        }
    }
}

pub fn get_category() -> Result<Category> {
    loop {
        let reply = prompt("Enter the category ('i' for Income, 'e' for Expense)")?;
        match reply.parse::<Category>() {
            Ok(c) => return Ok(c),
            Err(e) => println!("{e}"),
        }
    }
}

pub fn get_description() -> Result<String> {
    prompt("Enter a description (optional)")
}

/// Raw menu choice; validation happens at the menu loop.
pub fn get_choice() -> Result<String> {
    prompt("Enter your choice (1-3)")
}

/// Ask a yes/no question; anything starting with 'y' is a yes.
pub fn confirm(label: &str) -> Result<bool> {
    let reply = prompt(label)?;
    Ok(reply.to_lowercase().starts_with('y'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 5).unwrap()
    }

    #[test]
    fn test_blank_date_defaults_to_today() {
        assert_eq!(parse_date_reply("", true, today()).unwrap(), today());
        assert_eq!(parse_date_reply("   ", true, today()).unwrap(), today());
    }

    #[test]
    fn test_blank_date_rejected_without_default() {
        assert!(parse_date_reply("", false, today()).is_err());
    }

    #[test]
    fn test_explicit_date_wins_over_default() {
        let d = parse_date_reply("01-02-2026", true, today()).unwrap();
        assert_eq!(d, NaiveDate::from_ymd_opt(2026, 2, 1).unwrap());
    }

    #[test]
    fn test_malformed_date_rejected() {
        assert!(parse_date_reply("2026/02/01", true, today()).is_err());
        assert!(parse_date_reply("yesterday", true, today()).is_err());
    }

    #[test]
    fn test_amount_accepts_positive_decimals() {
        assert_eq!(parse_amount_reply("42").unwrap(), 42.0);
        assert_eq!(parse_amount_reply(" 19.99 ").unwrap(), 19.99);
    }

    #[test]
    fn test_amount_rejects_zero_negative_and_junk() {
        assert!(parse_amount_reply("0").is_err());
        assert!(parse_amount_reply("-5").is_err());
        assert!(parse_amount_reply("ten").is_err());
        assert!(parse_amount_reply("").is_err());
        assert!(parse_amount_reply("inf").is_err());
    }
}
