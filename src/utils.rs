use crate::error::TransactionError;
use alloy_primitives::utils::{format_ether, parse_ether};
use alloy_primitives::{Address, U256};
use chrono::{DateTime, Local, TimeZone};
use std::fmt::Display;
use std::str::FromStr;

const TIMESTAMP_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

pub fn ether_to_wei(amount: &str) -> Result<U256, TransactionError> {
    let amount = amount.trim();
    if amount.is_empty() {
        return Err(TransactionError::InvalidAmount("amount is empty".into()));
    }
    parse_ether(amount).map_err(|e| TransactionError::InvalidAmount(format!("{amount}: {e}")))
}

pub fn wei_to_ether(wei: U256) -> f64 {
    format_ether(wei).parse::<f64>().unwrap_or_default()
}

pub fn parse_address(raw: &str) -> Result<Address, TransactionError> {
    let raw = raw.trim();
    Address::from_str(raw).map_err(|e| TransactionError::InvalidAddress(format!("{raw}: {e}")))
}

/// Unix seconds rendered in the browser's local time zone.
pub fn format_timestamp(secs: u64) -> String {
    format_timestamp_in(secs, &Local)
}

pub fn format_timestamp_in<Tz>(secs: u64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    i64::try_from(secs)
        .ok()
        .and_then(|s| DateTime::from_timestamp(s, 0))
        .map(|utc| utc.with_timezone(tz).format(TIMESTAMP_FORMAT).to_string())
        .unwrap_or_else(|| "Invalid Date".to_string())
}

pub fn format_eth(amount: f64) -> String {
    format!("{} ETH", amount)
}

pub fn shorten_address(address: &str) -> String {
    if address.len() <= 10 || !address.is_ascii() {
        return address.to_string();
    }
    format!("{}...{}", &address[..5], &address[address.len() - 4..])
}
