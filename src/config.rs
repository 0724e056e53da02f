use alloy_primitives::{address, Address};
use log::{error, warn};
use std::str::FromStr;

pub const TRANSACTION_COUNT_KEY: &str = "transactionCount";

/// Gas allowance for a plain value transfer (21000).
pub const TRANSFER_GAS: &str = "0x5208";

const DEFAULT_CONTRACT_ADDRESS: Address = address!("0x8b6f5b3e8d8e6fa2c2b1d4b8a3b9f9e4e7a2c1d0");
const DEFAULT_RECEIPT_POLL_MS: u32 = 1_000;

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub contract_address: Address,
    pub receipt_poll_interval_ms: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            contract_address: DEFAULT_CONTRACT_ADDRESS,
            receipt_poll_interval_ms: DEFAULT_RECEIPT_POLL_MS,
        }
    }
}

impl Config {
    /// The placeholder address has no contract deployed behind it.
    pub fn uses_default_contract(&self) -> bool {
        self.contract_address == DEFAULT_CONTRACT_ADDRESS
    }

    /// Reads the overrides baked in at build time.
    pub fn from_env() -> Self {
        Self::from_overrides(
            option_env!("TRANSFER_CONTRACT_ADDRESS"),
            option_env!("TRANSFER_RECEIPT_POLL_MS"),
        )
    }

    pub fn from_overrides(contract: Option<&str>, poll_ms: Option<&str>) -> Self {
        let mut config = Self::default();

        if contract.map_or(true, |s| s.trim().is_empty()) {
            warn!(
                "TRANSFER_CONTRACT_ADDRESS not set, using placeholder contract {}",
                DEFAULT_CONTRACT_ADDRESS
            );
        }

        if let Some(raw) = contract.map(str::trim).filter(|s| !s.is_empty()) {
            match Address::from_str(raw) {
                Ok(addr) => config.contract_address = addr,
                Err(e) => error!("Invalid TRANSFER_CONTRACT_ADDRESS {}: {}", raw, e),
            }
        }

        if let Some(raw) = poll_ms.map(str::trim).filter(|s| !s.is_empty()) {
            match raw.parse::<u32>() {
                Ok(ms) if ms > 0 => config.receipt_poll_interval_ms = ms,
                _ => error!("Invalid TRANSFER_RECEIPT_POLL_MS {}", raw),
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_defaults() {
        let config = Config::from_overrides(
            Some("0x0000000000000000000000000000000000000001"),
            Some("250"),
        );
        assert_eq!(config.contract_address, Address::with_last_byte(1));
        assert_eq!(config.receipt_poll_interval_ms, 250);
    }

    #[test]
    fn default_contract_is_flagged() {
        assert!(Config::from_overrides(None, None).uses_default_contract());
        let config =
            Config::from_overrides(Some("0x0000000000000000000000000000000000000001"), None);
        assert!(!config.uses_default_contract());
    }

    #[test]
    fn bad_overrides_fall_back() {
        let config = Config::from_overrides(Some("not-an-address"), Some("0"));
        assert_eq!(config, Config::default());

        let config = Config::from_overrides(Some("  "), None);
        assert_eq!(config, Config::default());
    }
}
