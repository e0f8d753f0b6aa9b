use crate::engine::{AccountLimits, Amount, AmountError};
use std::env;
use std::str::FromStr;
use thiserror::Error;

pub const DEFAULT_AGENCY: &str = "0001";

pub const AGENCY_VAR: &str = "BANK_AGENCY";
pub const PER_WITHDRAWAL_LIMIT_VAR: &str = "BANK_PER_WITHDRAWAL_LIMIT";
pub const DAILY_WITHDRAWALS_VAR: &str = "BANK_DAILY_WITHDRAWALS";
pub const DAILY_TRANSACTIONS_VAR: &str = "BANK_DAILY_TRANSACTIONS";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: {source}")]
    Amount {
        var: &'static str,
        #[source]
        source: AmountError,
    },

    #[error("{var}: expected a positive integer, got {value:?}")]
    Count { var: &'static str, value: String },

    #[error("{var}: must be greater than zero")]
    NotPositive { var: &'static str },

    #[error("BANK_AGENCY: must not be empty")]
    EmptyAgency,
}

/// Settings shared by every account the bank opens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankConfig {
    pub agency: String,
    pub limits: AccountLimits,
}

impl Default for BankConfig {
    fn default() -> Self {
        BankConfig {
            agency: DEFAULT_AGENCY.into(),
            limits: AccountLimits::default(),
        }
    }
}

impl BankConfig {
    /// Defaults overridden by the `BANK_*` environment variables that are set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = BankConfig::default();

        if let Some(agency) = lookup(AGENCY_VAR) {
            let agency = agency.trim();
            if agency.is_empty() {
                return Err(ConfigError::EmptyAgency);
            }
            config.agency = agency.into();
        }

        if let Some(raw) = lookup(PER_WITHDRAWAL_LIMIT_VAR) {
            let limit = Amount::from_str(&raw).map_err(|source| ConfigError::Amount {
                var: PER_WITHDRAWAL_LIMIT_VAR,
                source,
            })?;
            if !limit.is_positive() {
                return Err(ConfigError::NotPositive {
                    var: PER_WITHDRAWAL_LIMIT_VAR,
                });
            }
            config.limits.per_withdrawal = limit;
        }

        if let Some(raw) = lookup(DAILY_WITHDRAWALS_VAR) {
            config.limits.daily_withdrawals = parse_count(DAILY_WITHDRAWALS_VAR, &raw)?;
        }

        if let Some(raw) = lookup(DAILY_TRANSACTIONS_VAR) {
            config.limits.daily_transactions = parse_count(DAILY_TRANSACTIONS_VAR, &raw)?;
        }

        log::debug!("Loaded configuration: {config:?}");
        Ok(config)
    }
}

fn parse_count(var: &'static str, raw: &str) -> Result<u32, ConfigError> {
    let count = raw.trim().parse::<u32>().map_err(|_| ConfigError::Count {
        var,
        value: raw.into(),
    })?;
    if count == 0 {
        return Err(ConfigError::NotPositive { var });
    }
    Ok(count)
}
