use serde::{Serialize, Serializer};
use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;
use thiserror::Error;

/// Monetary amount in the account currency.
/// It is stored internally as an i64 number of cents in order to avoid floating point rounding error.
/// The Amount precision is two places past the decimal, inputs with more digits are refused.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount {
    cents: i64,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmountError {
    #[error("Amount parsing error: {0}")]
    Parse(String),

    #[error("Overflow error while creating Amount")]
    Overflow,

    #[error("Underflow error while creating Amount")]
    Underflow,
}

impl Amount {
    pub const ZERO: Amount = Amount { cents: 0 };

    pub const fn from_cents(cents: i64) -> Self {
        Amount { cents }
    }

    pub const fn cents(&self) -> i64 {
        self.cents
    }

    pub const fn is_positive(&self) -> bool {
        self.cents > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.cents < 0
    }

    pub fn checked_add(&self, other: &Amount) -> Result<Amount, AmountError> {
        match self.cents.checked_add(other.cents) {
            Some(total) => Ok(Amount { cents: total }),
            None => Err(AmountError::Overflow),
        }
    }

    pub fn checked_sub(&self, other: &Amount) -> Result<Amount, AmountError> {
        match self.cents.checked_sub(other.cents) {
            Some(total) => Ok(Amount { cents: total }),
            None => Err(AmountError::Underflow),
        }
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if !s.chars().any(|c| c.is_ascii_digit()) {
            return Err(AmountError::Parse(s.into()));
        }

        // Both "10.50" and "10,50" are accepted
        let normalized = s.replace(',', ".");
        let mut parts = normalized.split('.');
        let left_part = parts.next().unwrap_or_default();
        let decimal_part = parts.next();

        if parts.next().is_some() {
            return Err(AmountError::Parse(s.into()));
        }

        // Integer part may be empty (ex: ".05") or a bare sign (ex: "-.05")
        let left_str = match left_part {
            "" => "0",
            "-" => "-0",
            "+" => "0",
            other => other,
        };

        let cents = match decimal_part {
            None => {
                let parsed = parse_i64(left_str, s)?;
                parsed.checked_mul(100).ok_or(AmountError::Overflow)?
            }
            Some(dec_str) => {
                // More than two fractional digits would not be the amount the user typed
                if dec_str.len() > 2 || !dec_str.chars().all(|c| c.is_ascii_digit()) {
                    return Err(AmountError::Parse(s.into()));
                }

                parse_i64(&format!("{left_str}{dec_str:0<2}"), s)?
            }
        };

        Ok(Self { cents })
    }
}

fn parse_i64(digits: &str, input: &str) -> Result<i64, AmountError> {
    digits.parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow => AmountError::Overflow,
        IntErrorKind::NegOverflow => AmountError::Underflow,
        _ => AmountError::Parse(input.into()),
    })
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let abs_val = self.cents.unsigned_abs();
        let sign = if self.is_negative() { "-" } else { "" };

        write!(f, "{}{}.{:02}", sign, abs_val / 100, abs_val % 100)
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
