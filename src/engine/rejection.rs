use super::AmountError;
use thiserror::Error;

/// Why a deposit or withdrawal was not accepted.
/// None of these are faults: the account is left untouched and the caller may try again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("amount must be greater than zero")]
    InvalidAmount,

    #[error("insufficient funds")]
    InsufficientFunds,

    #[error("amount exceeds the per-withdrawal limit")]
    ExceedsPerWithdrawalLimit,

    #[error("daily withdrawal limit reached")]
    DailyWithdrawalLimitReached,

    #[error("daily transaction limit reached")]
    DailyTransactionLimitReached,

    #[error("balance out of range: {0}")]
    Overflow(#[from] AmountError),
}
