use super::Amount;

/// Operating limits applied to a single account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountLimits {
    /// Largest amount allowed in one withdrawal
    pub per_withdrawal: Amount,
    /// Accepted withdrawals allowed per calendar day
    pub daily_withdrawals: u32,
    /// Accepted deposits and withdrawals allowed per calendar day
    pub daily_transactions: u32,
}

impl Default for AccountLimits {
    fn default() -> Self {
        AccountLimits {
            per_withdrawal: Amount::from_cents(50_000),
            daily_withdrawals: 3,
            daily_transactions: 10,
        }
    }
}
