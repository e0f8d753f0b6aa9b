use super::{Account, Amount, Rejection, Timestamp};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionType {
    Deposit,
    Withdrawal,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionType::Deposit => f.write_str("Deposit"),
            TransactionType::Withdrawal => f.write_str("Withdrawal"),
        }
    }
}

/// A single movement on an account.
/// Once registered it is an immutable record of the account history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    typ: TransactionType,
    amount: Amount,
    timestamp: Timestamp,
}

impl Transaction {
    pub fn deposit(amount: Amount, timestamp: Timestamp) -> Self {
        Transaction {
            typ: TransactionType::Deposit,
            amount,
            timestamp,
        }
    }

    pub fn withdrawal(amount: Amount, timestamp: Timestamp) -> Self {
        Transaction {
            typ: TransactionType::Withdrawal,
            amount,
            timestamp,
        }
    }

    pub fn typ(&self) -> TransactionType {
        self.typ
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    /// Validates the transaction against the account and, when accepted, applies it.
    /// Only the balance, the withdrawal counter and the history are touched here,
    /// daily transaction counting belongs to the account operation.
    pub(super) fn register(self, account: &mut Account) -> Result<(), Rejection> {
        if !self.amount.is_positive() {
            return Err(Rejection::InvalidAmount);
        }

        let balance = match self.typ {
            TransactionType::Deposit => account.balance.checked_add(&self.amount)?,
            TransactionType::Withdrawal => {
                if self.amount > account.balance {
                    return Err(Rejection::InsufficientFunds);
                }
                if self.amount > account.limits.per_withdrawal {
                    return Err(Rejection::ExceedsPerWithdrawalLimit);
                }
                if account.withdrawals_today >= account.limits.daily_withdrawals {
                    return Err(Rejection::DailyWithdrawalLimitReached);
                }
                account.balance.checked_sub(&self.amount)?
            }
        };

        account.balance = balance;
        if self.typ == TransactionType::Withdrawal {
            account.withdrawals_today += 1;
        }
        account.history.append(self);

        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}: R$ {}", self.timestamp, self.typ, self.amount)
    }
}
