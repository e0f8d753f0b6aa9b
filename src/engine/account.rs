use super::{
    AccountLimits, AccountSnapshot, Amount, Clock, Rejection, Transaction, TransactionHistory,
};
use chrono::NaiveDate;
use std::rc::Rc;

/// Identifies the client an account belongs to.
/// The account only keeps a copy of these, it does not own the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountOwner {
    pub id: String,
    pub name: String,
}

// Client Account
#[derive(Debug)]
pub struct Account {
    agency: String,
    number: u32, // Unique
    owner: AccountOwner,
    pub(super) balance: Amount,
    pub(super) limits: AccountLimits,
    pub(super) withdrawals_today: u32,
    transactions_today: u32,
    last_activity: Option<NaiveDate>,
    pub(super) history: TransactionHistory,
    clock: Rc<dyn Clock>,
}

impl Account {
    pub fn new(
        agency: impl Into<String>,
        number: u32,
        owner: AccountOwner,
        limits: AccountLimits,
        clock: Rc<dyn Clock>,
    ) -> Self {
        Account {
            agency: agency.into(),
            number,
            owner,
            balance: Amount::ZERO,
            limits,
            withdrawals_today: 0,
            transactions_today: 0,
            last_activity: None,
            history: TransactionHistory::new(),
            clock,
        }
    }

    pub fn agency(&self) -> &str {
        &self.agency
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn owner(&self) -> &AccountOwner {
        &self.owner
    }

    pub fn balance(&self) -> Amount {
        self.balance
    }

    pub fn limits(&self) -> &AccountLimits {
        &self.limits
    }

    pub fn withdrawals_today(&self) -> u32 {
        self.withdrawals_today
    }

    pub fn transactions_today(&self) -> u32 {
        self.transactions_today
    }

    pub fn last_activity(&self) -> Option<NaiveDate> {
        self.last_activity
    }

    pub fn history(&self) -> &TransactionHistory {
        &self.history
    }

    /// Returns whether the deposit was accepted.
    pub fn deposit(&mut self, amount: Amount) -> bool {
        self.try_deposit(amount).is_ok()
    }

    /// Returns whether the withdrawal was accepted.
    pub fn withdraw(&mut self, amount: Amount) -> bool {
        self.try_withdraw(amount).is_ok()
    }

    pub fn try_deposit(&mut self, amount: Amount) -> Result<(), Rejection> {
        let transaction = Transaction::deposit(amount, self.clock.now());
        self.apply(transaction)
    }

    pub fn try_withdraw(&mut self, amount: Amount) -> Result<(), Rejection> {
        let transaction = Transaction::withdrawal(amount, self.clock.now());
        self.apply(transaction)
    }

    fn apply(&mut self, transaction: Transaction) -> Result<(), Rejection> {
        let typ = transaction.typ();
        let amount = transaction.amount();
        let day = transaction.timestamp().date();

        if let Err(rejection) = transaction.register(self) {
            log::warn!(
                "{typ} of {amount} rejected on account {}: {rejection}",
                self.number
            );
            return Err(rejection);
        }

        // Daily bookkeeping is kept out of the transaction itself
        self.transactions_today += 1;
        self.last_activity = Some(day);

        log::info!(
            "{typ} of {amount} accepted on account {}, balance is now {}",
            self.number,
            self.balance
        );
        Ok(())
    }

    /// Zeroes both daily counters when the calendar day changed since the last counted transaction.
    /// Callers run this at the start of every operation cycle, deposit and withdraw never do.
    pub fn reset_daily_counters_if_new_day(&mut self) {
        let today = self.clock.today();
        if self.last_activity == Some(today) {
            return;
        }

        log::debug!(
            "New day {today} for account {}, resetting daily counters",
            self.number
        );
        self.last_activity = Some(today);
        self.withdrawals_today = 0;
        self.transactions_today = 0;
    }

    /// Gate for the daily transaction limit.
    /// It is up to the caller to check it before invoking deposit or withdraw.
    pub fn check_daily_transaction_limit(&self) -> Result<(), Rejection> {
        if self.transactions_today >= self.limits.daily_transactions {
            return Err(Rejection::DailyTransactionLimitReached);
        }
        Ok(())
    }

    pub fn statement(&self) -> String {
        format!(
            "Client: {} | Account: {}\n\
             ================ STATEMENT ================\n\
             {}\
             ===========================================\n\
             Balance: R$ {}\n",
            self.owner.name, self.number, self.history, self.balance
        )
    }

    pub fn snapshot(&self) -> AccountSnapshot {
        AccountSnapshot {
            agency: self.agency.clone(),
            account: self.number,
            owner: self.owner.name.clone(),
            balance: self.balance,
            withdrawals_today: self.withdrawals_today,
            transactions_today: self.transactions_today,
        }
    }
}
