use super::Amount;
use serde::Serialize;

/// A Snapshot of an Account to easily view the content
/// It is used for decoupling exported output from Account and easy serialisation
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AccountSnapshot {
    pub agency: String,
    pub account: u32,
    pub owner: String,
    pub balance: Amount,
    pub withdrawals_today: u32,
    pub transactions_today: u32,
}
