use serde::Serialize;

use crate::engine::{Amount, Transaction, TransactionType};

/// One history entry as written to a statement export.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct StatementRecord {
    pub timestamp: String,
    #[serde(rename = "type")]
    pub typ: RecordType,
    pub amount: Amount,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RecordType {
    Deposit,
    Withdrawal,
}

impl From<&Transaction> for StatementRecord {
    fn from(tx: &Transaction) -> Self {
        StatementRecord {
            timestamp: tx.timestamp().to_string(),
            typ: match tx.typ() {
                TransactionType::Deposit => RecordType::Deposit,
                TransactionType::Withdrawal => RecordType::Withdrawal,
            },
            amount: tx.amount(),
        }
    }
}
