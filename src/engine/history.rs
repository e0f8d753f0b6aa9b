use super::Transaction;
use std::fmt;

pub const NO_MOVEMENTS: &str = "No movements recorded.";

/// Append-only log of the transactions accepted on one account.
#[derive(Debug, Clone, Default)]
pub struct TransactionHistory {
    entries: Vec<Transaction>,
}

impl TransactionHistory {
    pub fn new() -> Self {
        TransactionHistory {
            entries: Vec::new(),
        }
    }

    pub(super) fn append(&mut self, transaction: Transaction) {
        self.entries.push(transaction);
    }

    pub fn entries(&self) -> &[Transaction] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for TransactionHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.entries.is_empty() {
            return writeln!(f, "{NO_MOVEMENTS}");
        }

        for entry in &self.entries {
            writeln!(f, "{entry}")?;
        }
        Ok(())
    }
}
