mod account;
mod account_snapshot;
mod amount;
mod bank;
mod clock;
mod history;
mod limits;
mod record;
mod rejection;
mod transaction;

pub use account::{Account, AccountOwner};
pub use account_snapshot::AccountSnapshot;
pub use amount::{Amount, AmountError};
pub use bank::{Bank, Client, DirectoryError, NewClient};
pub use clock::{Clock, FixedClock, SystemClock, Timestamp};
pub use history::{NO_MOVEMENTS, TransactionHistory};
pub use limits::AccountLimits;
pub use record::{RecordType, StatementRecord};
pub use rejection::Rejection;
pub use transaction::{Transaction, TransactionType};
