// Reference Data - fixed lookup tables
//
// Both entities here are read-only fixtures:
// - Bank directory backing the creation form's sender dropdown
// - Mock GPI transaction history backing the tracker table

pub mod bank;
pub mod transaction;

pub use bank::{BankDirectory, BankDirectoryEntry};
pub use transaction::{transaction_history, GpiTransaction, TransactionStatus};
