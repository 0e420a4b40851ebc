//! Storage layer: traits, data types and the SQLite backend.

mod sqlite;
mod traits;
mod types;

pub use sqlite::{SqliteStorage, TIMESTAMP_FORMAT};
pub use traits::{ConfigurationStore, LedgerStore, WalletStore};
pub use types::{LedgerEntry, NewLedgerEntry, RECENT_TRANSACTIONS_LIMIT};
