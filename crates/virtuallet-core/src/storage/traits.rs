//! Storage traits.
//!
//! The engine only talks to storage through these traits, so the
//! scheduler and validator can be exercised against any backend that keeps
//! the same guarantees.

use rust_decimal::Decimal;

use super::types::{LedgerEntry, NewLedgerEntry};
use crate::error::Result;
use crate::payday::Payday;

/// Key/value settings.
///
/// Implementations must keep at most one value per key.
pub trait ConfigurationStore {
    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::ConfigMissing` if the key was never set and
    /// `WalletError::ConfigAmbiguous` if more than one value is stored.
    fn get(&self, key: &str) -> Result<String>;
}

/// Append-only transaction ledger.
pub trait LedgerStore {
    /// Append one entry, stamping its creation time.
    fn append(&mut self, entry: &NewLedgerEntry) -> Result<()>;

    /// Append a batch of entries atomically: either all are written or none.
    fn append_all(&mut self, entries: &[NewLedgerEntry]) -> Result<()>;

    /// Sum of all amounts rounded to two decimals; zero for an empty ledger.
    fn balance(&self) -> Result<Decimal>;

    /// Up to `limit` entries, newest first.
    fn recent_transactions(&self, limit: usize) -> Result<Vec<LedgerEntry>>;

    /// Whether an auto-income entry exists for `payday`.
    fn has_auto_income_for(&self, payday: Payday) -> Result<bool>;

    /// The most recent month an auto-income entry was booked for.
    fn latest_auto_income(&self) -> Result<Option<Payday>>;
}

/// Settings and ledger behind one handle.
pub trait WalletStore: ConfigurationStore + LedgerStore {
    /// Store every `(key, value)` in `settings` and append `entry` as one
    /// unit: either all of it is written or none.
    fn seed(&mut self, settings: &[(&str, &str)], entry: &NewLedgerEntry) -> Result<()>;
}
