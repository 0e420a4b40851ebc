//! # Virtuallet Core
//!
//! Core library for Virtuallet - a virtual wallet kept in a SQLite file.
//!
//! This crate records incomes and expenses, derives the running balance,
//! enforces the overdraft on expenses and books the configured recurring
//! income for every calendar month that has passed without one.
//!
//! ## Architecture
//!
//! - **storage**: configuration and ledger stores, SQLite backend
//! - **config**: typed view of the income and overdraft settings
//! - **scheduler**: auto-income backfill
//! - **validator**: expense affordability
//! - **engine**: composition root used by the shell
//! - **command**: shell command parsing

pub mod command;
pub mod config;
pub mod engine;
pub mod error;
pub mod money;
pub mod payday;
pub mod scheduler;
pub mod storage;
pub mod validator;

pub use command::Command;
pub use config::{ConfigKey, IncomeSettings};
pub use engine::{LedgerEngine, TransactionKind};
pub use error::{Result, WalletError};
pub use payday::Payday;
pub use storage::{ConfigurationStore, LedgerStore, SqliteStorage, WalletStore};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
