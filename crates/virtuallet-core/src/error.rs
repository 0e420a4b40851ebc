//! Error types for Virtuallet core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps them to
//! user-facing messages. Amount and funds errors are recoverable (the shell
//! aborts the action and keeps running), everything else ends the session.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::payday::Payday;

/// Result type alias for Virtuallet operations.
pub type Result<T> = std::result::Result<T, WalletError>;

/// Core error type for Virtuallet operations.
#[derive(Debug, Error)]
pub enum WalletError {
    /// Amount was non-numeric or rounds to zero
    #[error("Amount is zero or invalid")]
    InvalidAmount,

    /// Amount was entered with a negative sign
    #[error("Amount must be positive")]
    NegativeAmountRejected,

    /// Expense exceeds balance plus overdraft
    #[error("Insufficient funds: expense {expense} exceeds balance {balance} plus overdraft {overdraft}")]
    InsufficientFunds {
        expense: Decimal,
        balance: Decimal,
        overdraft: Decimal,
    },

    /// A required setting was never stored
    #[error("Configuration missing: {0}")]
    ConfigMissing(String),

    /// A setting has more than one stored value
    #[error("Configuration ambiguous: {key} has {count} values")]
    ConfigAmbiguous { key: String, count: usize },

    /// A stored setting cannot be interpreted
    #[error("Invalid configuration value for {key}: {value:?}")]
    InvalidConfig { key: String, value: String },

    /// Storage backend error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Auto-income backfill walked further back than allowed
    #[error("Auto-income backfill exceeded its bound of {bound} months")]
    BackfillBoundExceeded { bound: u32 },

    /// The ledger already holds an auto-income for a month after today
    #[error("Auto-income is booked up to {latest} but the current month is {current}; check the system clock")]
    PaydayInFuture { latest: Payday, current: Payday },
}

impl WalletError {
    /// Whether the interactive loop can continue after this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            WalletError::InvalidAmount
                | WalletError::NegativeAmountRejected
                | WalletError::InsufficientFunds { .. }
        )
    }
}

impl From<rusqlite::Error> for WalletError {
    fn from(err: rusqlite::Error) -> Self {
        WalletError::Storage(err.to_string())
    }
}

impl From<std::io::Error> for WalletError {
    fn from(err: std::io::Error) -> Self {
        WalletError::Storage(err.to_string())
    }
}
