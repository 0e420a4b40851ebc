//! Expense affordability check.

use rust_decimal::Decimal;

use crate::config::{decimal_setting, ConfigKey};
use crate::error::{Result, WalletError};
use crate::storage::{ConfigurationStore, LedgerStore};

/// Decides whether an expense fits within balance plus overdraft.
pub struct TransactionValidator<'a, S> {
    store: &'a S,
}

impl<'a, S: LedgerStore + ConfigurationStore> TransactionValidator<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// The configured overdraft allowance.
    pub fn overdraft(&self) -> Result<Decimal> {
        decimal_setting(self.store, ConfigKey::Overdraft)
    }

    /// `balance + overdraft - expense >= 0`. `expense` is the positive size
    /// of the expense.
    pub fn is_expense_acceptable(&self, expense: Decimal) -> Result<bool> {
        match self.check_expense(expense) {
            Ok(()) => Ok(true),
            Err(WalletError::InsufficientFunds { .. }) => Ok(false),
            Err(err) => Err(err),
        }
    }

    /// Like `is_expense_acceptable`, but reports the figures on rejection.
    ///
    /// An expense too large to compare against the balance is
    /// `InvalidAmount`.
    pub fn check_expense(&self, expense: Decimal) -> Result<()> {
        let balance = self.store.balance()?;
        let overdraft = self.overdraft()?;
        let headroom = balance
            .checked_add(overdraft)
            .and_then(|available| available.checked_sub(expense))
            .ok_or(WalletError::InvalidAmount)?;
        if headroom >= Decimal::ZERO {
            Ok(())
        } else {
            Err(WalletError::InsufficientFunds {
                expense,
                balance,
                overdraft,
            })
        }
    }
}
