//! Composition root for the ledger.
//!
//! `LedgerEngine` owns the storage handle and lends it to the scheduler and
//! validator for the duration of each operation.

use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;

use crate::config::{ConfigKey, IncomeSettings};
use crate::error::{Result, WalletError};
use crate::money;
use crate::payday::Payday;
use crate::scheduler::{AutoIncomeScheduler, DEFAULT_BACKFILL_BOUND};
use crate::storage::{LedgerEntry, NewLedgerEntry, WalletStore};
use crate::validator::TransactionValidator;

/// Direction of a manually recorded transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    fn signed(&self, amount: Decimal) -> Decimal {
        match self {
            TransactionKind::Income => amount,
            TransactionKind::Expense => -amount,
        }
    }
}

pub struct LedgerEngine<S> {
    storage: S,
    backfill_bound: u32,
}

impl<S: WalletStore> LedgerEngine<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            backfill_bound: DEFAULT_BACKFILL_BOUND,
        }
    }

    /// Limit how many months a single backfill may book.
    pub fn with_backfill_bound(mut self, bound: u32) -> Self {
        self.backfill_bound = bound;
        self
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Give the storage handle back, e.g. to close it.
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// First-run setup: store the settings and book this month's income.
    ///
    /// Both are written in one transaction, so an interrupted setup leaves
    /// the wallet unconfigured rather than half configured.
    pub fn initialize(&mut self, settings: &IncomeSettings, today: NaiveDate) -> Result<()> {
        let payday = Payday::from_date(today);
        let config = settings.to_config();
        let pairs: Vec<(&str, &str)> = config
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
            .collect();
        let entry = NewLedgerEntry::auto_income(
            &settings.income_description,
            settings.income_amount,
            payday,
        );

        self.storage.seed(&pairs, &entry)?;
        tracing::info!(%payday, "ledger initialized");
        Ok(())
    }

    /// Whether `initialize` has completed on this wallet.
    pub fn is_configured(&self) -> Result<bool> {
        match self.storage.get(ConfigKey::IncomeAmount.as_str()) {
            Ok(_) => Ok(true),
            Err(WalletError::ConfigMissing(_)) => Ok(false),
            Err(err) => Err(err),
        }
    }

    /// Record an income or expense and return the new balance.
    ///
    /// `amount` is the unsigned size of the transaction as entered by the
    /// user; expenses are negated before they are stored.
    ///
    /// # Errors
    ///
    /// - `NegativeAmountRejected` if `amount` is negative
    /// - `InvalidAmount` if `amount` rounds to zero, or if it or the
    ///   resulting balance exceeds `money::max_amount()`
    /// - `InsufficientFunds` if an expense exceeds balance plus overdraft
    pub fn record_transaction(
        &mut self,
        description: Option<&str>,
        amount: Decimal,
        kind: TransactionKind,
    ) -> Result<Decimal> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(WalletError::NegativeAmountRejected);
        }
        let amount = money::ensure_in_range(money::round(amount))?;
        if amount.is_zero() {
            return Err(WalletError::InvalidAmount);
        }

        if kind == TransactionKind::Expense {
            TransactionValidator::new(&self.storage).check_expense(amount)?;
        }

        let signed = kind.signed(amount);
        let projected = self
            .storage
            .balance()?
            .checked_add(signed)
            .ok_or(WalletError::InvalidAmount)?;
        money::ensure_in_range(projected)?;

        self.storage
            .append(&NewLedgerEntry::manual(description, signed))?;
        self.storage.balance()
    }

    /// Book the recurring income for every elapsed month, up to today.
    pub fn reconcile_auto_income(&mut self) -> Result<Vec<Payday>> {
        self.reconcile_auto_income_on(Local::now().date_naive())
    }

    /// Same as `reconcile_auto_income`, for a given current date.
    pub fn reconcile_auto_income_on(&mut self, today: NaiveDate) -> Result<Vec<Payday>> {
        AutoIncomeScheduler::new(&mut self.storage, self.backfill_bound).run(today)
    }

    pub fn balance(&self) -> Result<Decimal> {
        self.storage.balance()
    }

    pub fn overdraft(&self) -> Result<Decimal> {
        TransactionValidator::new(&self.storage).overdraft()
    }

    pub fn is_expense_acceptable(&self, expense: Decimal) -> Result<bool> {
        TransactionValidator::new(&self.storage).is_expense_acceptable(expense)
    }

    pub fn recent_transactions(&self, limit: usize) -> Result<Vec<LedgerEntry>> {
        self.storage.recent_transactions(limit)
    }
}
