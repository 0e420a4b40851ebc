//! Auto-income backfill.
//!
//! Walks backward from the current month until it reaches a month that
//! already has its recurring income, then books every month it passed,
//! oldest first, in a single transaction.

use chrono::NaiveDate;

use crate::config::IncomeSettings;
use crate::error::{Result, WalletError};
use crate::payday::Payday;
use crate::storage::{ConfigurationStore, LedgerStore, NewLedgerEntry};

/// Default limit on how many months one backfill may book (ten years).
pub const DEFAULT_BACKFILL_BOUND: u32 = 120;

/// Books the recurring income for every elapsed month that lacks one.
pub struct AutoIncomeScheduler<'a, S> {
    store: &'a mut S,
    bound: u32,
}

impl<'a, S: LedgerStore + ConfigurationStore> AutoIncomeScheduler<'a, S> {
    pub fn new(store: &'a mut S, bound: u32) -> Self {
        Self { store, bound }
    }

    /// Months missing their auto-income, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::BackfillBoundExceeded` when more than `bound`
    /// months would be due, which includes a ledger with no auto-income at
    /// all. If the walk gives up because the newest auto-income lies after
    /// the current month, `WalletError::PaydayInFuture` is returned instead.
    pub fn due_paydays(&self, today: NaiveDate) -> Result<Vec<Payday>> {
        let current = Payday::from_date(today);
        let mut payday = current;
        let mut due = Vec::new();

        while !self.store.has_auto_income_for(payday)? {
            if due.len() >= self.bound as usize {
                return Err(self.exhausted(current));
            }
            due.push(payday);
            payday = payday.previous();
        }

        due.reverse();
        Ok(due)
    }

    fn exhausted(&self, current: Payday) -> WalletError {
        match self.store.latest_auto_income() {
            Ok(Some(latest)) if latest > current => {
                WalletError::PaydayInFuture { latest, current }
            }
            Ok(_) => WalletError::BackfillBoundExceeded { bound: self.bound },
            Err(err) => err,
        }
    }

    /// Insert every due auto-income and return the months booked.
    ///
    /// Nothing is written if any insert fails or the bound is exceeded.
    pub fn run(&mut self, today: NaiveDate) -> Result<Vec<Payday>> {
        let due = self.due_paydays(today)?;
        if due.is_empty() {
            tracing::debug!("auto-income up to date");
            return Ok(due);
        }

        let settings = IncomeSettings::load(&*self.store)?;
        let entries: Vec<NewLedgerEntry> = due
            .iter()
            .map(|payday| {
                NewLedgerEntry::auto_income(
                    &settings.income_description,
                    settings.income_amount,
                    *payday,
                )
            })
            .collect();
        self.store.append_all(&entries)?;

        tracing::info!(
            count = due.len(),
            first = %due[0],
            last = %due[due.len() - 1],
            "auto-income backfilled"
        );
        Ok(due)
    }
}
