//! Core data types for the storage layer.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::money;
use crate::payday::Payday;

/// Default number of rows returned by `recent_transactions`.
pub const RECENT_TRANSACTIONS_LIMIT: usize = 30;

/// A recorded ledger row.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerEntry {
    /// Free-text description
    pub description: Option<String>,

    /// Signed amount; expenses are negative
    pub amount: Decimal,

    /// Whether the scheduler created this entry
    pub is_auto_income: bool,

    /// Edition of the program that wrote the row
    pub created_by: Option<String>,

    /// When the entry was written (UTC)
    pub created_at: NaiveDateTime,

    /// Only ever set by manual edits outside the program
    pub modified_at: Option<NaiveDateTime>,
}

impl LedgerEntry {
    /// The payday an auto-income entry stands for.
    pub fn payday(&self) -> Option<Payday> {
        if !self.is_auto_income {
            return None;
        }
        self.description.as_deref().and_then(Payday::from_description)
    }
}

/// Builder for entries that have not been written yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLedgerEntry {
    pub description: Option<String>,
    pub amount: Decimal,
    pub is_auto_income: bool,
}

impl NewLedgerEntry {
    /// A manually entered income or expense. Blank descriptions are dropped.
    pub fn manual(description: Option<&str>, amount: Decimal) -> Self {
        let description = description
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(String::from);
        Self {
            description,
            amount: money::round(amount),
            is_auto_income: false,
        }
    }

    /// The recurring income for `payday`.
    pub fn auto_income(income_description: &str, amount: Decimal, payday: Payday) -> Self {
        Self {
            description: Some(payday.encode_description(income_description)),
            amount: money::round(amount),
            is_auto_income: true,
        }
    }
}
