//! Ledger row type for database queries.

use chrono::{DateTime, NaiveDateTime};

use crate::error::{Result, WalletError};
use crate::money;
use crate::storage::types::LedgerEntry;

/// Format SQLite's `datetime('now')` produces; used for every write.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Raw row data from the ledger table, before parsing into domain types.
#[derive(Debug)]
pub struct LedgerRow {
    pub description: Option<String>,
    pub amount: f64,
    pub auto_income: i64,
    pub created_by: Option<String>,
    pub created_at: String,
    pub modified_at: Option<String>,
}

impl LedgerRow {
    pub const COLUMNS: &'static str =
        "description, amount, auto_income, created_by, created_at, modified_at";

    pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            description: row.get(0)?,
            amount: row.get(1)?,
            auto_income: row.get(2)?,
            created_by: row.get(3)?,
            created_at: row.get(4)?,
            modified_at: row.get(5)?,
        })
    }
}

impl TryFrom<LedgerRow> for LedgerEntry {
    type Error = WalletError;

    fn try_from(row: LedgerRow) -> Result<Self> {
        let created_at = parse_timestamp(&row.created_at)?;
        let modified_at = row
            .modified_at
            .as_deref()
            .map(parse_timestamp)
            .transpose()?;

        Ok(LedgerEntry {
            description: row.description,
            amount: money::from_sql_real(row.amount)?,
            is_auto_income: row.auto_income != 0,
            created_by: row.created_by,
            created_at,
            modified_at,
        })
    }
}

/// Parse a stored timestamp.
///
/// Other editions of the program write fractional seconds or RFC 3339, so
/// both are accepted alongside the plain SQLite format.
fn parse_timestamp(value: &str) -> Result<NaiveDateTime> {
    for format in [TIMESTAMP_FORMAT, "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(parsed);
        }
    }
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.naive_utc());
    }
    Err(WalletError::Storage(format!("Invalid timestamp: {}", value)))
}
