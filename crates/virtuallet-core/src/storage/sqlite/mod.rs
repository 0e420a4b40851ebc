//! SQLite storage backend.
//!
//! The schema matches the one every edition of the program shares, so an
//! existing `db_virtuallet.db` can be opened as-is. Newly created databases
//! also get a unique index on configuration keys.

mod row;

use std::path::Path;

use chrono::Utc;
use rusqlite::{params, Connection};
use rust_decimal::Decimal;

use crate::error::{Result, WalletError};
use crate::money;
use crate::payday::Payday;
use crate::storage::traits::{ConfigurationStore, LedgerStore, WalletStore};
use crate::storage::types::{LedgerEntry, NewLedgerEntry};

pub use row::TIMESTAMP_FORMAT;
use row::LedgerRow;

/// Value written to `ledger.created_by`.
const CREATED_BY: &str = concat!("Rust Edition ", env!("CARGO_PKG_VERSION"));

const SCHEMA: &str = r#"
    CREATE TABLE ledger (
        description TEXT,
        amount REAL NOT NULL,
        auto_income INTEGER NOT NULL,
        created_by TEXT,
        created_at TIMESTAMP NOT NULL,
        modified_at TIMESTAMP
    );

    CREATE TABLE configuration (
        k TEXT NOT NULL,
        v TEXT NOT NULL
    );

    CREATE UNIQUE INDEX configuration_key ON configuration (k);
"#;

/// SQLite-backed ledger and configuration store.
pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    /// Create a new database file with an empty schema.
    ///
    /// # Errors
    ///
    /// Returns `WalletError::Storage` if the file already exists or the
    /// schema cannot be written.
    pub fn create(path: &Path) -> Result<Self> {
        if path.exists() {
            return Err(WalletError::Storage(format!(
                "Database file already exists: {}",
                path.display()
            )));
        }

        let conn = Connection::open(path)?;
        conn.execute_batch(SCHEMA)?;
        tracing::info!(path = %path.display(), "database initialized");
        Ok(Self { conn })
    }

    /// Open an existing database file.
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(WalletError::Storage(format!(
                "Database file not found: {}",
                path.display()
            )));
        }

        let conn = Connection::open(path)?;
        tracing::debug!(path = %path.display(), "database opened");
        Ok(Self { conn })
    }

    /// Open a throwaway in-memory database with the schema applied.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self { conn })
    }

    /// Close the connection, reporting any error SQLite raises on the way out.
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, err)| err.into())
    }

    fn insert(conn: &Connection, entry: &NewLedgerEntry, created_at: &str) -> Result<()> {
        conn.execute(
            r#"
            INSERT INTO ledger (description, amount, auto_income, created_by, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
            params![
                entry.description,
                money::to_sql_real(entry.amount)?,
                entry.is_auto_income,
                CREATED_BY,
                created_at,
            ],
        )?;
        Ok(())
    }

    // Older databases have no unique index, so replace rather than upsert.
    fn replace_setting(conn: &Connection, key: &str, value: &str) -> Result<()> {
        conn.execute("DELETE FROM configuration WHERE k = ?1", [key])?;
        conn.execute(
            "INSERT INTO configuration (k, v) VALUES (?1, ?2)",
            [key, value],
        )?;
        Ok(())
    }

    fn now() -> String {
        Utc::now().format(TIMESTAMP_FORMAT).to_string()
    }

    #[cfg(test)]
    pub(crate) fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl ConfigurationStore for SqliteStorage {
    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let tx = self.conn.transaction()?;
        Self::replace_setting(&tx, key, value)?;
        tx.commit()?;

        tracing::debug!(key, "configuration stored");
        Ok(())
    }

    fn get(&self, key: &str) -> Result<String> {
        let mut stmt = self
            .conn
            .prepare("SELECT v FROM configuration WHERE k = ?1")?;
        let mut values = stmt
            .query_map([key], |row| row.get::<_, String>(0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        match values.len() {
            0 => Err(WalletError::ConfigMissing(key.to_string())),
            1 => Ok(values.remove(0)),
            count => Err(WalletError::ConfigAmbiguous {
                key: key.to_string(),
                count,
            }),
        }
    }
}

impl LedgerStore for SqliteStorage {
    fn append(&mut self, entry: &NewLedgerEntry) -> Result<()> {
        Self::insert(&self.conn, entry, &Self::now())?;
        tracing::debug!(amount = %entry.amount, auto_income = entry.is_auto_income, "ledger entry appended");
        Ok(())
    }

    fn append_all(&mut self, entries: &[NewLedgerEntry]) -> Result<()> {
        let created_at = Self::now();
        let tx = self.conn.transaction()?;
        for entry in entries {
            Self::insert(&tx, entry, &created_at)?;
        }
        tx.commit()?;

        tracing::debug!(count = entries.len(), "ledger entries appended");
        Ok(())
    }

    fn balance(&self) -> Result<Decimal> {
        let balance: f64 = self.conn.query_row(
            "SELECT ROUND(COALESCE(SUM(amount), 0), 2) FROM ledger",
            [],
            |row| row.get(0),
        )?;
        money::from_sql_real(balance)
    }

    fn recent_transactions(&self, limit: usize) -> Result<Vec<LedgerEntry>> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let query = format!(
            "SELECT {} FROM ledger ORDER BY ROWID DESC LIMIT ?1",
            LedgerRow::COLUMNS
        );
        let mut stmt = self.conn.prepare(&query)?;
        let rows = stmt.query_map([limit], LedgerRow::from_row)?;

        let mut entries = Vec::new();
        for row in rows {
            entries.push(row?.try_into()?);
        }
        Ok(entries)
    }

    fn has_auto_income_for(&self, payday: Payday) -> Result<bool> {
        let pattern = format!("%{}", payday.suffix());
        let exists: bool = self.conn.query_row(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM ledger
                WHERE auto_income = 1
                AND description LIKE ?1
            )
            "#,
            [pattern],
            |row| row.get(0),
        )?;
        Ok(exists)
    }

    fn latest_auto_income(&self) -> Result<Option<Payday>> {
        let mut stmt = self
            .conn
            .prepare("SELECT description FROM ledger WHERE auto_income = 1")?;
        let descriptions = stmt.query_map([], |row| row.get::<_, Option<String>>(0))?;

        let mut latest = None;
        for description in descriptions {
            let payday = description?.as_deref().and_then(Payday::from_description);
            latest = latest.max(payday);
        }
        Ok(latest)
    }
}

impl WalletStore for SqliteStorage {
    fn seed(&mut self, settings: &[(&str, &str)], entry: &NewLedgerEntry) -> Result<()> {
        let tx = self.conn.transaction()?;
        for (key, value) in settings {
            Self::replace_setting(&tx, key, value)?;
        }
        Self::insert(&tx, entry, &Self::now())?;
        tx.commit()?;

        tracing::debug!(settings = settings.len(), "wallet seeded");
        Ok(())
    }
}
