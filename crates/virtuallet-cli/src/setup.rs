//! First-run setup wizard.

use std::io::{BufRead, Write};
use std::path::Path;

use chrono::NaiveDate;
use dialoguer::Input;
use virtuallet_core::config::parse_setting;
use virtuallet_core::{ConfigKey, IncomeSettings, LedgerEngine, SqliteStorage, WalletStore};

use crate::console::Console;
use crate::messages::{setup_label, setup_prompt, Message};

/// Create the database file, telling the user what is going on.
pub fn create_database<R: BufRead, W: Write>(
    path: &Path,
    console: &mut Console<R, W>,
) -> anyhow::Result<SqliteStorage> {
    console.show(Message::SetupPreDatabase)?;
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create database directory {}: {}",
                parent.display(),
                e
            )
        })?;
    }
    let storage = SqliteStorage::create(path)?;
    console.show(Message::SetupPostDatabase)?;
    Ok(storage)
}

/// Ask for the income and overdraft settings and book the first income.
pub fn configure<S, R, W>(
    engine: &mut LedgerEngine<S>,
    console: &mut Console<R, W>,
    today: NaiveDate,
) -> anyhow::Result<()>
where
    S: WalletStore,
    R: BufRead,
    W: Write,
{
    let income_description = read_setting(console, ConfigKey::IncomeDescription)?;
    let income_amount = read_setting(console, ConfigKey::IncomeAmount)?;
    let overdraft = read_setting(console, ConfigKey::Overdraft)?;

    let settings = IncomeSettings::parse(&income_description, &income_amount, &overdraft)?;
    engine.initialize(&settings, today)?;
    console.show_line(Message::SetupComplete)?;
    Ok(())
}

/// Read one setting; blank input or end of input takes the default.
fn read_setting<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    key: ConfigKey,
) -> anyhow::Result<String> {
    if console.is_interactive() {
        return prompt_setting(key);
    }

    loop {
        let value = console
            .prompt(&setup_prompt(key))?
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| key.default_value().to_string());

        if check_setting(key, &value).is_err() {
            console.show_line(Message::SetupInvalidAmount)?;
            continue;
        }
        return Ok(value);
    }
}

/// Terminal prompt with the default pre-filled and validation inline.
fn prompt_setting(key: ConfigKey) -> anyhow::Result<String> {
    let value = Input::<String>::new()
        .with_prompt(setup_label(key))
        .default(key.default_value().to_string())
        .validate_with(move |input: &String| -> Result<(), &'static str> {
            check_setting(key, input).map_err(|_| Message::SetupInvalidAmount.text())
        })
        .interact_text()?;
    Ok(value.trim().to_string())
}

fn check_setting(key: ConfigKey, value: &str) -> virtuallet_core::Result<()> {
    match key {
        ConfigKey::IncomeDescription => Ok(()),
        ConfigKey::IncomeAmount | ConfigKey::Overdraft => parse_setting(key, value).map(|_| ()),
    }
}
