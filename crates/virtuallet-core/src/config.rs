//! Typed access to the settings kept in the configuration table.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::{Result, WalletError};
use crate::money;
use crate::storage::ConfigurationStore;

/// Well-known configuration keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    IncomeDescription,
    IncomeAmount,
    Overdraft,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 3] = [
        ConfigKey::IncomeDescription,
        ConfigKey::IncomeAmount,
        ConfigKey::Overdraft,
    ];

    /// Key as stored in the `configuration.k` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigKey::IncomeDescription => "income_description",
            ConfigKey::IncomeAmount => "income_amount",
            ConfigKey::Overdraft => "overdraft",
        }
    }

    /// Value the setup wizard offers when the user just presses enter.
    pub fn default_value(&self) -> &'static str {
        match self {
            ConfigKey::IncomeDescription => "pocket money",
            ConfigKey::IncomeAmount => "100",
            ConfigKey::Overdraft => "200",
        }
    }
}

/// Interpret the text of a numeric setting.
///
/// # Errors
///
/// Returns `WalletError::InvalidConfig` if `value` is not a number or lies
/// outside the range the ledger can store.
pub fn parse_setting(key: ConfigKey, value: &str) -> Result<Decimal> {
    Decimal::from_str(value.trim())
        .ok()
        .and_then(|amount| money::ensure_in_range(amount).ok())
        .ok_or_else(|| WalletError::InvalidConfig {
            key: key.as_str().to_string(),
            value: value.to_string(),
        })
}

/// Read a decimal setting.
pub fn decimal_setting<S: ConfigurationStore + ?Sized>(store: &S, key: ConfigKey) -> Result<Decimal> {
    parse_setting(key, &store.get(key.as_str())?)
}

/// The recurring income and overdraft settings.
#[derive(Debug, Clone, PartialEq)]
pub struct IncomeSettings {
    pub income_description: String,
    pub income_amount: Decimal,
    pub overdraft: Decimal,
}

impl IncomeSettings {
    /// Build settings from raw text, as entered during setup.
    pub fn parse(income_description: &str, income_amount: &str, overdraft: &str) -> Result<Self> {
        Ok(Self {
            income_description: income_description.to_string(),
            income_amount: parse_setting(ConfigKey::IncomeAmount, income_amount)?,
            overdraft: parse_setting(ConfigKey::Overdraft, overdraft)?,
        })
    }

    pub fn load<S: ConfigurationStore + ?Sized>(store: &S) -> Result<Self> {
        Ok(Self {
            income_description: store.get(ConfigKey::IncomeDescription.as_str())?,
            income_amount: decimal_setting(store, ConfigKey::IncomeAmount)?,
            overdraft: decimal_setting(store, ConfigKey::Overdraft)?,
        })
    }

    pub fn save<S: ConfigurationStore + ?Sized>(&self, store: &mut S) -> Result<()> {
        for (key, value) in self.to_config() {
            store.set(key.as_str(), &value)?;
        }
        Ok(())
    }

    /// The settings as stored text, one entry per key.
    pub fn to_config(&self) -> [(ConfigKey, String); 3] {
        ConfigKey::ALL.map(|key| {
            let value = match key {
                ConfigKey::IncomeDescription => self.income_description.clone(),
                ConfigKey::IncomeAmount => self.income_amount.to_string(),
                ConfigKey::Overdraft => self.overdraft.to_string(),
            };
            (key, value)
        })
    }
}

impl Default for IncomeSettings {
    fn default() -> Self {
        Self {
            income_description: ConfigKey::IncomeDescription.default_value().to_string(),
            income_amount: Decimal::from(100),
            overdraft: Decimal::from(200),
        }
    }
}
