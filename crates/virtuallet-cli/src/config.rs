use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use virtuallet_core::scheduler::DEFAULT_BACKFILL_BOUND;

/// Database location shared by every edition of the program.
pub const DEFAULT_DATABASE_PATH: &str = "../db_virtuallet.db";

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct WalletConfig {
    #[serde(default)]
    pub database: DatabaseSection,
    #[serde(default)]
    pub backfill: BackfillSection,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DatabaseSection {
    pub path: String,
}

impl Default for DatabaseSection {
    fn default() -> Self {
        Self {
            path: DEFAULT_DATABASE_PATH.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BackfillSection {
    /// Most months a single start-up may book.
    pub max_months: u32,
}

impl Default for BackfillSection {
    fn default() -> Self {
        Self {
            max_months: DEFAULT_BACKFILL_BOUND,
        }
    }
}

impl WalletConfig {
    pub fn database_path(&self) -> PathBuf {
        PathBuf::from(&self.database.path)
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn read_config(path: &Path) -> anyhow::Result<WalletConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

/// Load the config file if there is one; defaults otherwise.
pub fn load_config() -> anyhow::Result<WalletConfig> {
    let path = match default_config_path() {
        Ok(path) => path,
        Err(err) => {
            tracing::debug!(error = %err, "no config location, using defaults");
            return Ok(WalletConfig::default());
        }
    };
    if !path.exists() {
        tracing::debug!(path = %path.display(), "config file absent, using defaults");
        return Ok(WalletConfig::default());
    }
    read_config(&path)
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("virtuallet"));
        }
    }
    Ok(home_dir()?.join(".config").join("virtuallet"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
