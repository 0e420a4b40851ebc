//! Virtuallet CLI - your virtual wallet in the terminal
//!
//! Opens (or on first run creates and configures) the wallet database,
//! then hands over to the interactive shell.

mod cli;
mod config;
mod console;
mod logging;
mod messages;
mod output;
mod setup;
mod shell;

use std::io::{self, IsTerminal};

use chrono::Local;
use clap::Parser;
use virtuallet_core::{LedgerEngine, SqliteStorage};

use crate::cli::Cli;
use crate::console::Console;
use crate::messages::Message;
use crate::shell::Shell;

fn main() -> anyhow::Result<()> {
    let _cli = Cli::parse();
    logging::init();

    let config = config::load_config()?;
    let db_path = config.database_path();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console =
        Console::new(stdin.lock(), stdout.lock()).with_terminal(stdin.is_terminal());
    console.show(Message::Banner)?;

    let first_run = !db_path.exists();
    let storage = if first_run {
        tracing::info!(path = %db_path.display(), "creating wallet database");
        setup::create_database(&db_path, &mut console)?
    } else {
        SqliteStorage::open(&db_path)?
    };

    let mut engine = LedgerEngine::new(storage).with_backfill_bound(config.backfill.max_months);
    if first_run || !engine.is_configured()? {
        if !first_run {
            tracing::warn!(path = %db_path.display(), "setup was never completed, running it again");
        }
        setup::configure(&mut engine, &mut console, Local::now().date_naive())?;
    }

    Shell::new(&mut engine, &mut console).run()?;
    engine.into_storage().close()?;
    Ok(())
}
