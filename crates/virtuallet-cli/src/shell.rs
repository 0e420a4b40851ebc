//! Interactive command loop.

use std::io::{BufRead, Write};

use virtuallet_core::money::parse_amount;
use virtuallet_core::storage::RECENT_TRANSACTIONS_LIMIT;
use virtuallet_core::{Command, LedgerEngine, TransactionKind, WalletError, WalletStore};

use crate::console::Console;
use crate::messages::{current_balance, formatted_balance, Message};
use crate::output::transactions_table;

pub struct Shell<'a, S, R, W> {
    engine: &'a mut LedgerEngine<S>,
    console: &'a mut Console<R, W>,
}

impl<'a, S, R, W> Shell<'a, S, R, W>
where
    S: WalletStore,
    R: BufRead,
    W: Write,
{
    pub fn new(engine: &'a mut LedgerEngine<S>, console: &'a mut Console<R, W>) -> Self {
        Self { engine, console }
    }

    /// Reconcile auto-income, then read commands until quit or end of input.
    pub fn run(&mut self) -> anyhow::Result<()> {
        let booked = self.engine.reconcile_auto_income()?;
        if !booked.is_empty() {
            tracing::info!(count = booked.len(), "booked missing regular incomes");
        }

        self.console.println(&current_balance(self.engine.balance()?))?;
        self.console.show(Message::Info)?;

        while let Some(input) = self.console.prompt(Message::EnterInput.text())? {
            let command = Command::parse(&input);
            tracing::debug!(?command, "command received");
            match command {
                Command::Income => self.record(TransactionKind::Income)?,
                Command::Expense => self.record(TransactionKind::Expense)?,
                Command::Show => self.show()?,
                Command::Help => self.console.show(Message::Help)?,
                Command::Info => self.console.show(Message::Info)?,
                Command::Malformed => self.console.show_line(Message::ErrorMalformedCommand)?,
                Command::Quit => {}
            }
            if command.is_terminal() {
                break;
            }
        }

        self.console.show_line(Message::Bye)?;
        Ok(())
    }

    fn record(&mut self, kind: TransactionKind) -> anyhow::Result<()> {
        let Some(description) = self.console.prompt(Message::EnterDescription.text())? else {
            return Ok(());
        };
        let Some(amount) = self.console.prompt(Message::EnterAmount.text())? else {
            return Ok(());
        };

        let result = parse_amount(&amount).and_then(|amount| {
            self.engine
                .record_transaction(Some(description.as_str()), amount, kind)
        });

        match result {
            Ok(balance) => {
                let booked = match kind {
                    TransactionKind::Income => Message::IncomeBooked,
                    TransactionKind::Expense => Message::ExpenseBooked,
                };
                self.console.show_line(booked)?;
                self.console.println(&current_balance(balance))?;
            }
            Err(err) => self.recover(err)?,
        }
        Ok(())
    }

    fn recover(&mut self, err: WalletError) -> anyhow::Result<()> {
        match Message::for_error(&err) {
            Some(message) => {
                tracing::debug!(error = %err, "action aborted");
                self.console.show_line(message)
            }
            None => Err(err.into()),
        }
    }

    fn show(&mut self) -> anyhow::Result<()> {
        let balance = self.engine.balance()?;
        let entries = self
            .engine
            .recent_transactions(RECENT_TRANSACTIONS_LIMIT)?;
        self.console
            .print(&formatted_balance(balance, &transactions_table(&entries)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;
    use rust_decimal::Decimal;
    use virtuallet_core::{IncomeSettings, SqliteStorage};

    fn run_shell(script: &str) -> (LedgerEngine<SqliteStorage>, String) {
        let mut engine = LedgerEngine::new(SqliteStorage::open_in_memory().unwrap());
        engine
            .initialize(&IncomeSettings::default(), Local::now().date_naive())
            .unwrap();

        let mut output = Vec::new();
        let mut console = Console::new(script.as_bytes(), &mut output);
        Shell::new(&mut engine, &mut console).run().unwrap();
        drop(console);

        (engine, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_income_and_expense() {
        let (engine, printed) = run_shell("+\nbonus\n50\n-\nrent\n30.5\n:\n");

        assert_eq!(engine.balance().unwrap(), Decimal::new(11950, 2));
        assert!(printed.contains(Message::IncomeBooked.text()));
        assert!(printed.contains(Message::ExpenseBooked.text()));
        assert!(printed.contains("current balance: 150.00"));
        assert!(printed.contains("current balance: 119.50"));
        assert!(printed.trim_end().ends_with(Message::Bye.text()));
    }

    #[test]
    fn test_recoverable_errors_keep_loop_running() {
        let (engine, printed) =
            run_shell("-\n\nabc\n-\n\n-3\n-\n\n300.01\n+\n\n0\n=\n:\n");

        assert_eq!(engine.recent_transactions(30).unwrap().len(), 1);
        assert!(printed.contains(Message::ErrorZeroOrInvalidAmount.text()));
        assert!(printed.contains(Message::ErrorNegativeAmount.text()));
        assert!(printed.contains(Message::ErrorTooExpensive.text()));
        assert!(printed.contains("last transactions (up to 30)"));
    }

    #[test]
    fn test_oversized_amount_is_recoverable() {
        let (engine, printed) =
            run_shell("+\nlottery\n50000000000000000000000000000\n+\nlottery\n5\n:\n");

        assert_eq!(engine.balance().unwrap(), Decimal::from(105));
        assert!(printed.contains(Message::ErrorZeroOrInvalidAmount.text()));
        assert!(printed.trim_end().ends_with(Message::Bye.text()));
    }

    #[test]
    fn test_malformed_and_unknown_input() {
        let (_, printed) = run_shell("+5\nhello\n?\n");

        assert!(printed.contains(Message::ErrorMalformedCommand.text()));
        assert!(printed.contains("Virtuallet follows two important design principles"));
        // Startup info plus the one for "hello".
        assert_eq!(printed.matches("Commands:").count(), 2);
        assert!(printed.trim_end().ends_with(Message::Bye.text()));
    }
}
