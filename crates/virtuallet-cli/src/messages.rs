//! User-facing text.
//!
//! Handlers pick a `Message`; the wording lives only here.

use rust_decimal::Decimal;
use virtuallet_core::{ConfigKey, WalletError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Banner,
    Info,
    Help,
    SetupPreDatabase,
    SetupPostDatabase,
    SetupComplete,
    SetupInvalidAmount,
    EnterInput,
    EnterDescription,
    EnterAmount,
    IncomeBooked,
    ExpenseBooked,
    ErrorZeroOrInvalidAmount,
    ErrorNegativeAmount,
    ErrorTooExpensive,
    ErrorMalformedCommand,
    Bye,
}

impl Message {
    pub fn text(&self) -> &'static str {
        match self {
            Message::Banner => BANNER,
            Message::Info => INFO,
            Message::Help => HELP,
            Message::SetupPreDatabase => {
                "\n\tDatabase file not found.\n\tDatabase will be initialized. This may take a while... NOT.\n"
            }
            Message::SetupPostDatabase => SETUP_POST_DATABASE,
            Message::SetupComplete => "setup complete, have fun",
            Message::SetupInvalidAmount => "that is not a valid amount, try again",
            Message::EnterInput => "input > ",
            Message::EnterDescription => "description (optional) > ",
            Message::EnterAmount => "amount > ",
            Message::IncomeBooked => "income booked",
            Message::ExpenseBooked => "expense booked successfully",
            Message::ErrorZeroOrInvalidAmount => "amount is zero or invalid -> action aborted",
            Message::ErrorNegativeAmount => "amount must be positive -> action aborted",
            Message::ErrorTooExpensive => "sorry, too expensive -> action aborted",
            Message::ErrorMalformedCommand => {
                "RTFM: you are supposed to enter only + or - and nothing after that"
            }
            Message::Bye => "see ya",
        }
    }

    /// Message for an error the shell recovers from.
    pub fn for_error(err: &WalletError) -> Option<Self> {
        match err {
            WalletError::InvalidAmount => Some(Message::ErrorZeroOrInvalidAmount),
            WalletError::NegativeAmountRejected => Some(Message::ErrorNegativeAmount),
            WalletError::InsufficientFunds { .. } => Some(Message::ErrorTooExpensive),
            _ => None,
        }
    }
}

/// Label shown when asking for a setting during setup.
pub fn setup_label(key: ConfigKey) -> &'static str {
    match key {
        ConfigKey::IncomeDescription => "enter description for regular income",
        ConfigKey::IncomeAmount => "enter regular income",
        ConfigKey::Overdraft => "enter overdraft",
    }
}

pub fn setup_prompt(key: ConfigKey) -> String {
    format!("{} [default: {}] > ", setup_label(key), key.default_value())
}

pub fn current_balance(balance: Decimal) -> String {
    format!("\n\tcurrent balance: {:.2}\n", balance)
}

pub fn formatted_balance(balance: Decimal, transactions: &str) -> String {
    format!(
        "{}\n\tlast transactions (up to 30)\n\t----------------------------\n{}\n",
        current_balance(balance),
        transactions
    )
}

const BANNER: &str = r#"
	 _                                 _   _
	(_|   |_/o                        | | | |
	  |   |      ,_  _|_         __,  | | | |  _ _|_
	  |   |  |  /  |  |  |   |  /  |  |/  |/  |/  |
	   \_/   |_/   |_/|_/ \_/|_/\_/|_/|__/|__/|__/|_/

	Rust Edition

"#;

const INFO: &str = r#"
	Commands:
	- press plus (+) to add an irregular income
	- press minus (-) to add an expense
	- press equals (=) to show balance and last transactions
	- press question mark (?) for even more info about this program
	- press colon (:) to exit

"#;

const HELP: &str = r#"
	Virtuallet is a tool to act as your virtual wallet. Wow...
	Virtuallet is accessible via terminal and uses a Sqlite database to store all its data.
	On first start Virtuallet will be configured and requires some input
	but you already know that unless you are currently studying the source code.

	Virtuallet follows two important design principles:

	- shit in shit out
	- UTFSB (Use The F**king Sqlite Browser)

	As a consequence everything in the database is considered valid.
	Program behaviour is unspecified for any database content being invalid. Ouch...

	As its primary feature Virtuallet will auto-add the configured income on start up
	for all months in the past since the last registered regular income.
	So if you have specified a monthly income and haven't run Virtuallet for three months
	it will auto-create three regular incomes when you boot it the next time if you like it or not.

	Virtuallet will also allow you to add irregular incomes and expenses manually.
	It can also display the current balance and the 30 most recent transactions.

	The configured overdraft will be considered if an expense is registered.
	For instance if your overdraft equals the default value of 200
	you won't be able to add an expense if the balance would be less than -200 afterwards.

	Virtuallet does not feature any fancy reports and you are indeed encouraged to use a Sqlite-Browser
	to view and even edit the database. When making updates please remember the shit in shit out principle.

	As a free gift to you I have added a modified_at field in the ledger table. Feel free to make use of it.

"#;

const SETUP_POST_DATABASE: &str = r#"
	Database initialized.
	Are you prepared for some configuration? If not I don't care. There is no way to exit, muhahahar.
	Press enter to accept the default or input something else. There is no validation
	because I know you will not make a mistake. No second chances. If you f**k up,
	you will have to either delete the database file or edit it using a sqlite database browser.

"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverable_errors_have_messages() {
        assert_eq!(
            Message::for_error(&WalletError::InvalidAmount),
            Some(Message::ErrorZeroOrInvalidAmount)
        );
        assert_eq!(
            Message::for_error(&WalletError::NegativeAmountRejected),
            Some(Message::ErrorNegativeAmount)
        );
        assert_eq!(
            Message::for_error(&WalletError::InsufficientFunds {
                expense: Decimal::ONE,
                balance: Decimal::ZERO,
                overdraft: Decimal::ZERO,
            }),
            Some(Message::ErrorTooExpensive)
        );
        assert_eq!(
            Message::for_error(&WalletError::Storage("gone".to_string())),
            None
        );
    }

    #[test]
    fn test_balance_always_has_two_decimals() {
        assert_eq!(
            current_balance(Decimal::new(1005, 1)),
            "\n\tcurrent balance: 100.50\n"
        );
        assert!(current_balance(Decimal::from(-200)).contains("-200.00"));
    }

    #[test]
    fn test_setup_prompt_shows_default() {
        assert_eq!(
            setup_prompt(ConfigKey::Overdraft),
            "enter overdraft [default: 200] > "
        );
    }
}
