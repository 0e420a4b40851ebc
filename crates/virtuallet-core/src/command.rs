//! Interactive commands and the legal transitions between them.
//!
//! The shell sits in `AwaitingCommand`, reads one line, runs the parsed
//! command and returns to `AwaitingCommand` unless the command was `Quit`.

/// A parsed line of shell input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `+`: record an irregular income
    Income,
    /// `-`: record an expense
    Expense,
    /// `=`: show balance and recent transactions
    Show,
    /// `?`: show the long help text
    Help,
    /// `:`: leave the program
    Quit,
    /// Anything unrecognized, including blank input
    Info,
    /// More text after a `+` or `-`
    Malformed,
}

impl Command {
    pub const KEY_INCOME: char = '+';
    pub const KEY_EXPENSE: char = '-';
    pub const KEY_SHOW: char = '=';
    pub const KEY_HELP: char = '?';
    pub const KEY_QUIT: char = ':';

    /// Parse one line of input. Surrounding whitespace is ignored.
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        let mut chars = input.chars();
        let (first, rest) = match chars.next() {
            Some(first) => (first, chars.as_str()),
            None => return Command::Info,
        };

        if !rest.is_empty() {
            return if first == Self::KEY_INCOME || first == Self::KEY_EXPENSE {
                Command::Malformed
            } else {
                Command::Info
            };
        }

        match first {
            Self::KEY_INCOME => Command::Income,
            Self::KEY_EXPENSE => Command::Expense,
            Self::KEY_SHOW => Command::Show,
            Self::KEY_HELP => Command::Help,
            Self::KEY_QUIT => Command::Quit,
            _ => Command::Info,
        }
    }

    /// Whether the shell stops after this command.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Command::Quit)
    }
}
