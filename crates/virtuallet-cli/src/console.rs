//! Line-oriented terminal I/O.
//!
//! Generic over reader and writer so the shell can run against piped
//! stdin as well as an interactive terminal. Callers that want richer
//! prompts on a terminal check `is_interactive` first.

use std::io::{BufRead, Write};

use crate::messages::Message;

pub struct Console<R, W> {
    input: R,
    output: W,
    interactive: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            interactive: false,
        }
    }

    /// Mark whether `input` is attached to a terminal.
    pub fn with_terminal(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    pub fn print(&mut self, text: &str) -> anyhow::Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    pub fn println(&mut self, text: &str) -> anyhow::Result<()> {
        writeln!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    pub fn show(&mut self, message: Message) -> anyhow::Result<()> {
        self.print(message.text())
    }

    pub fn show_line(&mut self, message: Message) -> anyhow::Result<()> {
        self.println(message.text())
    }

    /// Print `prompt` and read one trimmed line. `None` at end of input.
    pub fn prompt(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        self.print(prompt)?;
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(|e| anyhow::anyhow!("Failed to read input: {}", e))?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
