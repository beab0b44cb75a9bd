//! User input utilities for interactive command-line prompts.
//!
//! `Prompter` wraps a reader and a writer so the menu loops can run against
//! the real terminal or against in-memory buffers in tests.

use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};

use anyhow::{Context, Result};

/// Line-oriented prompt/response over any reader and writer.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<StdinLock<'static>, Stdout> {
    /// Prompter over the process's stdin and stdout.
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prompts the user for a line of input.
    ///
    /// Writes `prompt` without a trailing newline, then reads one line.
    ///
    /// # Arguments
    ///
    /// * `prompt` - The message to display to the user
    ///
    /// # Returns
    ///
    /// * `Ok(Some(line))` - The input with surrounding whitespace trimmed
    /// * `Ok(None)` - Input is exhausted (end of file)
    ///
    /// # Errors
    ///
    /// Returns an error if writing the prompt or reading input fails.
    pub fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}").context("Failed to write prompt")?;
        self.output.flush().context("Failed to flush prompt")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read user input")?;
        if read == 0 {
            // Keep the next output off the prompt line
            writeln!(self.output).context("Failed to write output")?;
            return Ok(None);
        }

        Ok(Some(line.trim().to_string()))
    }

    /// Prompts for a destructive-action confirmation.
    ///
    /// Only `y` (any case) confirms; everything else, including end of
    /// input, declines.
    pub fn confirm(&mut self, prompt: &str) -> Result<bool> {
        Ok(self
            .prompt(prompt)?
            .is_some_and(|answer| answer.eq_ignore_ascii_case("y")))
    }

    /// Write one line of output.
    pub fn say(&mut self, line: impl AsRef<str>) -> Result<()> {
        writeln!(self.output, "{}", line.as_ref()).context("Failed to write output")
    }

    pub const fn output(&self) -> &W {
        &self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_prompt_trims_and_echoes_prompt() {
        let mut io = prompter("  hello  \n");
        assert_eq!(io.prompt("Say: ").unwrap().as_deref(), Some("hello"));
        assert_eq!(String::from_utf8_lossy(io.output()), "Say: ");
    }

    #[test]
    fn test_prompt_eof_is_none() {
        let mut io = prompter("");
        assert_eq!(io.prompt("Say: ").unwrap(), None);
    }

    #[test]
    fn test_confirm_only_accepts_y() {
        let mut io = prompter("Y\nyes\n\n");
        assert!(io.confirm("? ").unwrap());
        assert!(!io.confirm("? ").unwrap());
        assert!(!io.confirm("? ").unwrap());
        assert!(!io.confirm("? ").unwrap());
    }
}
