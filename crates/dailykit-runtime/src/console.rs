//! Terminal console adapter: failure output and the final pause.

use std::io::{self, BufRead, IsTerminal};

use console::Term;
use dailykit_core::ports::{LaunchConsole, ProcessError};

/// Prompt shown while holding the console open.
pub const PAUSE_PROMPT: &str = "Press any key to continue . . .";

/// Console backed by the process's own terminal.
///
/// When stdin is a terminal any single key acknowledges. When stdin is
/// redirected, one line (or end of input) acknowledges instead.
#[derive(Debug, Clone)]
pub struct TerminalConsole {
    out: Term,
    err: Term,
}

impl TerminalConsole {
    pub fn new() -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
        }
    }
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl LaunchConsole for TerminalConsole {
    fn report_failure(&self, error: &ProcessError) {
        // Nothing sensible to do if stderr itself is gone
        let _ = self.err.write_line(&error.to_string());
    }

    fn wait_for_acknowledgement(&self) -> Result<(), ProcessError> {
        let ack_err = |e: io::Error| ProcessError::AcknowledgeFailed(e.to_string());

        self.out.write_str(PAUSE_PROMPT).map_err(ack_err)?;
        self.out.flush().map_err(ack_err)?;

        match key_reader(
            io::stdin().is_terminal(),
            self.out.is_term(),
            self.err.is_term(),
        ) {
            KeyReader::Stdout => {
                self.out.read_key().map_err(ack_err)?;
                self.out.write_line("").map_err(ack_err)?;
            }
            KeyReader::Stderr => {
                self.err.read_key().map_err(ack_err)?;
                self.err.write_line("").map_err(ack_err)?;
            }
            KeyReader::Line => {
                let mut line = String::new();
                io::stdin().lock().read_line(&mut line).map_err(ack_err)?;
            }
        }

        Ok(())
    }
}

/// How the acknowledgement is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyReader {
    /// Single key through the stdout terminal.
    Stdout,
    /// Single key through the stderr terminal, for piped stdout.
    Stderr,
    /// One line from stdin.
    Line,
}

/// `console` only reads keys through a `Term` attached to a terminal, so a
/// keypress needs a terminal stdin plus one terminal output.
const fn key_reader(stdin_is_term: bool, stdout_is_term: bool, stderr_is_term: bool) -> KeyReader {
    match (stdin_is_term, stdout_is_term, stderr_is_term) {
        (false, _, _) => KeyReader::Line,
        (true, true, _) => KeyReader::Stdout,
        (true, false, true) => KeyReader::Stderr,
        (true, false, false) => KeyReader::Line,
    }
}
