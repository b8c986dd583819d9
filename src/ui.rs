//! Console output
//!
//! All user-facing messages, errors included, go to standard output.

use colored::Colorize;
use std::io::{self, Write};

/// Verbosity levels for output
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Normal = 0,
    Verbose = 1,
}

/// Writes messages to an output stream at a given verbosity
pub struct Console<W: Write> {
    out: W,
    verbosity: Verbosity,
}

impl Console<io::Stdout> {
    /// Console on the process's standard output
    pub fn stdout() -> Self {
        Console::new(io::stdout())
    }
}

impl<W: Write> Console<W> {
    pub fn new(out: W) -> Self {
        Console {
            out,
            verbosity: Verbosity::Normal,
        }
    }

    /// Set verbosity level
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    pub fn set_verbosity(&mut self, verbosity: Verbosity) {
        self.verbosity = verbosity;
    }

    /// Print a plain line
    pub fn line(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{}", message)
    }

    /// Print a confirmation
    pub fn success(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{}", message.green())
    }

    /// Print a warning
    pub fn warn(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{} {}", "Warning:".yellow().bold(), message)
    }

    /// Print a message only in verbose mode
    pub fn debug(&mut self, message: &str) -> io::Result<()> {
        if self.verbosity >= Verbosity::Verbose {
            writeln!(self.out, "{}", message)?;
        }
        Ok(())
    }

    /// Print a prompt without a line break and flush it
    pub fn prompt(&mut self, message: &str) -> io::Result<()> {
        write!(self.out, "{}", message)?;
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(console: Console<Vec<u8>>) -> String {
        String::from_utf8(console.into_inner()).unwrap()
    }

    #[test]
    fn test_debug_hidden_at_normal() {
        let mut console = Console::new(Vec::new());
        console.debug("hidden").unwrap();
        console.line("shown").unwrap();
        assert_eq!(output(console), "shown\n");
    }

    #[test]
    fn test_debug_shown_when_verbose() {
        let mut console = Console::new(Vec::new()).with_verbosity(Verbosity::Verbose);
        console.debug("Added https://ex.com/").unwrap();
        assert_eq!(output(console), "Added https://ex.com/\n");
    }

    #[test]
    fn test_prompt_has_no_newline() {
        let mut console = Console::new(Vec::new());
        console.prompt("Enter: ").unwrap();
        assert_eq!(output(console), "Enter: ");
    }

    #[test]
    fn test_verbosity_levels() {
        assert!(Verbosity::Verbose > Verbosity::Normal);
    }
}
