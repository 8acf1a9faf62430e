//! User-facing terminal output.

use console::style;
use std::io::{self, Write};

/// Writes progress to stdout and errors to stderr, honouring `--quiet`.
///
/// Styling is dropped automatically when the stream is not a terminal.
#[derive(Debug, Clone)]
pub struct OutputManager {
    quiet: bool,
}

impl OutputManager {
    /// Creates an output manager.
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Prints a progress line.
    pub fn progress(&self, message: &str) -> io::Result<()> {
        self.stdout_line(&format!("{} {}", style("==>").cyan().bold(), message))
    }

    /// Prints a success line.
    pub fn success(&self, message: &str) -> io::Result<()> {
        self.stdout_line(&format!("{} {}", style("✓").green(), message))
    }

    /// Prints a section header.
    pub fn section(&self, title: &str) -> io::Result<()> {
        self.stdout_line(&format!("\n{}", style(title).bold()))
    }

    /// Prints an indented line.
    pub fn indent(&self, message: &str) -> io::Result<()> {
        self.stdout_line(&format!("    {}", style(message).dim()))
    }

    /// Prints a fatal error to stderr; shown even in quiet mode.
    pub fn error(&self, message: &str) -> io::Result<()> {
        let mut stderr = io::stderr().lock();
        writeln!(stderr, "{} {}", style("Error:").for_stderr().red().bold(), message)
    }

    /// Prints a recovery hint to stderr; shown even in quiet mode.
    pub fn hint(&self, message: &str) -> io::Result<()> {
        let mut stderr = io::stderr().lock();
        writeln!(stderr, "  {} {}", style("hint:").for_stderr().yellow(), message)
    }

    fn stdout_line(&self, line: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", line)
    }
}
