//! Styled terminal output for linebench
//!
//! Human-facing messages go through [`Output`] so quiet and verbose modes are
//! honoured in one place. The benchmark summary itself is printed directly by
//! the commands because it is the program's result, not a message.

use console::style;

/// Output handler for consistent CLI formatting
pub struct Output {
    verbose: bool,
    quiet: bool,
}

impl Output {
    /// Create a new output handler
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", style("✔").green(), message);
        }
    }

    /// Print an info message
    pub fn info(&self, message: &str) {
        if !self.quiet {
            println!("{} {}", style("ℹ").blue(), message);
        }
    }

    /// Print a verbose message (only if verbose mode is enabled)
    pub fn verbose(&self, message: &str) {
        if self.verbose && !self.quiet {
            println!("{} {}", style("ℹ").dim(), style(message).dim());
        }
    }

    /// Print a section header
    pub fn header(&self, title: &str) {
        if self.verbose && !self.quiet {
            println!("\n{}", style(title).bold().cyan());
        }
    }

    /// Print a key-value pair in verbose mode
    pub fn key_value(&self, key: &str, value: &str) {
        if self.verbose && !self.quiet {
            println!("  {:<20} {}", style(key).dim(), value);
        }
    }
}
