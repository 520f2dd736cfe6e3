//! Output helpers for the CLI
//!
//! The report goes to stdout. Errors and verbose diagnostics go to stderr.

/// Output helper for consistent formatting
pub struct Output {
    verbose: bool,
}

impl Output {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Prints the rendered report
    pub fn report(&self, text: &str) {
        println!("{}", text);
    }

    /// Prints an error message
    pub fn error(&self, message: &str) {
        eprintln!("Error: {}", message);
    }

    /// Returns true if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Prints a verbose debug message (only when --verbose is set)
    pub fn verbose(&self, message: &str) {
        if self.verbose {
            eprintln!("[verbose] {}", message);
        }
    }

    /// Prints a verbose debug message with context (only when --verbose is set)
    pub fn verbose_ctx(&self, context: &str, message: &str) {
        if self.verbose {
            eprintln!("[verbose:{}] {}", context, message);
        }
    }
}
