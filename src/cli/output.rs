//! Diagnostics stream for the compressor
//!
//! Everything here goes to stderr. Stdout is reserved for the report so it can
//! be piped straight into a JSON consumer even when files were skipped.

use std::fmt::Display;

/// Writer for skip notices and fatal errors
pub struct Output {
    quiet: bool,
}

impl Output {
    /// Create a new output handler
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Report a file that could not be processed
    pub fn skip(&self, name: &str, reason: &dyn Display) {
        if !self.quiet {
            eprintln!("{}", skip_line(name, reason));
        }
    }

    /// Report an error that ends the run
    pub fn fatal(&self, message: &dyn Display) {
        // Fatal errors are always shown, even in quiet mode
        eprintln!("{}", message);
    }
}

fn skip_line(name: &str, reason: &dyn Display) -> String {
    format!("Skipping {}: {}", name, reason)
}
