// ABOUTME: Output formatting for CLI results.
// ABOUTME: The code goes to stdout without a newline; failures go to stderr as `ERROR: ...`.

use std::fmt::Display;
use std::io::{self, Write};

/// Writes results and errors to a pair of streams.
pub struct Output<O, E> {
    stdout: O,
    stderr: E,
}

impl Output<io::Stdout, io::Stderr> {
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> Output<O, E> {
    pub fn new(stdout: O, stderr: E) -> Self {
        Self { stdout, stderr }
    }

    /// Print the resolved code, with no trailing newline.
    pub fn code(&mut self, code: &str) -> io::Result<()> {
        self.stdout.write_all(code.as_bytes())?;
        self.stdout.flush()
    }

    /// Print a single-line error message.
    pub fn error(&mut self, message: &dyn Display) -> io::Result<()> {
        writeln!(self.stderr, "ERROR: {message}")?;
        self.stderr.flush()
    }

    pub fn into_inner(self) -> (O, E) {
        (self.stdout, self.stderr)
    }
}
