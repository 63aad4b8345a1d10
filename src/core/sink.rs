//! Output destinations for logger handles

use std::io::Write;

/// Destination a [`Logger`](super::Logger) writes to.
///
/// `Discard` accepts and drops everything: it never fails, never blocks,
/// and the write path allocates nothing for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sink {
    Stdout,
    Stderr,
    Discard,
}

impl Sink {
    /// Write one newline-terminated line to the destination.
    ///
    /// Stream write failures are ignored: logging is infallible from the
    /// caller's point of view, per this crate's error model.
    pub fn write_line(&self, line: &str) {
        match self {
            Sink::Stdout => {
                let stdout = std::io::stdout();
                let mut handle = stdout.lock();
                let _ = writeln!(handle, "{line}");
            }
            Sink::Stderr => {
                let stderr = std::io::stderr();
                let mut handle = stderr.lock();
                let _ = writeln!(handle, "{line}");
            }
            Sink::Discard => {}
        }
    }

    #[must_use]
    pub fn is_discard(&self) -> bool {
        matches!(self, Sink::Discard)
    }
}
