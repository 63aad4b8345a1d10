//! Error rendering formats

use std::error::Error;
use std::fmt::Write as _;

/// Timestamp layout for logger output: local date and time with
/// microsecond precision, e.g. `2025/01/08 10:30:45.123456`.
pub(crate) const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S%.6f";

/// Selects how error values are rendered into human-readable strings.
///
/// Exactly one format is active at a time, determined by the current
/// [`LogLevel`](super::LogLevel) via [`LogLevel::formatter`](super::LogLevel::formatter).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorFormat {
    /// The plain `Display` rendering.
    Terse,
    /// The `Debug` rendering with field-level detail, followed by the full
    /// `source()` cause chain, one `caused by:` line per cause.
    Verbose,
}

impl ErrorFormat {
    #[must_use]
    pub fn render(&self, err: &(dyn Error + 'static)) -> String {
        match self {
            ErrorFormat::Terse => err.to_string(),
            ErrorFormat::Verbose => {
                let mut out = format!("{err:?}");
                let mut cause = err.source();
                while let Some(next) = cause {
                    let _ = write!(out, "\ncaused by: {next}");
                    cause = next.source();
                }
                out
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("outer failed")]
    struct Outer {
        #[source]
        inner: Inner,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("inner failed")]
    struct Inner;

    #[test]
    fn test_terse_is_display() {
        let err = Outer { inner: Inner };
        assert_eq!(ErrorFormat::Terse.render(&err), "outer failed");
    }

    #[test]
    fn test_verbose_includes_cause_chain() {
        let err = Outer { inner: Inner };
        let rendered = ErrorFormat::Verbose.render(&err);
        assert!(rendered.starts_with("Outer"));
        assert!(rendered.contains("caused by: inner failed"));
    }

    #[test]
    fn test_verbose_without_cause_is_debug_only() {
        let err = Inner;
        assert_eq!(ErrorFormat::Verbose.render(&err), "Inner");
    }
}
