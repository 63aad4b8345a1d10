//! Error types for the level registry

use std::error::Error;
use std::fmt;

use super::log_level::LogLevel;
use super::registry;

pub type Result<T> = std::result::Result<T, LevelError>;

/// The underlying "incorrect level" error.
///
/// Captures the offending candidate and the rendered list of valid levels
/// at construction time.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("got incorrect log level: '{candidate}', expected one of: '{expected}'")]
pub struct IncorrectLevel {
    pub(crate) candidate: String,
    pub(crate) expected: String,
}

/// Rejected log-level update.
///
/// Wraps [`IncorrectLevel`] and renders it through the [`ErrorFormat`]
/// active at the moment of stringification, not the one active at
/// construction. The same instance therefore prints tersely under `NORMAL`
/// and verbosely after a later switch to `DEVEL`. This late binding is
/// deliberate: every error in the process uniformly adopts the current
/// verbosity the moment it is displayed.
///
/// [`ErrorFormat`]: super::ErrorFormat
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelError {
    inner: IncorrectLevel,
}

impl LevelError {
    #[must_use]
    pub fn new(candidate: impl Into<String>) -> Self {
        Self {
            inner: IncorrectLevel {
                candidate: candidate.into(),
                expected: LogLevel::expected_list(),
            },
        }
    }

    /// The rejected candidate string.
    #[must_use]
    pub fn candidate(&self) -> &str {
        &self.inner.candidate
    }
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", registry::error_formatter().render(&self.inner))
    }
}

impl Error for LevelError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_captures_candidate_and_expected() {
        let err = LevelError::new("VERBOSE");
        assert_eq!(err.candidate(), "VERBOSE");
        assert_eq!(err.inner.expected, "NORMAL, DEVEL, ERROR");
    }

    #[test]
    fn test_incorrect_level_message() {
        let err = LevelError::new("quiet");
        assert_eq!(
            err.inner.to_string(),
            "got incorrect log level: 'quiet', expected one of: 'NORMAL, DEVEL, ERROR'"
        );
    }

    #[test]
    fn test_source_exposes_inner() {
        let err = LevelError::new("");
        let source = err.source().expect("wraps the incorrect-level error");
        assert!(source.to_string().contains("expected one of"));
    }
}
