//! Log level definitions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::LevelError;
use super::format::ErrorFormat;

/// Process-wide verbosity setting.
///
/// The canonical strings `NORMAL`, `DEVEL`, and `ERROR` are part of the
/// public contract: parsing is case-sensitive and serde round-trips them
/// exactly, so persisted configuration never drifts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    #[default]
    Normal,
    Devel,
    Error,
}

impl LogLevel {
    /// Every valid level, in declaration order.
    pub const ALL: [LogLevel; 3] = [LogLevel::Normal, LogLevel::Devel, LogLevel::Error];

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Normal => "NORMAL",
            LogLevel::Devel => "DEVEL",
            LogLevel::Error => "ERROR",
        }
    }

    /// The valid levels rendered for error messages: `NORMAL, DEVEL, ERROR`.
    pub fn expected_list() -> String {
        Self::ALL.map(|level| level.as_str()).join(", ")
    }

    /// Error formatter active while this level is current.
    ///
    /// `DEVEL` selects the verbose rendering with diagnostic context; the
    /// other levels keep error messages terse.
    pub fn formatter(&self) -> ErrorFormat {
        match self {
            LogLevel::Normal | LogLevel::Error => ErrorFormat::Terse,
            LogLevel::Devel => ErrorFormat::Verbose,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = LevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Exact, case-sensitive match only.
        match s {
            "NORMAL" => Ok(LogLevel::Normal),
            "DEVEL" => Ok(LogLevel::Devel),
            "ERROR" => Ok(LogLevel::Error),
            _ => Err(LevelError::new(s)),
        }
    }
}
