//! Log level registry: the single source of truth for verbosity

use parking_lot::RwLock;

use super::error::Result;
use super::format::ErrorFormat;
use super::log_level::LogLevel;
use super::logger::Logger;
use super::sink::Sink;

/// Current level plus the four logger handles it configures.
///
/// All mutation goes through [`Registry::update_log_level`], so the level
/// and the sink bindings are always mutually consistent. The process-wide
/// instance lives behind an `RwLock`; a `Registry` value can also be held
/// directly where an isolated configuration is wanted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    level: LogLevel,
    debug: Logger,
    info: Logger,
    warning: Logger,
    error: Logger,
}

impl Registry {
    /// The `NORMAL` configuration: debug discarded, info and warning on
    /// stdout, error on stderr.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            level: LogLevel::Normal,
            debug: Logger::new(Sink::Discard, "DEBUG: "),
            info: Logger::new(Sink::Stdout, "INFO: "),
            warning: Logger::new(Sink::Stdout, "WARNING: "),
            error: Logger::new(Sink::Stderr, "ERROR: "),
        }
    }

    /// Validate and commit a new log level, then rebind the logger sinks.
    ///
    /// An invalid candidate leaves the registry untouched and returns an
    /// error carrying the candidate and the accepted values. The rebind
    /// runs on every successful update, including updates that restate the
    /// current level.
    pub fn update_log_level(&mut self, candidate: &str) -> Result<()> {
        self.level = candidate.parse::<LogLevel>()?;
        self.rebind_sinks();
        Ok(())
    }

    fn rebind_sinks(&mut self) {
        let debug_sink = match self.level {
            LogLevel::Devel => Sink::Stdout,
            LogLevel::Normal | LogLevel::Error => Sink::Discard,
        };
        let chatter_sink = match self.level {
            LogLevel::Error => Sink::Discard,
            LogLevel::Normal | LogLevel::Devel => Sink::Stdout,
        };
        self.debug.rebind(debug_sink);
        self.info.rebind(chatter_sink);
        self.warning.rebind(chatter_sink);
        // The error handle stays on stderr at every level.
    }

    #[must_use]
    pub fn log_level(&self) -> LogLevel {
        self.level
    }

    /// Error formatter for the current level. Pure read, no side effects.
    #[must_use]
    pub fn error_formatter(&self) -> ErrorFormat {
        self.level.formatter()
    }

    #[must_use]
    pub fn debug_logger(&self) -> Logger {
        self.debug
    }

    #[must_use]
    pub fn info_logger(&self) -> Logger {
        self.info
    }

    #[must_use]
    pub fn warning_logger(&self) -> Logger {
        self.warning
    }

    #[must_use]
    pub fn error_logger(&self) -> Logger {
        self.error
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

static REGISTRY: RwLock<Registry> = RwLock::new(Registry::new());

/// Update the process-wide log level.
///
/// The sole mutating entry point, typically called once at startup from
/// configuration or CLI parsing. Readers never observe a torn state: the
/// level commit and the sink rebind happen under one write lock.
pub fn update_log_level(candidate: &str) -> Result<()> {
    REGISTRY.write().update_log_level(candidate)
}

/// The currently active process-wide log level.
#[must_use]
pub fn log_level() -> LogLevel {
    REGISTRY.read().log_level()
}

/// Error formatter selected by the current process-wide level.
#[must_use]
pub fn error_formatter() -> ErrorFormat {
    REGISTRY.read().error_formatter()
}

/// Snapshot of the process-wide debug handle under its current binding.
#[must_use]
pub fn debug_logger() -> Logger {
    REGISTRY.read().debug_logger()
}

/// Snapshot of the process-wide info handle under its current binding.
#[must_use]
pub fn info_logger() -> Logger {
    REGISTRY.read().info_logger()
}

/// Snapshot of the process-wide warning handle under its current binding.
#[must_use]
pub fn warning_logger() -> Logger {
    REGISTRY.read().warning_logger()
}

/// Snapshot of the process-wide error handle. Always bound to stderr.
#[must_use]
pub fn error_logger() -> Logger {
    REGISTRY.read().error_logger()
}
