//! # Tracelog
//!
//! A process-wide, level-gated logging facade: four named severity loggers
//! (debug, info, warning, error) whose verbosity is adjusted at runtime
//! through a single log level, and whose error-message formatting follows
//! that same level.
//!
//! ## Features
//!
//! - **One knob**: [`update_log_level`] switches the whole process between
//!   `NORMAL`, `DEVEL`, and `ERROR` verbosity
//! - **Fixed sinks**: loggers write to stdout, stderr, or a discard sink;
//!   discarded writes cost a branch and no allocation
//! - **Thread safe**: the registry lives behind a lock, so readers never
//!   observe a half-applied level change
//! - **Level-aware errors**: [`LevelError`] renders with the formatter
//!   active when it is *displayed*, not when it was created
//!
//! ## Levels
//!
//! | Level    | debug   | info    | warning | error  |
//! |----------|---------|---------|---------|--------|
//! | `NORMAL` | discard | stdout  | stdout  | stderr |
//! | `DEVEL`  | stdout  | stdout  | stdout  | stderr |
//! | `ERROR`  | discard | discard | discard | stderr |
//!
//! `DEVEL` additionally switches error rendering from terse to verbose
//! (debug representation plus cause chain).
//!
//! ## Example
//!
//! ```
//! use tracelog::{info, update_log_level, warning};
//!
//! update_log_level("NORMAL").expect("valid level");
//! info!("backup started");
//! warning!("bandwidth limited to {} KB/s", 512);
//! ```

pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        debug_logger, error_formatter, error_logger, info_logger, log_level, update_log_level,
        warning_logger, ErrorFormat, IncorrectLevel, LevelError, LogLevel, Logger, Registry,
        Result, Sink,
    };
}

pub use core::{
    debug_logger, error_formatter, error_logger, info_logger, log_level, update_log_level,
    warning_logger, ErrorFormat, IncorrectLevel, LevelError, LogLevel, Logger, Registry, Result,
    Sink,
};
