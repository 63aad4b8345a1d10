//! Core registry types

pub mod error;
pub mod format;
pub mod log_level;
pub mod logger;
pub mod registry;
pub mod sink;

pub use error::{IncorrectLevel, LevelError, Result};
pub use format::ErrorFormat;
pub use log_level::LogLevel;
pub use logger::Logger;
pub use registry::{
    debug_logger, error_formatter, error_logger, info_logger, log_level, update_log_level,
    warning_logger, Registry,
};
pub use sink::Sink;
