//! Logging macros for ergonomic log message formatting.
//!
//! Each macro formats like `println!` and writes through the corresponding
//! process-wide logger handle under whatever sink the current log level has
//! bound it to.
//!
//! # Examples
//!
//! ```
//! use tracelog::info;
//!
//! let port = 8080;
//! info!("Server listening on port {}", port);
//! ```

/// Log a debug-level message.
///
/// Discarded unless the process-wide level is `DEVEL`.
///
/// # Examples
///
/// ```
/// use tracelog::debug;
/// debug!("Entering function: calculate()");
/// debug!("Variable value: {}", 42);
/// ```
#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => {
        $crate::debug_logger().log(format_args!($($arg)+))
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// use tracelog::info;
/// info!("Application started");
/// info!("Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => {
        $crate::info_logger().log(format_args!($($arg)+))
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// use tracelog::warning;
/// warning!("Low disk space");
/// warning!("Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warning {
    ($($arg:tt)+) => {
        $crate::warning_logger().log(format_args!($($arg)+))
    };
}

/// Log an error-level message. Always written to stderr, at every level.
///
/// # Examples
///
/// ```
/// use tracelog::error;
/// error!("Failed to connect to database");
/// error!("Error code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => {
        $crate::error_logger().log(format_args!($($arg)+))
    };
}
