//! Logger handles: prefixed, timestamped line writers

use std::fmt;

use chrono::Local;

use super::format::TIMESTAMP_FORMAT;
use super::sink::Sink;

/// A named, prefixed writer bound to exactly one [`Sink`].
///
/// The four process-wide handles (debug, info, warning, error) are all
/// instances of this one type; they differ only in prefix and in which sink
/// the registry currently binds them to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Logger {
    prefix: &'static str,
    sink: Sink,
}

impl Logger {
    #[must_use]
    pub const fn new(sink: Sink, prefix: &'static str) -> Self {
        Self { prefix, sink }
    }

    #[must_use]
    pub fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// The sink this handle is currently bound to.
    #[must_use]
    pub fn sink(&self) -> Sink {
        self.sink
    }

    /// Whether writes through this handle currently reach a live stream.
    #[must_use]
    pub fn enabled(&self) -> bool {
        !self.sink.is_discard()
    }

    pub(crate) fn rebind(&mut self, sink: Sink) {
        self.sink = sink;
    }

    /// Format and write one prefixed, timestamped line.
    ///
    /// A discarding handle returns before formatting anything, so a
    /// disabled log call costs a branch and no allocation.
    pub fn log(&self, args: fmt::Arguments<'_>) {
        if self.sink.is_discard() {
            return;
        }
        self.sink.write_line(&self.format_line(args));
    }

    fn format_line(&self, args: fmt::Arguments<'_>) -> String {
        let timestamp = Local::now().format(TIMESTAMP_FORMAT);
        format!("{}{} {}", self.prefix, timestamp, args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    #[test]
    fn test_const_construction() {
        const LOGGER: Logger = Logger::new(Sink::Stdout, "INFO: ");
        assert_eq!(LOGGER.prefix(), "INFO: ");
        assert_eq!(LOGGER.sink(), Sink::Stdout);
    }

    #[test]
    fn test_enabled_tracks_sink() {
        let mut logger = Logger::new(Sink::Stdout, "DEBUG: ");
        assert!(logger.enabled());
        logger.rebind(Sink::Discard);
        assert!(!logger.enabled());
        assert_eq!(logger.sink(), Sink::Discard);
    }

    #[test]
    fn test_format_line_shape() {
        let logger = Logger::new(Sink::Stdout, "WARNING: ");
        let line = logger.format_line(format_args!("retry {} of {}", 1, 3));

        let rest = line.strip_prefix("WARNING: ").expect("prefix first");
        let (timestamp, message) = rest.split_at(26);
        assert!(NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT).is_ok());
        assert_eq!(message, " retry 1 of 3");
    }

    #[test]
    fn test_log_to_discard_is_noop() {
        let logger = Logger::new(Sink::Discard, "DEBUG: ");
        logger.log(format_args!("dropped {}", 42));
    }
}
