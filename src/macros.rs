//! Logging macros for ergonomic log message formatting.
//!
//! These macros take `format!`-style arguments and attribute the record to the
//! function, file and line where the macro is written.
//!
//! # Examples
//!
//! ```
//! use leveled_logger::prelude::*;
//! use leveled_logger::info;
//!
//! let logger = Logger::new();
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! ```

/// Call site of the macro invocation, including the enclosing function path.
#[doc(hidden)]
#[macro_export]
macro_rules! __call_site {
    () => {{
        fn __f() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::core::any::type_name::<T>()
        }
        $crate::CallSite::new(
            ::core::option::Option::Some($crate::core::record::enclosing_function(
                __type_name_of(__f),
            )),
            ::core::file!(),
            ::core::line!(),
        )
    }};
}

/// Log a message at any level.
///
/// # Examples
///
/// ```
/// # use leveled_logger::prelude::*;
/// # let logger = Logger::new();
/// use leveled_logger::log;
/// log!(logger, LogLevel::INFO, "Simple message");
/// log!(logger, LogLevel::new(25), "Notice code: {}", 7);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log_at($level, $crate::__call_site!(), ::core::format_args!($($arg)+))
    };
}

/// Log a debug-level message.
///
/// ```
/// # use leveled_logger::prelude::*;
/// # let logger = Logger::new();
/// use leveled_logger::debug;
/// debug!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::DEBUG, $($arg)+)
    };
}

/// Log an info-level message.
///
/// ```
/// # use leveled_logger::prelude::*;
/// # let logger = Logger::new();
/// use leveled_logger::info;
/// info!(logger, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::INFO, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// ```
/// # use leveled_logger::prelude::*;
/// # let logger = Logger::new();
/// use leveled_logger::warning;
/// warning!(logger, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::WARNING, $($arg)+)
    };
}

/// Log an error-level message.
///
/// ```
/// # use leveled_logger::prelude::*;
/// # let logger = Logger::new();
/// use leveled_logger::error;
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::ERROR, $($arg)+)
    };
}

/// Log a critical-level message.
///
/// ```
/// # use leveled_logger::prelude::*;
/// # let logger = Logger::new();
/// use leveled_logger::critical;
/// critical!(logger, "Unable to recover from error: {}", "disk full");
/// ```
#[macro_export]
macro_rules! critical {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::CRITICAL, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Formatter, Logger, LogLevel};
    use crate::handlers::StreamHandler;
    use parking_lot::Mutex;
    use std::io::{self, Write};
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture(template: &str) -> (Logger, SharedBuffer) {
        let buffer = SharedBuffer::default();
        let logger = Logger::builder()
            .min_level(LogLevel::NOTSET)
            .handler(
                StreamHandler::new(buffer.clone())
                    .with_level(LogLevel::NOTSET)
                    .with_formatter(Formatter::new(template, "%Y").unwrap()),
            )
            .build();
        (logger, buffer)
    }

    fn lines(buffer: &SharedBuffer) -> Vec<String> {
        String::from_utf8_lossy(&buffer.0.lock())
            .lines()
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_level_macros() {
        let (logger, buffer) = capture("{level} {message}");
        debug!(logger, "Count: {}", 5);
        info!(logger, "Items: {}", 100);
        warning!(logger, "Retry {} of {}", 1, 3);
        error!(logger, "Code: {}", 500);
        critical!(logger, "Critical failure: {}", "system");
        log!(logger, LogLevel::new(25), "custom");

        assert_eq!(
            lines(&buffer),
            vec![
                "DEBUG Count: 5",
                "INFO Items: 100",
                "WARNING Retry 1 of 3",
                "ERROR Code: 500",
                "CRITICAL Critical failure: system",
                "25 custom",
            ]
        );
    }

    #[test]
    fn test_macro_captures_enclosing_function() {
        let (logger, buffer) = capture("{function}|{file}|{line}");
        let expected_line = line!() + 1;
        info!(logger, "here");

        let captured = lines(&buffer);
        assert_eq!(
            captured[0],
            format!(
                "{}|macros.rs|{}",
                "leveled_logger::macros::tests::test_macro_captures_enclosing_function",
                expected_line
            )
        );
    }

    #[test]
    fn test_macro_inside_closure_reports_outer_function() {
        let (logger, buffer) = capture("{function}");
        let run = || info!(logger, "from closure");
        run();

        assert_eq!(
            lines(&buffer),
            vec!["leveled_logger::macros::tests::test_macro_inside_closure_reports_outer_function"]
        );
    }
}
