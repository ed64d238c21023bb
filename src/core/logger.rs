//! Main logger implementation

use super::{
    error::{LoggerError, Result},
    filter::Filter,
    formatter::Formatter,
    handler::Handler,
    log_level::LogLevel,
    metrics::LoggerMetrics,
    record::{CallSite, Record},
};
use crate::handlers::StreamHandler;
use parking_lot::Mutex;
use std::any::Any;
use std::cell::Cell;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

/// Callback invoked with the handler name and the error when a handler fails
pub type ErrorCallback = Arc<dyn Fn(&str, &LoggerError) + Send + Sync>;

thread_local! {
    /// Set while this thread is inside an `on_error` callback
    static IN_ERROR_CALLBACK: Cell<bool> = const { Cell::new(false) };
}

/// Synchronous leveled logger
///
/// Every call runs the whole pipeline on the caller's thread: level gate,
/// record construction, logger filter, then each handler's own level and
/// filter before it renders and writes. Nothing is queued.
///
/// Handler failures are contained. They are counted in [`Logger::metrics`],
/// kept as [`Logger::last_error`] and passed to the `on_error` callback; they
/// never propagate to the code that logged.
///
/// The callback may log again. Failures raised while it runs are counted and
/// kept as `last_error` but do not invoke the callback a second time, so a
/// handler that keeps failing cannot recurse.
///
/// A panicking handler is still reported by the process panic hook, which
/// prints to stderr by default. Install a hook with [`std::panic::set_hook`]
/// to silence it.
///
/// # Example
///
/// ```
/// use leveled_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .min_level(LogLevel::INFO)
///     .handler(StreamHandler::stdout().with_formatter(Formatter::default()))
///     .build();
///
/// logger.info(format_args!("listening on {}", 8080));
/// logger.debug(format_args!("not shown"));
/// ```
pub struct Logger {
    min_level: LogLevel,
    filter: Option<Box<dyn Filter>>,
    handlers: Mutex<Vec<Box<dyn Handler>>>,
    metrics: LoggerMetrics,
    on_error: Option<ErrorCallback>,
    last_error: Mutex<Option<String>>,
}

impl Logger {
    /// Logger at DEBUG with no handlers
    #[must_use]
    pub fn new() -> Self {
        Self {
            min_level: LogLevel::DEBUG,
            filter: None,
            handlers: Mutex::new(Vec::new()),
            metrics: LoggerMetrics::new(),
            on_error: None,
            last_error: Mutex::new(None),
        }
    }

    /// Ready-to-use logger: DEBUG, one colored stdout handler at DEBUG
    #[must_use]
    pub fn with_default_config() -> Self {
        let mut logger = Self::new();
        logger.add_handler(Box::new(
            StreamHandler::stdout()
                .with_level(LogLevel::DEBUG)
                .with_formatter(Formatter::default()),
        ));
        logger
    }

    /// Stream handlers are kept ahead of file handlers; otherwise handlers
    /// run in the order they were added.
    pub fn add_handler(&mut self, handler: Box<dyn Handler>) {
        let handlers = self.handlers.get_mut();
        let kind = handler.kind();
        let index = handlers.partition_point(|existing| existing.kind() <= kind);
        handlers.insert(index, handler);
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.lock().len()
    }

    pub fn set_min_level(&mut self, level: LogLevel) {
        self.min_level = level;
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    /// Whether a record at `level` would get past the logger's own level gate
    #[inline]
    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    pub fn set_filter<F: Filter + 'static>(&mut self, filter: F) {
        self.filter = Some(Box::new(filter));
    }

    pub fn clear_filter(&mut self) {
        self.filter = None;
    }

    pub fn set_on_error(&mut self, callback: ErrorCallback) {
        self.on_error = Some(callback);
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Most recent handler failure, as `"<handler>: <error>"`
    pub fn last_error(&self) -> Option<String> {
        self.last_error.lock().clone()
    }

    /// Log at `level`, attributing the record to the caller's file and line
    #[track_caller]
    pub fn log(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        if !self.enabled(level) {
            return;
        }
        self.log_at(level, CallSite::caller(), args);
    }

    /// Log with an explicit call site; the logging macros land here
    pub fn log_at(&self, level: LogLevel, call_site: CallSite, args: fmt::Arguments<'_>) {
        if !self.enabled(level) {
            return;
        }

        let record = Record::new(level, call_site, args);
        self.metrics.record_built();
        self.dispatch(&record);
    }

    fn dispatch(&self, record: &Record) {
        if let Some(filter) = &self.filter {
            if !filter.allow(record) {
                self.metrics.record_suppressed();
                return;
            }
        }

        let mut failures = Vec::new();
        {
            let mut handlers = self.handlers.lock();
            for handler in handlers.iter_mut() {
                if !handler.accepts(record) {
                    continue;
                }

                // Per-handler panic isolation: a broken sink must not starve the rest
                let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
                    let bytes = handler.render(record);
                    handler.write(&bytes)
                }));

                let result = match outcome {
                    Ok(result) => result,
                    Err(payload) => Err(LoggerError::handler_panicked(
                        handler.name(),
                        panic_message(&*payload),
                    )),
                };

                match result {
                    Ok(()) => {
                        self.metrics.record_write();
                    }
                    Err(err) => failures.push((handler.name().to_string(), err)),
                }
            }
        }

        // Reported outside the handler lock so a callback may log again
        for (name, err) in failures {
            self.report_failure(&name, err);
        }
    }

    fn report_failure(&self, handler: &str, err: LoggerError) {
        self.metrics.record_write_failure();
        *self.last_error.lock() = Some(format!("{}: {}", handler, err));

        let Some(callback) = &self.on_error else {
            return;
        };
        if IN_ERROR_CALLBACK.with(|active| active.replace(true)) {
            return;
        }
        // A panicking callback is dropped like a panicking handler
        let _ = panic::catch_unwind(AssertUnwindSafe(|| callback(handler, &err)));
        IN_ERROR_CALLBACK.with(|active| active.set(false));
    }

    pub fn flush(&self) -> Result<()> {
        let mut handlers = self.handlers.lock();
        for handler in handlers.iter_mut() {
            handler.flush()?;
        }
        Ok(())
    }

    #[inline]
    #[track_caller]
    pub fn debug(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::DEBUG, args);
    }

    #[inline]
    #[track_caller]
    pub fn info(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::INFO, args);
    }

    #[inline]
    #[track_caller]
    pub fn warning(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::WARNING, args);
    }

    #[inline]
    #[track_caller]
    pub fn error(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::ERROR, args);
    }

    #[inline]
    #[track_caller]
    pub fn critical(&self, args: fmt::Arguments<'_>) {
        self.log(LogLevel::CRITICAL, args);
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use leveled_logger::prelude::*;
/// use std::sync::Arc;
///
/// let logger = Logger::builder()
///     .min_level(LogLevel::INFO)
///     .filter(|record: &Record| !record.message().contains("password"))
///     .handler(StreamHandler::stderr().with_level(LogLevel::WARNING))
///     .on_error(Arc::new(|handler, err| {
///         eprintln!("log handler {} failed: {}", handler, err);
///     }))
///     .build();
/// ```
pub struct LoggerBuilder {
    min_level: LogLevel,
    filter: Option<Box<dyn Filter>>,
    handlers: Vec<Box<dyn Handler>>,
    on_error: Option<ErrorCallback>,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self {
            min_level: LogLevel::DEBUG,
            filter: None,
            handlers: Vec::new(),
            on_error: None,
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Logger-wide filter, consulted before any handler
    #[must_use = "builder methods return a new value"]
    pub fn filter<F: Filter + 'static>(mut self, filter: F) -> Self {
        self.filter = Some(Box::new(filter));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn handler<H: Handler + 'static>(mut self, handler: H) -> Self {
        self.handlers.push(Box::new(handler));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn boxed_handler(mut self, handler: Box<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn on_error(mut self, callback: ErrorCallback) -> Self {
        self.on_error = Some(callback);
        self
    }

    pub fn build(self) -> Logger {
        let mut logger = Logger::new();
        logger.set_min_level(self.min_level);
        logger.filter = self.filter;
        logger.on_error = self.on_error;
        for handler in self.handlers {
            logger.add_handler(handler);
        }
        logger
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
