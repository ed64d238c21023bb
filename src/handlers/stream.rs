//! Stream handler implementation

use crate::core::{
    Filter, Formatter, Handler, HandlerKind, HandlerOptions, LogLevel, LoggerError, Result,
};
use std::io::{self, Stderr, Stdout, Write};

/// Writes to a console-like stream
///
/// Every write is followed by a flush so nothing lingers in the stream's own
/// buffer when the log call returns.
///
/// # Example
///
/// ```
/// use leveled_logger::{Formatter, LogLevel, StreamHandler};
///
/// let handler = StreamHandler::stderr()
///     .with_level(LogLevel::WARNING)
///     .with_formatter(Formatter::default());
/// ```
pub struct StreamHandler<W: Write + Send> {
    writer: W,
    name: String,
    options: HandlerOptions,
}

impl StreamHandler<Stdout> {
    pub fn stdout() -> Self {
        Self::with_name(io::stdout(), "stdout")
    }
}

impl StreamHandler<Stderr> {
    pub fn stderr() -> Self {
        Self::with_name(io::stderr(), "stderr")
    }
}

impl<W: Write + Send> StreamHandler<W> {
    /// Wrap any writer; the handler becomes its only owner
    pub fn new(writer: W) -> Self {
        Self::with_name(writer, "stream")
    }

    pub fn with_name(writer: W, name: impl Into<String>) -> Self {
        Self {
            writer,
            name: name.into(),
            options: HandlerOptions::default(),
        }
    }

    /// Minimum level this handler writes
    #[must_use]
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.options.level = level;
        self
    }

    #[must_use]
    pub fn with_formatter(mut self, formatter: Formatter) -> Self {
        self.options.formatter = Some(formatter);
        self
    }

    #[must_use]
    pub fn with_filter<F: Filter + 'static>(mut self, filter: F) -> Self {
        self.options.filter = Some(Box::new(filter));
        self
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> Handler for StreamHandler<W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> HandlerKind {
        HandlerKind::Stream
    }

    fn options(&self) -> &HandlerOptions {
        &self.options
    }

    fn write(&mut self, bytes: &[u8]) -> Result<()> {
        self.writer
            .write_all(bytes)
            .and_then(|()| self.writer.flush())
            .map_err(|e| {
                LoggerError::io_operation(format!("writing to {}", self.name), e.to_string(), e)
            })
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CallSite, Record};

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "reader went away"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_writes_rendered_bytes() {
        let mut handler = StreamHandler::new(Vec::new())
            .with_formatter(Formatter::new("{level}: {message}", "%Y").unwrap());

        let record = Record::new(LogLevel::WARNING, CallSite::caller(), format_args!("low disk"));
        assert!(handler.accepts(&record));
        let bytes = handler.render(&record);
        handler.write(&bytes).unwrap();

        assert_eq!(handler.into_inner(), b"WARNING: low disk\n");
    }

    #[test]
    fn test_write_failure_is_reported() {
        let mut handler = StreamHandler::with_name(BrokenPipe, "pipe");
        let err = handler.write(b"lost\n").unwrap_err();

        assert!(matches!(err, LoggerError::IoOperation { .. }));
        assert!(err.to_string().contains("pipe"));
    }

    #[test]
    fn test_level_gate() {
        let handler = StreamHandler::new(Vec::new()).with_level(LogLevel::ERROR);
        let record = Record::new(LogLevel::WARNING, CallSite::caller(), format_args!("x"));
        assert!(!handler.accepts(&record));
        assert_eq!(handler.kind(), HandlerKind::Stream);
        assert_eq!(handler.name(), "stream");
    }
}
