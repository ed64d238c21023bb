//! File handler implementation

use crate::core::{
    Filter, Formatter, Handler, HandlerKind, HandlerOptions, LogLevel, LoggerError, Result,
};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Appends records to a file
///
/// The file is opened (and created if missing) when the handler is built, so
/// a bad path fails here rather than on the first log call. Writes go straight
/// to the file without an intermediate buffer.
///
/// Color is a formatter decision: pair this handler with
/// [`Formatter::plain`] to keep escape sequences out of the file.
pub struct FileHandler {
    file: File,
    path: PathBuf,
    name: String,
    options: HandlerOptions,
}

impl FileHandler {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| LoggerError::file_handler(path.display().to_string(), e))?;

        Ok(Self {
            file,
            name: format!("file:{}", path.display()),
            path,
            options: HandlerOptions::default(),
        })
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

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Handler for FileHandler {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> HandlerKind {
        HandlerKind::File
    }

    fn options(&self) -> &HandlerOptions {
        &self.options
    }

    fn write(&mut self, bytes: &[u8]) -> Result<()> {
        self.file.write_all(bytes).map_err(|e| {
            LoggerError::io_operation(
                format!("writing to {}", self.path.display()),
                e.to_string(),
                e,
            )
        })
    }

    fn flush(&mut self) -> Result<()> {
        self.file.flush()?;
        Ok(())
    }
}
