//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON configuration error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Malformed formatter template
    #[error("Invalid template at byte {position}: {message}")]
    Template { position: usize, message: String },

    /// Malformed strftime pattern
    #[error("Invalid time format '{pattern}'")]
    TimeFormat { pattern: String },

    /// File handler error with path
    #[error("File handler error for '{path}': {message}")]
    FileHandler {
        path: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Writer error (generic)
    #[error("Writer error: {0}")]
    WriterError(String),

    /// A handler panicked while rendering or writing
    #[error("Handler '{handler}' panicked: {message}")]
    HandlerPanicked { handler: String, message: String },
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a template error pointing at a byte offset of the template
    pub fn template(position: usize, message: impl Into<String>) -> Self {
        LoggerError::Template {
            position,
            message: message.into(),
        }
    }

    pub fn time_format(pattern: impl Into<String>) -> Self {
        LoggerError::TimeFormat {
            pattern: pattern.into(),
        }
    }

    /// Create a file handler error
    pub fn file_handler(path: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::FileHandler {
            path: path.into(),
            message: source.to_string(),
            source,
        }
    }

    /// Create a writer error (generic)
    pub fn writer<S: Into<String>>(msg: S) -> Self {
        LoggerError::WriterError(msg.into())
    }

    pub fn handler_panicked(handler: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::HandlerPanicked {
            handler: handler.into(),
            message: message.into(),
        }
    }

    /// Whether this error was raised while building the logger rather than while writing
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            LoggerError::InvalidConfiguration { .. }
                | LoggerError::Template { .. }
                | LoggerError::TimeFormat { .. }
                | LoggerError::FileHandler { .. }
                | LoggerError::JsonError(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::config("FileHandler", "Invalid path");
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
        assert!(err.is_configuration());

        let err = LoggerError::template(3, "unknown field 'lvl'");
        assert!(matches!(err, LoggerError::Template { position: 3, .. }));

        let err = LoggerError::writer("broken pipe");
        assert!(!err.is_configuration());
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::template(7, "unterminated placeholder");
        assert_eq!(
            err.to_string(),
            "Invalid template at byte 7: unterminated placeholder"
        );

        let err = LoggerError::time_format("%Q");
        assert_eq!(err.to_string(), "Invalid time format '%Q'");

        let err = LoggerError::handler_panicked("stream", "boom");
        assert_eq!(err.to_string(), "Handler 'stream' panicked: boom");
    }

    #[test]
    fn test_file_handler_error_keeps_source() {
        use std::error::Error;

        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = LoggerError::file_handler("/var/log/app.log", io_err);

        assert!(err.is_configuration());
        assert!(err.to_string().contains("/var/log/app.log"));
        assert!(err.to_string().contains("access denied"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_io_operation_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err = LoggerError::io_operation("writing to stdout", "cannot write record", io_err);

        assert!(matches!(err, LoggerError::IoOperation { .. }));
        assert!(err.to_string().contains("writing to stdout"));
    }
}
