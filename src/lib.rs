//! # Leveled Logger
//!
//! A synchronous leveled logging facility. Each log call is gated by the
//! logger's level and optional filter, turned into a [`Record`] that carries
//! the caller's function, file and line, and handed to every attached
//! handler whose own level and filter accept it.
//!
//! ## Features
//!
//! - **Numeric levels**: DEBUG=10 through CRITICAL=50, custom ranks in between
//! - **Templates**: `{color}[{time}] {level:>8} {message}` style formatting
//! - **Two sinks**: stream (console) and file handlers, each with its own gating
//! - **Contained failures**: a broken sink never reaches the calling code
//!
//! ```
//! use leveled_logger::prelude::*;
//! use leveled_logger::{info, warning};
//!
//! let logger = Logger::with_default_config();
//! info!(logger, "service started on port {}", 8080);
//! warning!(logger, "cache is {}% full", 93);
//! ```

pub mod core;
pub mod handlers;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        CallSite, ColorTable, Emphasis, ErrorCallback, Filter, Formatter, Handler, HandlerKind,
        LevelRange, LogLevel, Logger, LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics,
        Record, Result,
    };
    pub use crate::handlers::{FileHandler, StreamHandler};
}

pub use crate::core::{
    CallSite, ColorTable, Emphasis, ErrorCallback, Filter, Formatter, Handler, HandlerConfig,
    HandlerKind, HandlerOptions, LevelColor, LevelRange, LogLevel, Logger, LoggerBuilder,
    LoggerConfig, LoggerError, LoggerMetrics, Record, Result, StreamTarget, COLOR_CLEAR,
    DEFAULT_TEMPLATE, DEFAULT_TIME_FORMAT, PLAIN_TEMPLATE,
};
pub use handlers::{FileHandler, StreamHandler};
