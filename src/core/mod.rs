//! Core logger types and traits

pub mod color;
pub mod config;
pub mod error;
pub mod filter;
pub mod formatter;
pub mod handler;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod record;

pub use color::{ColorTable, Emphasis, LevelColor, COLOR_CLEAR};
pub use config::{HandlerConfig, LoggerConfig, StreamTarget};
pub use error::{LoggerError, Result};
pub use filter::{Filter, LevelRange};
pub use formatter::{Formatter, DEFAULT_TEMPLATE, DEFAULT_TIME_FORMAT, PLAIN_TEMPLATE};
pub use handler::{Handler, HandlerKind, HandlerOptions};
pub use log_level::LogLevel;
pub use logger::{ErrorCallback, Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use record::{CallSite, Record};
