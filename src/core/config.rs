//! Declarative logger configuration
//!
//! Describes a logger as data so it can live in a JSON file next to the rest
//! of an application's settings. Everything that can be wrong with it (bad
//! template, bad time format, empty or unopenable file path) is reported by
//! [`LoggerConfig::build`]. Filters are code and are attached afterwards with
//! [`Logger::set_filter`].
//!
//! ```
//! use leveled_logger::{LogLevel, LoggerConfig};
//!
//! let config = LoggerConfig::from_json(r#"{
//!     "level": "info",
//!     "handlers": [
//!         { "kind": "stream", "target": "stderr", "level": "warning" }
//!     ]
//! }"#).unwrap();
//!
//! let logger = config.build().unwrap();
//! assert_eq!(logger.min_level(), LogLevel::INFO);
//! assert_eq!(logger.handler_count(), 1);
//! ```

use super::error::{LoggerError, Result};
use super::formatter::{Formatter, DEFAULT_TEMPLATE, DEFAULT_TIME_FORMAT, PLAIN_TEMPLATE};
use super::handler::Handler;
use super::log_level::LogLevel;
use super::logger::Logger;
use crate::handlers::{FileHandler, StreamHandler};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggerConfig {
    #[serde(default)]
    pub level: LogLevel,
    #[serde(default)]
    pub handlers: Vec<HandlerConfig>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreamTarget {
    #[default]
    Stdout,
    Stderr,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase", deny_unknown_fields)]
pub enum HandlerConfig {
    Stream {
        #[serde(default)]
        level: LogLevel,
        #[serde(default)]
        target: StreamTarget,
        template: Option<String>,
        time_format: Option<String>,
        /// Defaults to true
        colors: Option<bool>,
    },
    File {
        path: PathBuf,
        #[serde(default)]
        level: LogLevel,
        template: Option<String>,
        time_format: Option<String>,
        /// Defaults to false
        colors: Option<bool>,
    },
}

impl HandlerConfig {
    /// Open the destination and build the formatter
    pub fn build(&self) -> Result<Box<dyn Handler>> {
        match self {
            HandlerConfig::Stream {
                level,
                target,
                template,
                time_format,
                colors,
            } => {
                let formatter = formatter(
                    template.as_deref().unwrap_or(DEFAULT_TEMPLATE),
                    time_format.as_deref(),
                    colors.unwrap_or(true),
                )?;
                Ok(match target {
                    StreamTarget::Stdout => Box::new(
                        StreamHandler::stdout()
                            .with_level(*level)
                            .with_formatter(formatter),
                    ),
                    StreamTarget::Stderr => Box::new(
                        StreamHandler::stderr()
                            .with_level(*level)
                            .with_formatter(formatter),
                    ),
                })
            }
            HandlerConfig::File {
                path,
                level,
                template,
                time_format,
                colors,
            } => {
                if path.as_os_str().is_empty() {
                    return Err(LoggerError::config("file handler", "path is empty"));
                }
                let formatter = formatter(
                    template.as_deref().unwrap_or(PLAIN_TEMPLATE),
                    time_format.as_deref(),
                    colors.unwrap_or(false),
                )?;
                Ok(Box::new(
                    FileHandler::new(path)?
                        .with_level(*level)
                        .with_formatter(formatter),
                ))
            }
        }
    }
}

fn formatter(template: &str, time_format: Option<&str>, colors: bool) -> Result<Formatter> {
    let formatter = Formatter::new(template, time_format.unwrap_or(DEFAULT_TIME_FORMAT))?;
    Ok(if colors {
        formatter
    } else {
        formatter.without_colors()
    })
}

impl LoggerConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build every handler, failing on the first configuration error
    pub fn build(&self) -> Result<Logger> {
        let mut logger = Logger::new();
        logger.set_min_level(self.level);
        for handler in &self.handlers {
            logger.add_handler(handler.build()?);
        }
        Ok(logger)
    }
}

impl Default for LoggerConfig {
    /// Same shape as [`Logger::with_default_config`]
    fn default() -> Self {
        Self {
            level: LogLevel::DEBUG,
            handlers: vec![HandlerConfig::Stream {
                level: LogLevel::DEBUG,
                target: StreamTarget::Stdout,
                template: None,
                time_format: None,
                colors: None,
            }],
        }
    }
}
