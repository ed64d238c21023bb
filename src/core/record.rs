//! Log record structure and call-site capture

use super::log_level::LogLevel;
use chrono::{DateTime, Local};
use std::fmt;
use std::panic::Location;
use std::path::Path;

/// Where a log call was written in the consumer's source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    function: Option<&'static str>,
    file: &'static str,
    line: u32,
}

impl CallSite {
    pub const fn new(function: Option<&'static str>, file: &'static str, line: u32) -> Self {
        Self {
            function,
            file,
            line,
        }
    }

    /// File and line of the nearest caller not marked `#[track_caller]`
    #[track_caller]
    pub fn caller() -> Self {
        let location = Location::caller();
        Self::new(None, location.file(), location.line())
    }

    pub fn function(&self) -> Option<&'static str> {
        self.function
    }

    pub fn file(&self) -> &'static str {
        self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }
}

/// Turn a `type_name` of a nested item into the path of its enclosing function.
///
/// `app::handlers::serve::{{closure}}::__f` becomes `app::handlers::serve`.
#[doc(hidden)]
pub fn enclosing_function(type_name: &'static str) -> &'static str {
    let mut name = type_name.strip_suffix("::__f").unwrap_or(type_name);
    while let Some(stripped) = name.strip_suffix("::{{closure}}") {
        name = stripped;
    }
    name
}

/// One log event, built once per call that passes the logger's level gate
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    level: LogLevel,
    message: String,
    function: Option<&'static str>,
    file: &'static str,
    line: u32,
    timestamp: DateTime<Local>,
}

impl Record {
    pub fn new(level: LogLevel, call_site: CallSite, args: fmt::Arguments<'_>) -> Self {
        // as_str() avoids an allocation round trip for messages without arguments
        let message = match args.as_str() {
            Some(literal) => literal.to_string(),
            None => fmt::format(args),
        };

        Self {
            level,
            message,
            function: call_site.function,
            file: short_file_name(call_site.file),
            line: call_site.line,
            timestamp: Local::now(),
        }
    }

    /// Replace the timestamp, e.g. to build a reproducible record
    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn function(&self) -> Option<&'static str> {
        self.function
    }

    /// Base name of the source file
    pub fn file(&self) -> &'static str {
        self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn timestamp(&self) -> &DateTime<Local> {
        &self.timestamp
    }
}

fn short_file_name(path: &'static str) -> &'static str {
    Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
}
