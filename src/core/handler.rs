//! Handler trait for log output destinations

use super::{
    error::Result, filter::Filter, formatter::Formatter, log_level::LogLevel, record::Record,
};
use std::fmt;

/// Dispatch order of handler variants; stream handlers run before file handlers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum HandlerKind {
    Stream,
    File,
}

/// Gating and formatting shared by every handler
pub struct HandlerOptions {
    pub level: LogLevel,
    pub formatter: Option<Formatter>,
    pub filter: Option<Box<dyn Filter>>,
}

impl HandlerOptions {
    pub fn new(level: LogLevel) -> Self {
        Self {
            level,
            formatter: None,
            filter: None,
        }
    }

    /// Level gate first, then the filter
    pub fn accepts(&self, record: &Record) -> bool {
        record.level() >= self.level
            && self
                .filter
                .as_ref()
                .map_or(true, |filter| filter.allow(record))
    }

    /// Without a formatter the bare message is written, one per line
    pub fn render(&self, record: &Record) -> Vec<u8> {
        match &self.formatter {
            Some(formatter) => formatter.render(record),
            None => {
                let mut bytes = Vec::with_capacity(record.message().len() + 1);
                bytes.extend_from_slice(record.message().as_bytes());
                bytes.push(b'\n');
                bytes
            }
        }
    }
}

impl Default for HandlerOptions {
    fn default() -> Self {
        Self::new(LogLevel::DEBUG)
    }
}

impl fmt::Debug for HandlerOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerOptions")
            .field("level", &self.level)
            .field("formatter", &self.formatter)
            .field("filter", &self.filter.as_ref().map(|_| "<filter>"))
            .finish()
    }
}

pub trait Handler: Send {
    fn name(&self) -> &str;
    fn kind(&self) -> HandlerKind;
    fn options(&self) -> &HandlerOptions;

    /// Write one rendered record straight to the destination
    fn write(&mut self, bytes: &[u8]) -> Result<()>;
    fn flush(&mut self) -> Result<()>;

    fn accepts(&self, record: &Record) -> bool {
        self.options().accepts(record)
    }

    fn render(&self, record: &Record) -> Vec<u8> {
        self.options().render(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::record::CallSite;

    fn record(level: LogLevel) -> Record {
        Record::new(level, CallSite::caller(), format_args!("payload"))
    }

    #[test]
    fn test_accepts_checks_level_then_filter() {
        let mut options = HandlerOptions::new(LogLevel::WARNING);
        assert!(!options.accepts(&record(LogLevel::INFO)));
        assert!(options.accepts(&record(LogLevel::ERROR)));

        options.filter = Some(Box::new(|r: &Record| r.level() != LogLevel::ERROR));
        assert!(!options.accepts(&record(LogLevel::ERROR)));
        assert!(options.accepts(&record(LogLevel::CRITICAL)));
    }

    #[test]
    fn test_render_without_formatter_passes_message_through() {
        let options = HandlerOptions::default();
        assert_eq!(options.render(&record(LogLevel::INFO)), b"payload\n");
    }

    #[test]
    fn test_kind_order() {
        assert!(HandlerKind::Stream < HandlerKind::File);
    }
}
