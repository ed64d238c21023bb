//! Record filters
//!
//! A filter is a side-effect free predicate over the record being dispatched.
//! Any `Fn(&Record) -> bool + Send + Sync` closure is a filter.

use super::log_level::LogLevel;
use super::record::Record;

pub trait Filter: Send + Sync {
    /// `false` suppresses the record for whatever the filter is attached to
    fn allow(&self, record: &Record) -> bool;
}

impl<F> Filter for F
where
    F: Fn(&Record) -> bool + Send + Sync,
{
    fn allow(&self, record: &Record) -> bool {
        self(record)
    }
}

/// Passes records whose level lies in `[min, max]`
///
/// Handy for a console handler that should not repeat what an error file
/// already captures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelRange {
    pub min: LogLevel,
    pub max: LogLevel,
}

impl LevelRange {
    pub fn new(min: LogLevel, max: LogLevel) -> Self {
        Self { min, max }
    }
}

impl Filter for LevelRange {
    fn allow(&self, record: &Record) -> bool {
        (self.min..=self.max).contains(&record.level())
    }
}
