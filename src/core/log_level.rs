//! Log level definitions
//!
//! Levels are ordered ranks with gaps of ten between the canonical levels so
//! that applications can slot their own levels in between or above.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(try_from = "LevelRepr")]
pub struct LogLevel(u8);

impl LogLevel {
    /// Lets every record through when used as a minimum level
    pub const NOTSET: LogLevel = LogLevel(0);
    pub const DEBUG: LogLevel = LogLevel(10);
    pub const INFO: LogLevel = LogLevel(20);
    pub const WARNING: LogLevel = LogLevel(30);
    pub const ERROR: LogLevel = LogLevel(40);
    pub const CRITICAL: LogLevel = LogLevel(50);

    /// The five levels that carry a name and a color
    pub const CANONICAL: [LogLevel; 5] = [
        LogLevel::DEBUG,
        LogLevel::INFO,
        LogLevel::WARNING,
        LogLevel::ERROR,
        LogLevel::CRITICAL,
    ];

    /// Build a level from a raw rank; ranks outside the canonical set are legal
    pub const fn new(rank: u8) -> Self {
        LogLevel(rank)
    }

    #[inline]
    pub const fn rank(self) -> u8 {
        self.0
    }

    /// Canonical display name, `None` for custom ranks
    pub const fn name(self) -> Option<&'static str> {
        match self.0 {
            0 => Some("NOTSET"),
            10 => Some("DEBUG"),
            20 => Some("INFO"),
            30 => Some("WARNING"),
            40 => Some("ERROR"),
            50 => Some("CRITICAL"),
            _ => None,
        }
    }

    pub fn is_canonical(self) -> bool {
        Self::CANONICAL.contains(&self)
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::DEBUG
    }
}

impl From<u8> for LogLevel {
    fn from(rank: u8) -> Self {
        LogLevel(rank)
    }
}

impl From<LogLevel> for u8 {
    fn from(level: LogLevel) -> Self {
        level.0
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // pad() keeps width/alignment flags working for `{:>8}`
        match self.name() {
            Some(name) => f.pad(name),
            None => f.pad(&self.0.to_string()),
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(rank) = trimmed.parse::<u8>() {
            return Ok(LogLevel(rank));
        }
        match trimmed.to_uppercase().as_str() {
            "NOTSET" => Ok(LogLevel::NOTSET),
            "DEBUG" => Ok(LogLevel::DEBUG),
            "INFO" => Ok(LogLevel::INFO),
            "WARN" | "WARNING" => Ok(LogLevel::WARNING),
            "ERROR" => Ok(LogLevel::ERROR),
            "FATAL" | "CRITICAL" => Ok(LogLevel::CRITICAL),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LevelRepr {
    Rank(u8),
    Name(String),
}

impl TryFrom<LevelRepr> for LogLevel {
    type Error = String;

    fn try_from(repr: LevelRepr) -> Result<Self, Self::Error> {
        match repr {
            LevelRepr::Rank(rank) => Ok(LogLevel(rank)),
            LevelRepr::Name(name) => name.parse(),
        }
    }
}
