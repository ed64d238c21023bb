//! ANSI color sequences keyed by level rank
//!
//! Kept apart from the level names so a formatter can recolor levels (or add
//! colors for custom ranks) without touching how levels are named.

use super::log_level::LogLevel;
use colored::Color;
use std::collections::BTreeMap;

/// Resets all terminal attributes
pub const COLOR_CLEAR: &str = "\x1b[0m";

/// Weight of the foreground color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Normal = 0,
    Bold = 1,
}

/// Start and clear sequences for one level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelColor {
    start: String,
    clear: &'static str,
}

impl LevelColor {
    /// Build `\x1b[<emphasis>;<color>m`, cleared by `\x1b[0m`
    pub fn new(color: Color, emphasis: Emphasis) -> Self {
        Self {
            start: format!("\x1b[{};{}m", emphasis as u8, color.to_fg_str()),
            clear: COLOR_CLEAR,
        }
    }

    /// Renders as nothing on both sides
    pub const fn none() -> Self {
        Self {
            start: String::new(),
            clear: "",
        }
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn clear(&self) -> &str {
        self.clear
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorTable {
    colors: BTreeMap<LogLevel, LevelColor>,
}

impl ColorTable {
    /// A table with no entries; every level renders uncolored
    pub fn empty() -> Self {
        Self {
            colors: BTreeMap::new(),
        }
    }

    /// Set or replace the color of one rank
    #[must_use]
    pub fn with(mut self, level: LogLevel, color: Color, emphasis: Emphasis) -> Self {
        self.colors.insert(level, LevelColor::new(color, emphasis));
        self
    }

    /// Color for `level`, or the uncolored pair when the rank has no entry
    pub fn get(&self, level: LogLevel) -> LevelColor {
        self.colors
            .get(&level)
            .cloned()
            .unwrap_or_else(LevelColor::none)
    }

    /// Borrowing lookup used on the render path
    pub(crate) fn lookup(&self, level: LogLevel) -> Option<&LevelColor> {
        self.colors.get(&level)
    }
}

impl Default for ColorTable {
    fn default() -> Self {
        Self::empty()
            .with(LogLevel::DEBUG, Color::Blue, Emphasis::Normal)
            .with(LogLevel::INFO, Color::Green, Emphasis::Normal)
            .with(LogLevel::WARNING, Color::Yellow, Emphasis::Normal)
            .with(LogLevel::ERROR, Color::Red, Emphasis::Bold)
            .with(LogLevel::CRITICAL, Color::Magenta, Emphasis::Bold)
    }
}
