//! Template-driven rendering of records
//!
//! A template is plain text with `{field}` placeholders. A placeholder may carry
//! a `[[fill]align][width]` spec after a colon, e.g. `{level:>8}` or
//! `{message:-<20}`. `{{` and `}}` produce literal braces.
//!
//! | field         | value                                        |
//! |---------------|----------------------------------------------|
//! | `color`       | color start sequence of the record's level   |
//! | `time`        | timestamp rendered with the time format      |
//! | `level`       | level name, or rank for custom levels        |
//! | `function`    | calling function path, `?` when unknown      |
//! | `file`        | source file base name                        |
//! | `line`        | source line                                  |
//! | `color_clear` | color clear sequence of the record's level   |
//! | `message`     | formatted message text                       |

use super::color::ColorTable;
use super::error::{LoggerError, Result};
use super::record::Record;
use chrono::format::{Item, StrftimeItems};
use std::borrow::Cow;

/// Colored console line: `[time] LEVEL  function file line message`
pub const DEFAULT_TEMPLATE: &str =
    "{color}[{time}] {level:>8}  {function} {file} {line} {color_clear} {message}";

/// Same columns as [`DEFAULT_TEMPLATE`] without escape sequences
pub const PLAIN_TEMPLATE: &str = "[{time}] {level:>8}  {function} {file} {line} {message}";

pub const DEFAULT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Widest padding a placeholder may request
const MAX_WIDTH: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Color,
    Time,
    Level,
    Function,
    File,
    Line,
    ColorClear,
    Message,
}

impl Field {
    fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "color" => Field::Color,
            "time" => Field::Time,
            "level" => Field::Level,
            "function" => Field::Function,
            "file" => Field::File,
            "line" => Field::Line,
            "color_clear" => Field::ColorClear,
            "message" => Field::Message,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
    Center,
}

impl Align {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '<' => Some(Align::Left),
            '>' => Some(Align::Right),
            '^' => Some(Align::Center),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Spec {
    fill: char,
    align: Align,
    width: usize,
}

impl Spec {
    fn parse(spec: &str, position: usize) -> Result<Self> {
        let mut chars = spec.chars();
        let (fill, align, rest) = match (chars.next(), chars.next()) {
            (Some(fill), Some(second)) if Align::from_char(second).is_some() => (
                fill,
                Align::from_char(second),
                &spec[fill.len_utf8() + 1..],
            ),
            (Some(first), _) if Align::from_char(first).is_some() => {
                (' ', Align::from_char(first), &spec[1..])
            }
            _ => (' ', None, spec),
        };

        if align.is_none() && rest.is_empty() {
            return Err(LoggerError::template(position, "empty format spec"));
        }

        let width = if rest.is_empty() {
            0
        } else {
            rest.parse::<usize>().map_err(|_| {
                LoggerError::template(position, format!("invalid width '{}'", rest))
            })?
        };
        if width > MAX_WIDTH {
            return Err(LoggerError::template(
                position,
                format!("width {} exceeds {}", width, MAX_WIDTH),
            ));
        }

        Ok(Self {
            fill,
            align: align.unwrap_or(Align::Left),
            width,
        })
    }

    fn pad_into(&self, out: &mut String, value: &str) {
        let padding = self.width.saturating_sub(value.chars().count());
        let (before, after) = match self.align {
            Align::Left => (0, padding),
            Align::Right => (padding, 0),
            Align::Center => (padding / 2, padding - padding / 2),
        };

        out.extend(std::iter::repeat(self.fill).take(before));
        out.push_str(value);
        out.extend(std::iter::repeat(self.fill).take(after));
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Field { field: Field, spec: Option<Spec> },
}

fn parse_template(template: &str) -> Result<Vec<Segment>> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut chars = template.char_indices().peekable();

    while let Some((pos, c)) = chars.next() {
        match c {
            '{' => {
                if chars.next_if(|&(_, next)| next == '{').is_some() {
                    literal.push('{');
                    continue;
                }

                let start = pos + 1;
                let end = template[start..]
                    .find('}')
                    .map(|offset| start + offset)
                    .ok_or_else(|| LoggerError::template(pos, "unterminated placeholder"))?;
                let placeholder = &template[start..end];
                if placeholder.contains('{') {
                    return Err(LoggerError::template(pos, "nested '{' in placeholder"));
                }

                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(parse_placeholder(placeholder, start)?);

                while chars.next_if(|&(index, _)| index <= end).is_some() {}
            }
            '}' => {
                if chars.next_if(|&(_, next)| next == '}').is_none() {
                    return Err(LoggerError::template(pos, "unmatched '}'"));
                }
                literal.push('}');
            }
            other => literal.push(other),
        }
    }

    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }
    Ok(segments)
}

fn parse_placeholder(placeholder: &str, position: usize) -> Result<Segment> {
    let (name, spec) = match placeholder.split_once(':') {
        Some((name, spec)) => (name, Some(spec)),
        None => (placeholder, None),
    };

    let field = Field::from_name(name)
        .ok_or_else(|| LoggerError::template(position, format!("unknown field '{}'", name)))?;
    let spec = spec
        .map(|spec| Spec::parse(spec, position + name.len() + 1))
        .transpose()?;

    Ok(Segment::Field { field, spec })
}

fn validate_time_format(pattern: &str) -> Result<()> {
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(LoggerError::time_format(pattern));
    }
    Ok(())
}

/// Renders a [`Record`] into one output line
///
/// # Example
///
/// ```
/// use leveled_logger::Formatter;
///
/// let formatter = Formatter::new("{level:>8} | {message}", "%H:%M:%S").unwrap();
/// assert_eq!(formatter.template(), "{level:>8} | {message}");
///
/// assert!(Formatter::new("{level:>8} | {msg}", "%H:%M:%S").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Formatter {
    template: String,
    time_format: String,
    segments: Vec<Segment>,
    colors: Option<ColorTable>,
}

impl Formatter {
    /// Parse `template` and check `time_format`; both errors surface here,
    /// never at render time.
    pub fn new(template: impl Into<String>, time_format: impl Into<String>) -> Result<Self> {
        let template = template.into();
        let time_format = time_format.into();

        let segments = parse_template(&template)?;
        validate_time_format(&time_format)?;

        Ok(Self {
            template,
            time_format,
            segments,
            colors: Some(ColorTable::default()),
        })
    }

    /// [`PLAIN_TEMPLATE`] with the default time format and no colors
    pub fn plain() -> Self {
        Self::new(PLAIN_TEMPLATE, DEFAULT_TIME_FORMAT)
            .expect("built-in plain template is valid")
            .without_colors()
    }

    #[must_use]
    pub fn with_colors(mut self, colors: ColorTable) -> Self {
        self.colors = Some(colors);
        self
    }

    /// `{color}` and `{color_clear}` render as empty strings
    #[must_use]
    pub fn without_colors(mut self) -> Self {
        self.colors = None;
        self
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn time_format(&self) -> &str {
        &self.time_format
    }

    pub fn colors(&self) -> Option<&ColorTable> {
        self.colors.as_ref()
    }

    pub fn render(&self, record: &Record) -> Vec<u8> {
        self.render_string(record).into_bytes()
    }

    /// Rendered line including the trailing newline
    pub fn render_string(&self, record: &Record) -> String {
        let mut out = String::with_capacity(self.template.len() + record.message().len() + 32);

        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Field { field, spec } => {
                    let value = self.field_value(*field, record);
                    match spec {
                        Some(spec) => spec.pad_into(&mut out, &value),
                        None => out.push_str(&value),
                    }
                }
            }
        }

        out.push('\n');
        out
    }

    fn field_value<'r>(&'r self, field: Field, record: &'r Record) -> Cow<'r, str> {
        let color = || {
            self.colors
                .as_ref()
                .and_then(|table| table.lookup(record.level()))
        };

        match field {
            Field::Color => Cow::Borrowed(color().map_or("", |c| c.start())),
            Field::ColorClear => Cow::Borrowed(color().map_or("", |c| c.clear())),
            Field::Time => Cow::Owned(record.timestamp().format(&self.time_format).to_string()),
            Field::Level => match record.level().name() {
                Some(name) => Cow::Borrowed(name),
                None => Cow::Owned(record.level().rank().to_string()),
            },
            Field::Function => Cow::Borrowed(record.function().unwrap_or("?")),
            Field::File => Cow::Borrowed(record.file()),
            Field::Line => Cow::Owned(record.line().to_string()),
            Field::Message => Cow::Borrowed(record.message()),
        }
    }
}

impl Default for Formatter {
    /// [`DEFAULT_TEMPLATE`] with [`DEFAULT_TIME_FORMAT`] and the default colors
    fn default() -> Self {
        Self::new(DEFAULT_TEMPLATE, DEFAULT_TIME_FORMAT).expect("built-in default template is valid")
    }
}
