// std imports
use std::collections::TryReserveError;
use std::fmt;
use std::io::Write;
use std::ops::Range;

// third-party imports
use memchr::memchr;
use strum::{EnumIter, IntoEnumIterator};

// local imports
use crate::{
    error::{Error, Result},
    timestamp::{Clock, LocalClock, Timestamp},
};

// ---

/// Placeholder that can appear in an output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter)]
pub enum Field {
    DateTime,
    Hostname,
    Username,
    Password,
    Port,
}

impl Field {
    /// Literal token matched in templates, case-sensitive.
    pub const fn token(self) -> &'static str {
        match self {
            Self::DateTime => "%DATETIME%",
            Self::Hostname => "%HOSTNAME%",
            Self::Username => "%USERNAME%",
            Self::Password => "%PASSWORD%",
            Self::Port => "%PORT%",
        }
    }

    fn at(s: &[u8]) -> Option<Self> {
        Self::iter().find(|field| s.starts_with(field.token().as_bytes()))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

// ---

/// Values of a successful login.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Login<'a> {
    pub hostname: &'a str,
    pub port: u16,
    pub username: &'a str,
    pub password: &'a str,
}

#[cfg(test)]
impl crate::testing::Sample for Login<'static> {
    fn sample() -> Self {
        Self {
            hostname: "10.0.0.5",
            port: 22,
            username: "root",
            password: "toor",
        }
    }
}

// ---

#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    Literal(Range<usize>),
    Field(Field),
}

/// Output format compiled into literal and placeholder segments.
///
/// The template is scanned once, left to right. Values are inserted at the
/// original placeholder positions, so a value that happens to contain a
/// token is written verbatim and never substituted again. Anything that
/// is not one of the known tokens, including a lone `%`, stays literal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputFormat {
    raw: String,
    segments: Vec<Segment>,
}

impl OutputFormat {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let segments = compile(raw.as_bytes());
        Self { raw, segments }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Placeholders in order of appearance, repeated ones included.
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Field(field) => Some(*field),
            Segment::Literal(_) => None,
        })
    }

    /// Produces the result line for `login` with `datetime` as the time.
    pub fn render(&self, datetime: Timestamp, login: &Login<'_>) -> Result<String> {
        let mut port = itoa::Buffer::new();
        let port = port.format(login.port);
        let datetime = datetime.to_string();

        let mut output = String::new();
        output.try_reserve(self.raw.len())?;

        for segment in &self.segments {
            match segment {
                Segment::Literal(range) => append(&mut output, &self.raw[range.clone()])?,
                Segment::Field(field) => {
                    let value = match field {
                        Field::DateTime => datetime.as_str(),
                        Field::Hostname => login.hostname,
                        Field::Username => login.username,
                        Field::Password => login.password,
                        Field::Port => port,
                    };
                    append(&mut output, value).map_err(|source| Error::Substitution { field: *field, source })?;
                }
            }
        }

        Ok(output)
    }
}

impl From<&str> for OutputFormat {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for OutputFormat {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

fn compile(raw: &[u8]) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut start = 0;
    let mut pos = 0;

    while let Some(offset) = memchr(b'%', &raw[pos..]) {
        let i = pos + offset;
        match Field::at(&raw[i..]) {
            Some(field) => {
                if start < i {
                    segments.push(Segment::Literal(start..i));
                }
                segments.push(Segment::Field(field));
                pos = i + field.token().len();
                start = pos;
            }
            None => pos = i + 1,
        }
    }

    if start < raw.len() {
        segments.push(Segment::Literal(start..raw.len()));
    }

    segments
}

#[inline]
fn append(output: &mut String, value: &str) -> std::result::Result<(), TryReserveError> {
    output.try_reserve(value.len())?;
    output.push_str(value);
    Ok(())
}

// ---

/// Renders successful logins with the configured output format.
pub struct Renderer<C = LocalClock> {
    format: Option<OutputFormat>,
    clock: C,
}

impl Renderer {
    pub fn new(format: Option<OutputFormat>) -> Self {
        Self {
            format,
            clock: LocalClock,
        }
    }
}

impl<C: Clock> Renderer<C> {
    pub fn with_clock<C2: Clock>(self, clock: C2) -> Renderer<C2> {
        Renderer {
            format: self.format,
            clock,
        }
    }

    pub fn format(&self) -> Option<&OutputFormat> {
        self.format.as_ref()
    }

    /// Renders the result line without writing it anywhere.
    pub fn render(&self, login: &Login<'_>) -> Result<String> {
        let format = self.format.as_ref().ok_or(Error::MissingOutputFormat)?;
        format.render(self.clock.now(), login)
    }

    /// Writes the rendered line to `stream` as is, without adding a newline.
    ///
    /// Nothing is written if rendering fails. The line goes out in a single
    /// `write_all` call, so a stream that fails midway may keep the bytes it
    /// accepted before [`Error::Io`] is returned.
    pub fn render_successful_login<W: Write + ?Sized>(&self, stream: &mut W, login: &Login<'_>) -> Result<()> {
        let line = self.render(login)?;
        stream.write_all(line.as_bytes())?;
        stream.flush()?;
        Ok(())
    }
}
