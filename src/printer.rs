// std imports
use std::fmt;
use std::io::Write;
use std::panic::Location;

// local imports
use crate::{
    eseq::CLEAR_LINE,
    level::Level,
    theme::Theme,
    timestamp::{Clock, LocalClock},
    verbosity::{Verbosity, VerbosityFlag},
};

// ---

/// Source file and line a message originates from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SourceLocation {
    pub file: &'static str,
    pub line: u32,
}

impl SourceLocation {
    pub const fn new(file: &'static str, line: u32) -> Self {
        Self { file, line }
    }

    /// Location of the outermost `#[track_caller]` call site.
    #[track_caller]
    pub fn caller() -> Self {
        Location::caller().into()
    }
}

impl From<&Location<'static>> for SourceLocation {
    fn from(location: &Location<'static>) -> Self {
        Self::new(location.file(), location.line())
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

// ---

/// Writes timestamped console lines gated by level and verbosity.
///
/// Each line is assembled in a local buffer and handed to the stream with a
/// single `write_all` followed by `flush`, so concurrent callers sharing a
/// [`SharedWriter`](crate::output::SharedWriter) never see torn lines.
/// Write failures are traced with [`log`] and otherwise ignored.
pub struct Printer<C = LocalClock> {
    verbosity: Verbosity,
    theme: Theme,
    debug_build: bool,
    clock: C,
}

impl Printer {
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            theme: Theme::default(),
            debug_build: cfg!(debug_assertions),
            clock: LocalClock,
        }
    }
}

impl<C: Clock> Printer<C> {
    pub fn with_theme(self, theme: Theme) -> Self {
        Self { theme, ..self }
    }

    /// Overrides whether source locations are written for every level
    /// (debug build) or only for non-debug levels.
    pub fn with_debug_build(self, debug_build: bool) -> Self {
        Self { debug_build, ..self }
    }

    pub fn with_clock<C2: Clock>(self, clock: C2) -> Printer<C2> {
        Printer {
            verbosity: self.verbosity,
            theme: self.theme,
            debug_build: self.debug_build,
            clock,
        }
    }

    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Returns true if messages of the given level would be written.
    #[inline]
    pub fn enabled(&self, level: Level) -> bool {
        !level.is_gated() || self.verbosity.contains(VerbosityFlag::Verbose)
    }

    /// Writes a single decorated line.
    ///
    /// Layout: line-clear sequence, `head`, `[timestamp] `, optional
    /// `file:line `, message, `tail`, newline.
    pub fn emit<W: Write + ?Sized>(
        &self,
        level: Level,
        location: Option<SourceLocation>,
        head: &[u8],
        tail: &[u8],
        stream: &mut W,
        args: fmt::Arguments<'_>,
    ) {
        if !self.enabled(level) {
            return;
        }

        let mut buf = Vec::with_capacity(128);
        buf.extend_from_slice(CLEAR_LINE);
        buf.extend_from_slice(head);
        write!(buf, "[{}] ", self.clock.now()).ok();
        if let Some(location) = location.filter(|_| self.debug_build || !level.is_gated()) {
            write!(buf, "{} ", location).ok();
        }
        buf.write_fmt(args).ok();
        buf.extend_from_slice(tail);
        buf.push(b'\n');

        deliver(stream, &buf);
    }

    /// Writes `timestamp `, then the message as is.
    ///
    /// No gating, no line clearing and no trailing newline.
    pub fn log_line<W: Write + ?Sized>(&self, stream: &mut W, args: fmt::Arguments<'_>) {
        let mut buf = Vec::with_capacity(64);
        write!(buf, "{} ", self.clock.now()).ok();
        buf.write_fmt(args).ok();

        deliver(stream, &buf);
    }

    /// Writes a line using the theme's decoration for `level` and the caller's location.
    #[track_caller]
    pub fn print<W: Write + ?Sized>(&self, level: Level, stream: &mut W, args: fmt::Arguments<'_>) {
        let decoration = self.theme.decoration(level);
        self.emit(
            level,
            Some(SourceLocation::caller()),
            decoration.head.data(),
            decoration.tail.data(),
            stream,
            args,
        );
    }

    #[track_caller]
    pub fn error<W: Write + ?Sized>(&self, stream: &mut W, args: fmt::Arguments<'_>) {
        self.print(Level::Error, stream, args)
    }

    #[track_caller]
    pub fn warning<W: Write + ?Sized>(&self, stream: &mut W, args: fmt::Arguments<'_>) {
        self.print(Level::Warning, stream, args)
    }

    #[track_caller]
    pub fn info<W: Write + ?Sized>(&self, stream: &mut W, args: fmt::Arguments<'_>) {
        self.print(Level::Info, stream, args)
    }

    #[track_caller]
    pub fn debug<W: Write + ?Sized>(&self, stream: &mut W, args: fmt::Arguments<'_>) {
        self.print(Level::Debug, stream, args)
    }
}

fn deliver<W: Write + ?Sized>(stream: &mut W, buf: &[u8]) {
    if let Err(err) = stream.write_all(buf).and_then(|_| stream.flush()) {
        log::debug!("failed to write console message: {}", err);
    }
}
