// std imports
use std::fmt;

// third-party imports
use chrono::{Datelike, Local, NaiveDateTime, Timelike};

// ---

/// Number of characters in a formatted timestamp.
pub const WIDTH: usize = 19;

/// Returns the current local time.
#[inline]
pub fn now() -> Timestamp {
    LocalClock.now()
}

// ---

/// Wall-clock time truncated to seconds, displayed as `YYYY/MM/DD HH:MM:SS`.
///
/// Each call produces its own value, so there is no shared formatting buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    pub fn new(dt: NaiveDateTime) -> Self {
        Self(dt)
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(dt: NaiveDateTime) -> Self {
        Self(dt)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dt = &self.0;
        write!(
            f,
            "{:04}/{:02}/{:02} {:02}:{:02}:{:02}",
            dt.year(),
            dt.month(),
            dt.day(),
            dt.hour(),
            dt.minute(),
            dt.second(),
        )
    }
}

// ---

/// Source of the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}

/// Clock reading local system time.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    #[inline]
    fn now(&self) -> Timestamp {
        Timestamp(Local::now().naive_local())
    }
}

/// Clock that always returns the same time.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub Timestamp);

impl Clock for FixedClock {
    #[inline]
    fn now(&self) -> Timestamp {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    #[inline]
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}
