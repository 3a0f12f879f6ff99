// third-party imports
use clap::ValueEnum;
use enum_map::Enum;
use strum::{AsRefStr, EnumIter};

// ---

/// Severity of a console message.
///
/// Only [`Level::Debug`] is gated by the verbosity configuration,
/// all other levels are always emitted.
#[derive(
    ValueEnum,
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Enum,
    EnumIter,
    AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum Level {
    #[value(alias = "err", alias = "e")]
    Error,
    #[value(alias = "warn", alias = "wrn", alias = "w")]
    Warning,
    #[value(alias = "inf", alias = "i")]
    Info,
    #[value(alias = "dbg", alias = "d")]
    Debug,
}

impl Level {
    /// Returns true if messages of this level are subject to verbosity gating.
    #[inline]
    pub fn is_gated(self) -> bool {
        self == Level::Debug
    }
}

#[cfg(test)]
mod tests;
