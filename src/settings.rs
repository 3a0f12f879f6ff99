// std imports
use std::include_str;

// third-party imports
use clap::ValueEnum;
use serde::Deserialize;

// local imports
use crate::{template::OutputFormat, verbosity::Verbosity};

// ---

pub(crate) static DEFAULT_SETTINGS: &str = include_str!("../etc/defaults/config.yaml");

pub const DEFAULT_OUTPUT_FORMAT: &str = "%DATETIME%\t%HOSTNAME%:%PORT%\t%USERNAME%\t%PASSWORD%\n";

// ---

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct Settings {
    #[serde(default)]
    pub verbosity: Verbosity,
    #[serde(default)]
    pub output_format: Option<String>,
    #[serde(default)]
    pub color: ColorOption,
}

impl Settings {
    /// Compiled output format, if one is configured.
    pub fn template(&self) -> Option<OutputFormat> {
        self.output_format.as_deref().map(OutputFormat::new)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::empty(),
            output_format: Some(DEFAULT_OUTPUT_FORMAT.into()),
            color: ColorOption::Auto,
        }
    }
}

// ---

#[derive(ValueEnum, Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ColorOption {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorOption {
    /// Resolves the option against whether the target is a terminal.
    pub fn enabled(self, terminal: bool) -> bool {
        match self {
            Self::Auto => terminal,
            Self::Always => true,
            Self::Never => false,
        }
    }
}
