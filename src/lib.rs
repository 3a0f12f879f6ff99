// public modules
pub mod cli;
pub mod config;
pub mod error;
pub mod level;
pub mod output;
pub mod printer;
pub mod report;
pub mod settings;
pub mod template;
pub mod theme;
pub mod timestamp;
pub mod verbosity;

// private modules
mod appdirs;
mod eseq;

#[cfg(test)]
mod testing;

// public uses
pub use eseq::{Brightness, Color, ColorCode, Sequence, StyleCode};
pub use level::Level;
pub use output::SharedWriter;
pub use printer::{Printer, SourceLocation};
pub use report::Reporter;
pub use settings::Settings;
pub use template::{Field, Login, OutputFormat, Renderer};
pub use theme::{Decoration, Theme};
pub use timestamp::{Clock, FixedClock, LocalClock, Timestamp};
pub use verbosity::{Verbosity, VerbosityFlag};
