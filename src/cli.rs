// std imports
use std::path::PathBuf;

// third-party imports
use clap::{Parser, Subcommand};

// local imports
use crate::{
    level::Level,
    settings::{ColorOption, Settings},
    verbosity::{self, VerbosityFlag},
};

// ---

/// Leveled console output and successful-login result lines.
#[derive(Parser)]
#[command(version)]
pub struct Opt {
    /// Configuration file path, may be repeated; `-` or empty value discards defaults and previous files.
    #[arg(long, value_name = "FILE", env = "BRUTEOUT_CONFIG", num_args = 1)]
    pub config: Vec<String>,

    /// Verbosity bitmask replacing the configured one, 0x1 shows debug messages and 0x2 enables protocol library tracing.
    #[arg(long, value_name = "MASK", value_parser = parse_mask)]
    pub verbosity: Option<u32>,

    /// Verbose mode, shows debug messages.
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable protocol library tracing in the scanning layer.
    #[arg(long)]
    pub ssh_lib: bool,

    /// Output format for successful logins, supports %DATETIME%, %HOSTNAME%, %PORT%, %USERNAME% and %PASSWORD%.
    #[arg(short = 'F', long, value_name = "TEMPLATE")]
    pub output_format: Option<String>,

    /// Console colors.
    #[arg(long, value_enum)]
    pub color: Option<ColorOption>,

    #[command(subcommand)]
    pub command: Command,
}

impl Opt {
    /// Applies command-line overrides on top of loaded settings.
    ///
    /// The bitmask replaces configured verbosity, individual flags are added on top of it.
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(mask) = self.verbosity {
            settings.verbosity = verbosity::from_bits(mask);
        }
        if self.verbose {
            settings.verbosity.insert(VerbosityFlag::Verbose);
        }
        if self.ssh_lib {
            settings.verbosity.insert(VerbosityFlag::SshLib);
        }
        if let Some(format) = &self.output_format {
            settings.output_format = Some(format.clone());
        }
        if let Some(color) = self.color {
            settings.color = color;
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Print a leveled message to standard error.
    Emit {
        #[arg(value_enum, ignore_case = true)]
        level: Level,
        message: String,
    },

    /// Print a timestamped line to standard output.
    Log { message: String },

    /// Write a successful-login result line.
    Login {
        #[arg(long)]
        host: String,
        #[arg(short, long, default_value_t = 22)]
        port: u16,
        #[arg(short, long)]
        user: String,
        #[arg(long)]
        password: String,
        /// Append to the file instead of writing to standard output.
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

fn parse_mask(s: &str) -> Result<u32, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.map_err(|e| format!("invalid bitmask {s:?}: {e}"))
}
