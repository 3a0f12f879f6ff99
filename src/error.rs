// std imports
use std::collections::TryReserveError;
use std::io;

// third-party imports
use config::ConfigError;
use thiserror::Error;

// local imports
use crate::template::Field;

/// Error is an error which may occur in the application.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("failed to load configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("output format is not configured")]
    MissingOutputFormat,
    #[error("failed to allocate output buffer: {0}")]
    Allocation(#[from] TryReserveError),
    #[error("error replacing placeholders: failed to substitute {field}: {source}")]
    Substitution {
        field: Field,
        #[source]
        source: TryReserveError,
    },
}

/// Result is an alias for standard result with bound Error type.
pub type Result<T> = std::result::Result<T, Error>;
