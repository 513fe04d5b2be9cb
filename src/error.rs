//! Error types for swanspawner-config-rs.

use thiserror::Error;

/// Errors that can occur when querying spawner user options.
#[derive(Error, Debug)]
pub enum Error {
    /// A form field the caller requires was not submitted.
    #[error("missing required option '{0}'")]
    MissingOption(String),

    /// A submitted option value failed typed parsing.
    #[error("invalid value '{value}' for option '{key}': {message}")]
    InvalidOption {
        key: String,
        value: String,
        message: String,
    },
}

/// Result type alias for swanspawner-config-rs operations.
pub type Result<T> = std::result::Result<T, Error>;
