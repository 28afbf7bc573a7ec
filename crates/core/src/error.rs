//! Error types for s3path-core
//!
//! Provides a unified error type that can be converted to appropriate exit codes.

use thiserror::Error;

/// Result type alias for s3path-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for s3path-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Input could not be split into scheme, authority and path
    #[error("Malformed URI: {0}")]
    MalformedUri(String),

    /// Operation needs a final segment but the locator has none
    #[error("{0} has an empty name")]
    EmptyName(String),

    /// Proposed name is not exactly one segment
    #[error("Invalid name: {0:?}")]
    InvalidName(String),

    /// Proposed suffix is malformed
    #[error("Invalid suffix: {0:?}")]
    InvalidSuffix(String),

    /// Locator does not live under the given base
    #[error("Not relative: {0}")]
    NotRelative(String),

    /// Configuration file error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// URL parsing error
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl Error {
    /// Get the appropriate exit code for this error
    pub const fn exit_code(&self) -> i32 {
        match self {
            // UsageError
            Error::MalformedUri(_) | Error::Config(_) | Error::TomlParse(_) => 2,
            // InvalidTransform
            Error::EmptyName(_) | Error::InvalidName(_) | Error::InvalidSuffix(_) => 3,
            Error::NotRelative(_) => 4,
            _ => 1, // GeneralError
        }
    }
}
