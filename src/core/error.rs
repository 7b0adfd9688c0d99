//! Error types for the omw-tools library.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using omw-tools' Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading catalogs, rendering pages or exporting colors.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// File not found.
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// The release catalog is absent or structurally malformed.
    #[error("Catalog error: {message}")]
    Catalog { message: String },

    /// The host page has no element carrying the configured container id.
    #[error("Container element with id \"{id}\" not found in host page")]
    ContainerNotFound { id: String },

    /// A color value could not be parsed.
    #[error("Invalid color for {name}: {value}")]
    InvalidColor { name: String, value: String },

    /// Invalid argument.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Template rendering error.
    #[error("Template error: {0}")]
    Template(String),
}

impl From<minijinja::Error> for Error {
    fn from(err: minijinja::Error) -> Self {
        Self::Template(err.to_string())
    }
}

impl Error {
    /// Create a new catalog error.
    pub fn catalog(message: impl Into<String>) -> Self {
        Self::Catalog {
            message: message.into(),
        }
    }

    /// Create a new config error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
