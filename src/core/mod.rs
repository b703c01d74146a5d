use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::services::{BackendError, PlayerError};

/// Error types for the grooved daemon.
///
/// Covers everything that can stop the daemon from starting or running:
/// configuration loading, the backend process and the bus connection.
#[derive(Error, Debug)]
pub enum GroovedError {
    /// Configuration file given explicitly does not exist
    #[error("config file '{0}' not found")]
    ConfigNotFound(PathBuf),

    /// Configuration file exists but could not be read
    #[error("cannot read '{path}': {details}")]
    IoError {
        /// File that failed to read
        path: PathBuf,
        /// Underlying I/O error
        details: String,
    },

    /// Standard I/O operation error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is not valid TOML or has unknown keys
    #[error("invalid config in {location}: {details}")]
    TomlParseError {
        /// Canonical file path, or `<inline>` for parsed strings
        location: String,
        /// Message from the TOML parser
        details: String,
    },

    /// Backend could not be configured or started
    #[error(transparent)]
    Backend(#[from] BackendError),

    /// Player failure
    #[error(transparent)]
    Player(#[from] PlayerError),

    /// Session bus failure
    #[error("D-Bus error: {0}")]
    Bus(#[from] zbus::Error),
}

/// A specialized `Result` type for grooved operations.
pub type Result<T> = std::result::Result<T, GroovedError>;

impl GroovedError {
    /// Wraps a TOML error, naming the file it came from when there is one.
    pub fn toml_parse(error: impl std::fmt::Display, path: Option<&Path>) -> Self {
        let location = path.map_or_else(
            || "<inline>".to_string(),
            |path| {
                path.canonicalize()
                    .unwrap_or_else(|_| path.to_path_buf())
                    .display()
                    .to_string()
            },
        );

        Self::TomlParseError {
            location,
            details: error.to_string(),
        }
    }
}
