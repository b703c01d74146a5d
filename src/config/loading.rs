use std::{fs, path::Path};

use tracing::{debug, info};

use super::{Config, ConfigPaths};
use crate::{GroovedError, Result};

impl Config {
    /// Loads the configuration.
    ///
    /// With an explicit `path` the file must exist. Without one the default
    /// location is used, and a missing file there yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An explicitly given file does not exist
    /// - The file cannot be read
    /// - The TOML content is invalid or has unknown keys
    pub fn load(path: Option<&Path>) -> Result<Config> {
        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(GroovedError::ConfigNotFound(path.to_path_buf()));
                }
                Self::load_file(path)
            }
            None => {
                let path = ConfigPaths::main_config()?;
                if !path.exists() {
                    info!(path = %path.display(), "No config file, using defaults");
                    return Ok(Config::default());
                }
                Self::load_file(&path)
            }
        }
    }

    /// Loads and parses a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_file(path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path).map_err(|e| GroovedError::IoError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        let config = Self::parse(&content, Some(path))?;
        debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Parses configuration from a TOML string.
    ///
    /// `path` is only used for error context.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid, has unknown keys, or holds
    /// values of the wrong type.
    pub fn parse(content: &str, path: Option<&Path>) -> Result<Config> {
        toml::from_str(content).map_err(|e| GroovedError::toml_parse(e, path))
    }
}
