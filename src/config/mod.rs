//! Configuration schema definitions and loading.
//!
//! The daemon reads a single TOML file with a `[general]` section for
//! process-wide settings and a `[player]` section that configures the
//! backend and the player core.

mod general;
mod loading;
mod paths;
mod player;

#[cfg(test)]
mod tests;

pub use general::{GeneralConfig, LogLevel};
pub use paths::ConfigPaths;
pub use player::{PlayerConfig, ReplayGain};

use serde::{Deserialize, Serialize};

/// Main configuration structure for grooved.
///
/// Represents the complete configuration schema that can be loaded
/// from TOML files. All fields have sensible defaults, unknown keys are
/// rejected.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Player and backend settings.
    #[serde(default)]
    pub player: PlayerConfig,
}
