use serde::{Deserialize, Serialize};

use crate::services::{BackendError, MpvOptions, PlayerOptions};

use super::ConfigPaths;

/// ReplayGain mode applied by the backend.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReplayGain {
    /// Per-track gain
    Track,
    /// Per-album gain
    Album,
}

impl ReplayGain {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Track => "track",
            Self::Album => "album",
        }
    }
}

/// Player and backend settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PlayerConfig {
    /// Path of the music library database, `~` is expanded.
    #[serde(default)]
    pub library: String,

    /// Show a desktop notification when the track changes.
    #[serde(default)]
    pub notify: bool,

    /// Gapless playback mode (`yes`, `no` or `weak`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gapless: Option<String>,

    /// ReplayGain mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replaygain: Option<ReplayGain>,

    /// Audio filters, applied in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<String>,

    /// Audio output driver.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,

    /// Network cache setting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cache: Option<String>,

    /// Lua scripts loaded into the backend.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scripts: Vec<String>,
}

impl PlayerConfig {
    /// Startup options for the backend.
    ///
    /// # Errors
    ///
    /// Returns `BackendError::InvalidOption` if an option cannot be set.
    pub fn mpv_options(&self) -> Result<MpvOptions, BackendError> {
        let mut options = MpvOptions::baseline();

        if let Some(gapless) = &self.gapless {
            options.set_option_string("gapless-audio", gapless)?;
        }
        if let Some(replaygain) = self.replaygain {
            options.set_option_string("replaygain", replaygain.as_str())?;
        }
        if !self.filters.is_empty() {
            options.set_option_string("af", &self.filters.join(","))?;
        }
        if let Some(output) = &self.output {
            options.set_option_string("ao", output)?;
        }
        if let Some(cache) = &self.cache {
            options.set_option_string("cache", cache)?;
        }
        if !self.scripts.is_empty() {
            let scripts: Vec<String> = self
                .scripts
                .iter()
                .map(|script| ConfigPaths::expand_user(script).display().to_string())
                .collect();
            options.set_option_string("scripts", &scripts.join(","))?;
        }

        Ok(options)
    }

    /// Options for the player core.
    pub fn player_options(&self) -> PlayerOptions {
        let library = if self.library.is_empty() {
            String::new()
        } else {
            ConfigPaths::expand_user(&self.library)
                .display()
                .to_string()
        };

        PlayerOptions {
            library,
            notify: self.notify,
        }
    }
}
