use std::{fmt, str::FromStr};

use super::PlayerError;

/// Playback status as tracked by the player core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlaybackStatus {
    /// A track is playing
    Playing,
    /// A track is loaded but paused
    Paused,
    /// Nothing is playing
    #[default]
    Stopped,
}

impl PlaybackStatus {
    /// Wire name used on the bus and by `groovectl`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Playing => "play",
            Self::Paused => "pause",
            Self::Stopped => "stop",
        }
    }
}

impl fmt::Display for PlaybackStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Repeat behaviour of the playlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LoopMode {
    /// Play the list once
    #[default]
    None,
    /// Repeat the current track
    Track,
    /// Repeat the whole list
    List,
    /// Repeat the whole list, including tracks that failed to play
    Force,
}

impl LoopMode {
    /// Wire name used on the bus and by `groovectl`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Track => "track",
            Self::List => "list",
            Self::Force => "force",
        }
    }
}

impl fmt::Display for LoopMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LoopMode {
    type Err = PlayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "track" => Ok(Self::Track),
            "list" => Ok(Self::List),
            "force" => Ok(Self::Force),
            other => Err(PlayerError::InvalidMode(other.to_string())),
        }
    }
}

/// Position inside the current track.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrackPosition {
    /// Seconds since the start of the track
    pub seconds: f64,
    /// Percentage of the track already played
    pub percent: f64,
}

/// Options fixed when the player starts.
#[derive(Debug, Clone, Default)]
pub struct PlayerOptions {
    /// Catalog used when a track has to be picked at random
    pub library: String,
    /// Send a desktop notification when the track changes
    pub notify: bool,
}
