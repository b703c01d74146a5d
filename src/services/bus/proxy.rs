#![allow(missing_docs)]

use std::collections::HashMap;
use zbus::{Result, proxy};

/// Client side of the grooved player interface
#[proxy(
    interface = "io.github.ghedo.grooved.Player",
    default_service = "io.github.ghedo.grooved",
    default_path = "/io/github/ghedo/grooved"
)]
pub trait GroovedPlayer {
    fn play(&self) -> Result<()>;

    fn pause(&self) -> Result<()>;

    fn toggle(&self) -> Result<()>;

    fn next(&self) -> Result<()>;

    fn prev(&self) -> Result<()>;

    fn stop(&self) -> Result<()>;

    /// Relative seek in seconds
    fn seek(&self, seconds: i64) -> Result<()>;

    /// Appends a track, a random one for an empty path
    fn add_track(&self, path: &str) -> Result<()>;

    /// Appends a playlist file
    fn add_list(&self, path: &str) -> Result<()>;

    fn goto_track(&self, index: u64) -> Result<()>;

    /// Negative index removes the current track
    fn remove_track(&self, index: i64) -> Result<()>;

    fn quit(&self) -> Result<()>;

    /// Position in seconds and percent
    fn track_position(&self) -> Result<(f64, f64)>;

    #[zbus(property)]
    fn playback_status(&self) -> Result<String>;

    #[zbus(property)]
    fn loop_status(&self) -> Result<String>;

    #[zbus(property)]
    fn set_loop_status(&self, mode: &str) -> Result<()>;

    #[zbus(property)]
    fn track_metadata(&self) -> Result<HashMap<String, String>>;

    #[zbus(property)]
    fn track_path(&self) -> Result<String>;

    #[zbus(property)]
    fn track_length(&self) -> Result<f64>;

    #[zbus(property)]
    fn track_title(&self) -> Result<String>;

    #[zbus(property)]
    fn tracks(&self) -> Result<Vec<String>>;

    #[zbus(property)]
    fn volume(&self) -> Result<f64>;

    #[zbus(property)]
    fn set_volume(&self, volume: f64) -> Result<()>;
}
