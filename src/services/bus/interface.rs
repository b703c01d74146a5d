use std::collections::HashMap;

use zbus::{fdo, interface};

use crate::{services::player::Player, unwrap_f64, unwrap_or, unwrap_string};

use super::{BusError, error::setter_error};

/// The player as exported on the session bus.
pub struct PlayerInterface {
    player: Player,
}

impl PlayerInterface {
    /// Wraps `player` for export.
    pub fn new(player: Player) -> Self {
        Self { player }
    }
}

#[interface(name = "io.github.ghedo.grooved.Player")]
impl PlayerInterface {
    async fn play(&self) -> Result<(), BusError> {
        Ok(self.player.play().await?)
    }

    async fn pause(&self) -> Result<(), BusError> {
        Ok(self.player.pause().await?)
    }

    async fn toggle(&self) -> Result<(), BusError> {
        Ok(self.player.toggle().await?)
    }

    async fn next(&self) -> Result<(), BusError> {
        Ok(self.player.next().await?)
    }

    async fn prev(&self) -> Result<(), BusError> {
        Ok(self.player.prev().await?)
    }

    async fn stop(&self) -> Result<(), BusError> {
        Ok(self.player.stop().await?)
    }

    async fn seek(&self, seconds: i64) -> Result<(), BusError> {
        Ok(self.player.seek(seconds).await?)
    }

    async fn add_track(&self, path: String) -> Result<(), BusError> {
        Ok(self.player.add_track(&path, false).await?)
    }

    async fn add_list(&self, path: String) -> Result<(), BusError> {
        Ok(self.player.add_list(&path).await?)
    }

    async fn goto_track(&self, index: u64) -> Result<(), BusError> {
        Ok(self.player.goto_track(index).await?)
    }

    async fn remove_track(&self, index: i64) -> Result<(), BusError> {
        Ok(self.player.remove_track(index).await?)
    }

    async fn quit(&self) -> Result<(), BusError> {
        Ok(self.player.quit().await?)
    }

    #[zbus(out_args("position", "percent"))]
    async fn track_position(&self) -> Result<(f64, f64), BusError> {
        let position = self.player.track_position().await?;
        Ok((position.seconds, position.percent))
    }

    #[zbus(property)]
    async fn playback_status(&self) -> String {
        self.player.status().to_string()
    }

    #[zbus(property)]
    async fn loop_status(&self) -> String {
        self.player.loop_mode().to_string()
    }

    #[zbus(property)]
    async fn set_loop_status(&mut self, mode: String) -> fdo::Result<()> {
        self.player
            .set_loop_status(&mode)
            .await
            .map_err(setter_error)
    }

    #[zbus(property)]
    async fn track_metadata(&self) -> HashMap<String, String> {
        unwrap_or!(self.player.track_metadata().await, "TrackMetadata", HashMap::new())
    }

    #[zbus(property)]
    async fn track_path(&self) -> String {
        unwrap_string!(self.player.track_path().await, "TrackPath")
    }

    #[zbus(property)]
    async fn track_length(&self) -> f64 {
        unwrap_f64!(self.player.track_length().await, "TrackLength")
    }

    #[zbus(property)]
    async fn track_title(&self) -> String {
        unwrap_string!(self.player.track_title().await, "TrackTitle")
    }

    #[zbus(property)]
    async fn tracks(&self) -> Vec<String> {
        unwrap_or!(self.player.tracks().await, "Tracks", Vec::new())
    }

    #[zbus(property)]
    async fn volume(&self) -> f64 {
        unwrap_f64!(self.player.volume().await, "Volume")
    }

    #[zbus(property)]
    async fn set_volume(&mut self, volume: f64) -> fdo::Result<()> {
        self.player
            .set_volume(volume)
            .await
            .map_err(setter_error)
    }
}
