use std::collections::HashMap;

use crate::services::mpv::{BackendError, Node};

use super::{Player, PlayerError, TrackPosition};

fn unexpected(property: &str, expected: &'static str, node: &Node) -> PlayerError {
    BackendError::UnexpectedFormat {
        property: property.to_string(),
        expected,
        actual: node.kind(),
    }
    .into()
}

impl Player {
    /// Tags of the current track.
    ///
    /// # Errors
    ///
    /// Returns `PlayerError::Backend` if nothing is loaded.
    pub async fn track_metadata(&self) -> Result<HashMap<String, String>, PlayerError> {
        let _state = self.lock_live().await?;
        self.query_metadata().await
    }

    /// Path or URL of the current track.
    ///
    /// # Errors
    ///
    /// Returns `PlayerError::Backend` if nothing is loaded.
    pub async fn track_path(&self) -> Result<String, PlayerError> {
        let _state = self.lock_live().await?;
        let node = self.backend.get_property("path").await?;
        node.as_str()
            .map(str::to_string)
            .ok_or_else(|| unexpected("path", "string", &node))
    }

    /// Duration of the current track in seconds.
    ///
    /// # Errors
    ///
    /// Returns `PlayerError::Backend` if nothing is loaded or the duration is
    /// unknown.
    pub async fn track_length(&self) -> Result<f64, PlayerError> {
        let _state = self.lock_live().await?;
        self.query_f64("duration").await
    }

    /// Display title of the current track, `Artist - Title` when the track
    /// has an artist tag.
    ///
    /// # Errors
    ///
    /// Returns `PlayerError::Backend` if nothing is loaded.
    pub async fn track_title(&self) -> Result<String, PlayerError> {
        let _state = self.lock_live().await?;
        self.query_title().await
    }

    /// File names of all playlist entries, in order.
    ///
    /// # Errors
    ///
    /// Returns `PlayerError::Backend` if the playlist cannot be read.
    pub async fn tracks(&self) -> Result<Vec<String>, PlayerError> {
        let _state = self.lock_live().await?;
        let node = self.backend.get_property("playlist").await?;
        let entries = node
            .as_array()
            .ok_or_else(|| unexpected("playlist", "array", &node))?;

        Ok(entries
            .iter()
            .filter_map(|entry| entry.get("filename").and_then(Node::as_str))
            .map(str::to_string)
            .collect())
    }

    /// Position inside the current track.
    ///
    /// # Errors
    ///
    /// Returns `PlayerError::Backend` if nothing is playing.
    pub async fn track_position(&self) -> Result<TrackPosition, PlayerError> {
        let _state = self.lock_live().await?;
        Ok(TrackPosition {
            seconds: self.query_f64("time-pos").await?,
            percent: self.query_f64("percent-pos").await?,
        })
    }

    /// Output volume in percent.
    ///
    /// # Errors
    ///
    /// Returns `PlayerError::Backend` if the volume cannot be read.
    pub async fn volume(&self) -> Result<f64, PlayerError> {
        let _state = self.lock_live().await?;
        self.query_f64("volume").await
    }

    async fn query_f64(&self, property: &str) -> Result<f64, PlayerError> {
        let node = self.backend.get_property(property).await?;
        node.as_f64()
            .ok_or_else(|| unexpected(property, "double", &node))
    }

    async fn query_metadata(&self) -> Result<HashMap<String, String>, PlayerError> {
        let node = self.backend.get_property("metadata").await?;

        match &node {
            Node::None => Ok(HashMap::new()),
            Node::Map(entries) => Ok(entries
                .iter()
                .map(|(key, value)| (key.clone(), value.to_string()))
                .collect()),
            other => Err(unexpected("metadata", "map", other)),
        }
    }

    /// Title lookup for callers already holding the player lock.
    pub(super) async fn query_title(&self) -> Result<String, PlayerError> {
        let node = self.backend.get_property("media-title").await?;
        let title = node
            .as_str()
            .ok_or_else(|| unexpected("media-title", "string", &node))?
            .to_string();

        let metadata = self.query_metadata().await.unwrap_or_default();
        Ok(display_title(&title, &metadata))
    }
}

/// `Artist - Title`, or the bare title without an artist tag. Tag names are
/// matched case-insensitively since containers disagree on casing.
fn display_title(title: &str, metadata: &HashMap<String, String>) -> String {
    let artist = metadata
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case("artist"))
        .map(|(_, artist)| artist.as_str())
        .filter(|artist| !artist.is_empty());

    match artist {
        Some(artist) => format!("{artist} - {title}"),
        None => title.to_string(),
    }
}
