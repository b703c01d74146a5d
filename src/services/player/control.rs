use tracing::{info, instrument, warn};

use crate::services::mpv::{BackendError, Node};

use super::{
    LoopMode, Notification, PlaybackStatus, Player, PlayerError,
    state::{PlayerState, Step, Trigger, plan},
};

impl Player {
    /// Starts or resumes playback.
    ///
    /// From stopped, playback restarts at the top of the playlist, or with a
    /// random catalog track if the playlist is empty. The status becomes
    /// playing once the backend confirms.
    ///
    /// # Errors
    ///
    /// Returns `PlayerError::Catalog` if a random track is needed and none can
    /// be picked, or `PlayerError::Backend` if the backend refuses.
    #[instrument(skip(self))]
    pub async fn play(&self) -> Result<(), PlayerError> {
        self.run_trigger(Trigger::Play).await
    }

    /// Pauses playback. Does nothing unless playing.
    ///
    /// # Errors
    ///
    /// Returns `PlayerError::Backend` if the backend refuses.
    #[instrument(skip(self))]
    pub async fn pause(&self) -> Result<(), PlayerError> {
        self.run_trigger(Trigger::Pause).await
    }

    /// Flips between playing and paused. Does nothing while stopped.
    ///
    /// # Errors
    ///
    /// Returns `PlayerError::Backend` if the backend refuses.
    #[instrument(skip(self))]
    pub async fn toggle(&self) -> Result<(), PlayerError> {
        self.run_trigger(Trigger::Toggle).await
    }

    /// Stops playback. The status is stopped as soon as the backend accepts
    /// the command.
    ///
    /// # Errors
    ///
    /// Returns `PlayerError::Backend` if the backend refuses.
    #[instrument(skip(self))]
    pub async fn stop(&self) -> Result<(), PlayerError> {
        self.run_trigger(Trigger::Stop).await
    }

    /// Skips to the next playlist entry.
    ///
    /// # Errors
    ///
    /// Returns `PlayerError::Backend` if there is no next entry.
    #[instrument(skip(self))]
    pub async fn next(&self) -> Result<(), PlayerError> {
        let mut state = self.lock_live().await?;
        self.backend.command(&["playlist-next", "force"]).await?;
        Self::expect_start(&mut state);
        Ok(())
    }

    /// Goes back to the previous playlist entry.
    ///
    /// # Errors
    ///
    /// Returns `PlayerError::Backend` if there is no previous entry.
    #[instrument(skip(self))]
    pub async fn prev(&self) -> Result<(), PlayerError> {
        let mut state = self.lock_live().await?;
        self.backend.command(&["playlist-prev", "weak"]).await?;
        Self::expect_start(&mut state);
        Ok(())
    }

    /// Seeks relative to the current position, backwards for negative values.
    ///
    /// # Errors
    ///
    /// Returns `PlayerError::Backend` if nothing is playing.
    #[instrument(skip(self))]
    pub async fn seek(&self, seconds: i64) -> Result<(), PlayerError> {
        let _state = self.lock_live().await?;
        let seconds = seconds.to_string();
        self.backend.command(&["seek", &seconds, "relative"]).await?;
        Ok(())
    }

    /// Appends a track to the playlist, starting it right away when `play`
    /// is set. An empty `path` appends a random catalog track.
    ///
    /// # Errors
    ///
    /// Returns `PlayerError::Catalog` if a random track cannot be picked, or
    /// `PlayerError::Backend` if the backend refuses the file.
    #[instrument(skip(self))]
    pub async fn add_track(&self, path: &str, play: bool) -> Result<(), PlayerError> {
        let mut state = self.lock_live().await?;

        let path = match path {
            "" => self.catalog.random_track(&self.options.library).await?,
            path => path.to_string(),
        };

        let mode = if play { "append-play" } else { "append" };
        self.backend.command(&["loadfile", &path, mode]).await?;
        info!(%path, mode, "Added track");

        if play {
            Self::expect_start(&mut state);
        }
        Ok(())
    }

    /// Appends every entry of a playlist file.
    ///
    /// # Errors
    ///
    /// Returns `PlayerError::Backend` if the list cannot be loaded.
    #[instrument(skip(self))]
    pub async fn add_list(&self, path: &str) -> Result<(), PlayerError> {
        let _state = self.lock_live().await?;
        self.backend.command(&["loadlist", path, "append"]).await?;
        Ok(())
    }

    /// Jumps to the zero-based playlist entry `index`.
    ///
    /// # Errors
    ///
    /// Returns `PlayerError::Backend` if the index is out of range.
    #[instrument(skip(self))]
    pub async fn goto_track(&self, index: u64) -> Result<(), PlayerError> {
        let mut state = self.lock_live().await?;
        // out of range values are left for the backend to reject
        let index = i64::try_from(index).unwrap_or(i64::MAX);
        self.backend
            .set_property("playlist-pos", Node::Int64(index))
            .await?;
        Self::expect_start(&mut state);
        Ok(())
    }

    /// Removes playlist entry `index`, or the current track if negative.
    ///
    /// # Errors
    ///
    /// Returns `PlayerError::Backend` if the entry does not exist.
    #[instrument(skip(self))]
    pub async fn remove_track(&self, index: i64) -> Result<(), PlayerError> {
        let _state = self.lock_live().await?;
        let target = if index < 0 {
            "current".to_string()
        } else {
            index.to_string()
        };
        self.backend.command(&["playlist-remove", &target]).await?;
        Ok(())
    }

    /// Applies a loop mode given by name (`none`, `track`, `list`, `force`).
    ///
    /// # Errors
    ///
    /// Returns `PlayerError::InvalidMode` without touching the backend if the
    /// name is unknown, or `PlayerError::Backend` if the backend refuses.
    #[instrument(skip(self))]
    pub async fn set_loop_status(&self, mode: &str) -> Result<(), PlayerError> {
        let mode: LoopMode = mode.parse()?;
        self.set_loop_mode(mode).await
    }

    /// Applies a loop mode. Every mode starts from a reset to no looping.
    ///
    /// # Errors
    ///
    /// Returns `PlayerError::Backend` if the backend refuses.
    pub async fn set_loop_mode(&self, mode: LoopMode) -> Result<(), PlayerError> {
        let _state = self.lock_live().await?;

        self.set_string("loop-file", "no").await?;
        self.set_string("loop-playlist", "no").await?;

        match mode {
            LoopMode::None => {}
            LoopMode::Track => self.set_string("loop-file", "inf").await?,
            LoopMode::List => self.set_string("loop-playlist", "inf").await?,
            LoopMode::Force => self.set_string("loop-playlist", "force").await?,
        }

        self.loop_mode.set(mode);
        Ok(())
    }

    /// Sets the output volume in percent.
    ///
    /// # Errors
    ///
    /// Returns `PlayerError::Backend` if the value is out of range.
    #[instrument(skip(self))]
    pub async fn set_volume(&self, volume: f64) -> Result<(), PlayerError> {
        let _state = self.lock_live().await?;
        self.backend
            .set_property("volume", Node::Double(volume))
            .await?;
        Ok(())
    }

    /// Asks the backend to terminate. The event loop finishes once the
    /// backend reports its shutdown; see [`Player::wait`].
    ///
    /// # Errors
    ///
    /// Returns `PlayerError::Terminated` if the backend is already gone.
    #[instrument(skip(self))]
    pub async fn quit(&self) -> Result<(), PlayerError> {
        let _state = self.lock_live().await?;
        self.backend.command(&["quit"]).await?;
        info!("Quit requested");
        Ok(())
    }

    async fn run_trigger(&self, trigger: Trigger) -> Result<(), PlayerError> {
        let mut state = self.lock_live().await?;
        let step = plan(state.status, trigger)?;
        self.apply(&mut state, step).await
    }

    /// Carries out a step on behalf of a caller.
    async fn apply(&self, state: &mut PlayerState, step: Step) -> Result<(), PlayerError> {
        match step {
            Step::Ignore => Ok(()),
            Step::StartPlayback => self.start_playback(state).await,
            Step::SetPause(pause) => {
                self.backend.set_property("pause", Node::Flag(pause)).await?;
                Ok(())
            }
            Step::Stop => self.stop_playback(state).await,
            Step::AutoAdvance => self.auto_advance(state).await,
            Step::Enter(status) => {
                self.enter(state, status);
                Ok(())
            }
        }
    }

    async fn start_playback(&self, state: &mut PlayerState) -> Result<(), PlayerError> {
        let count = self.backend.get_property("playlist-count").await?;
        let count = count.as_i64().ok_or_else(|| BackendError::UnexpectedFormat {
            property: "playlist-count".to_string(),
            expected: "int64",
            actual: count.kind(),
        })?;

        if count > 0 {
            self.backend
                .set_property("playlist-pos", Node::Int64(0))
                .await?;
        } else {
            let path = self.catalog.random_track(&self.options.library).await?;
            self.backend
                .command(&["loadfile", &path, "append-play"])
                .await?;
            info!(%path, "Playing random track");
        }

        state.awaiting_start = true;
        Ok(())
    }

    async fn stop_playback(&self, state: &mut PlayerState) -> Result<(), PlayerError> {
        self.backend.command(&["stop"]).await?;

        // the pause flag survives a stop and would hold the next play. A
        // pause may still be in flight, so the status cannot tell.
        if let Err(e) = self.backend.set_property("pause", Node::Flag(false)).await {
            warn!(error = %e, "Could not clear pause after stop");
        }

        // a start-file still queued from before the stop must not count as
        // the first one
        state.started = true;
        state.awaiting_start = false;
        self.enter(state, PlaybackStatus::Stopped);
        self.hub.publish(Notification::TrackChanged);
        Ok(())
    }

    /// Queues a random track and keeps the backend playing.
    pub(super) async fn auto_advance(&self, state: &mut PlayerState) -> Result<(), PlayerError> {
        let path = self.catalog.random_track(&self.options.library).await?;

        if state.status == PlaybackStatus::Paused {
            self.backend.set_property("pause", Node::Flag(false)).await?;
        }

        self.backend
            .command(&["loadfile", &path, "append-play"])
            .await?;
        info!(%path, "Advanced to random track");
        Ok(())
    }

    async fn set_string(&self, name: &str, value: &str) -> Result<(), PlayerError> {
        self.backend
            .set_property(name, Node::String(value.to_string()))
            .await?;
        Ok(())
    }

    /// A command that starts a file was accepted while stopped; the next
    /// start-file moves the status to playing.
    fn expect_start(state: &mut PlayerState) {
        if state.status == PlaybackStatus::Stopped {
            state.awaiting_start = true;
        }
    }
}
