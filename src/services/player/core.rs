use std::{pin::Pin, sync::Arc};

use futures::Stream;
use tokio::sync::{Mutex, MutexGuard, broadcast, watch};
use tracing::{debug, info, instrument};

use crate::services::{
    catalog::Catalog,
    common::Property,
    mpv::{Backend, event::IDLE_ACTIVE_PROPERTY},
    notify::DesktopNotifier,
};

use super::{
    LoopMode, Notification, PlaybackStatus, PlayerError, PlayerOptions,
    notifications::NotificationHub, state::PlayerState,
};

/// Properties the event loop reacts to.
pub(super) const OBSERVED_PROPERTIES: [&str; 5] =
    ["pause", "metadata", "playlist", IDLE_ACTIVE_PROPERTY, "volume"];

/// The player control core.
///
/// Commands from callers and events from the backend meet here. Both go
/// through one lock, which is held for the whole of each command or event,
/// backend calls included, so no two transitions ever interleave and the
/// backend never sees concurrent calls. Only waiting for the next event
/// happens outside the lock.
///
/// Cloning is cheap and every clone drives the same player.
#[derive(Clone)]
pub struct Player {
    pub(super) backend: Arc<dyn Backend>,
    pub(super) catalog: Arc<dyn Catalog>,
    pub(super) notifier: Arc<dyn DesktopNotifier>,
    pub(super) options: Arc<PlayerOptions>,
    pub(super) state: Arc<Mutex<PlayerState>>,
    pub(super) status: Property<PlaybackStatus>,
    pub(super) loop_mode: Property<LoopMode>,
    pub(super) hub: NotificationHub,
    finished: watch::Receiver<bool>,
}

impl Player {
    /// Starts the player on an already running backend.
    ///
    /// Registers the property observers and spawns the event loop before
    /// returning, so commands issued afterwards always have their effects
    /// observed.
    ///
    /// # Errors
    ///
    /// Returns `PlayerError::Backend` if the backend refuses to observe a
    /// property.
    #[instrument(skip_all, fields(library = %options.library, notify = options.notify))]
    pub async fn start(
        backend: Arc<dyn Backend>,
        catalog: Arc<dyn Catalog>,
        notifier: Arc<dyn DesktopNotifier>,
        options: PlayerOptions,
    ) -> Result<Self, PlayerError> {
        for property in OBSERVED_PROPERTIES {
            backend.observe_property(property).await?;
        }

        let (finished_tx, finished) = watch::channel(false);

        let player = Self {
            backend,
            catalog,
            notifier,
            options: Arc::new(options),
            state: Arc::new(Mutex::new(PlayerState::default())),
            status: Property::new(PlaybackStatus::Stopped),
            loop_mode: Property::new(LoopMode::None),
            hub: NotificationHub::new(),
            finished,
        };

        let event_loop = player.clone();
        tokio::spawn(async move {
            event_loop.run_event_loop(finished_tx).await;
        });

        info!("Player started");
        Ok(player)
    }

    /// Waits until the event loop has processed the backend's shutdown.
    pub async fn wait(&self) {
        let mut finished = self.finished.clone();
        // a dropped sender means the loop is gone as well
        let _ = finished.wait_for(|done| *done).await;
    }

    /// Whether the event loop has finished.
    pub fn is_finished(&self) -> bool {
        *self.finished.borrow()
    }

    /// Current playback status.
    pub fn status(&self) -> PlaybackStatus {
        self.status.get()
    }

    /// Watchable playback status.
    pub fn playback_status(&self) -> &Property<PlaybackStatus> {
        &self.status
    }

    /// Loop mode last applied through [`Player::set_loop_status`].
    pub fn loop_mode(&self) -> LoopMode {
        self.loop_mode.get()
    }

    /// Whether the backend has started its first file.
    pub async fn is_started(&self) -> bool {
        self.state.lock().await.started
    }

    /// Subscribes to notifications published from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.hub.subscribe()
    }

    /// Stream of notifications published from now on.
    pub fn notifications(&self) -> Pin<Box<dyn Stream<Item = Notification> + Send>> {
        self.hub.stream()
    }

    /// Takes the player lock, failing once the backend is gone.
    pub(super) async fn lock_live(&self) -> Result<MutexGuard<'_, PlayerState>, PlayerError> {
        let state = self.state.lock().await;
        if state.terminated {
            return Err(PlayerError::Terminated);
        }
        Ok(state)
    }

    /// Moves to `status`, publishing the change if there is one.
    pub(super) fn enter(&self, state: &mut PlayerState, status: PlaybackStatus) {
        if state.status == status {
            return;
        }

        debug!(from = ?state.status, to = ?status, "Playback status changed");
        state.status = status;
        self.status.set(status);
        self.hub.publish(Notification::StatusChanged(status));
    }
}
