use futures::StreamExt;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, warn};
use zbus::{Connection, object_server::InterfaceRef};

use crate::services::player::{Notification, Player};

use super::{BUS_NAME, OBJECT_PATH, PlayerInterface};

/// Exports a [`Player`] on the session bus and keeps its properties
/// signalled.
pub struct BusService {
    connection: Connection,
    forwarder: JoinHandle<()>,
}

impl BusService {
    /// Serves `player` at the grooved object path and claims the well-known
    /// name.
    ///
    /// # Errors
    ///
    /// Returns `zbus::Error` if the object cannot be registered or the name
    /// is already owned.
    #[instrument(skip_all)]
    pub async fn start(connection: Connection, player: Player) -> Result<Self, zbus::Error> {
        let notifications = player.notifications();

        connection
            .object_server()
            .at(OBJECT_PATH, PlayerInterface::new(player))
            .await?;

        let iface_ref = connection
            .object_server()
            .interface::<_, PlayerInterface>(OBJECT_PATH)
            .await?;

        connection.request_name(BUS_NAME).await?;
        info!(name = BUS_NAME, path = OBJECT_PATH, "Player exported on session bus");

        let forwarder = tokio::spawn(async move {
            let mut notifications = notifications;
            while let Some(notification) = notifications.next().await {
                if let Err(e) = Self::signal(&iface_ref, notification).await {
                    warn!(error = %e, ?notification, "Could not signal property change");
                }
            }
            debug!("Notification forwarder finished");
        });

        Ok(Self {
            connection,
            forwarder,
        })
    }

    /// The connection the player is served on.
    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    async fn signal(
        iface_ref: &InterfaceRef<PlayerInterface>,
        notification: Notification,
    ) -> zbus::Result<()> {
        let iface = iface_ref.get().await;
        let emitter = iface_ref.signal_emitter();

        match notification {
            Notification::StatusChanged(_) => iface.playback_status_changed(emitter).await,
            Notification::TrackChanged => {
                iface.track_metadata_changed(emitter).await?;
                iface.track_path_changed(emitter).await?;
                iface.track_length_changed(emitter).await?;
                iface.track_title_changed(emitter).await
            }
            Notification::TrackListChanged => iface.tracks_changed(emitter).await,
            Notification::VolumeChanged => iface.volume_changed(emitter).await,
        }
    }
}

impl Drop for BusService {
    fn drop(&mut self) {
        self.forwarder.abort();
    }
}
