use std::pin::Pin;

use async_stream::stream;
use futures::Stream;
use tokio::sync::broadcast::{self, error::RecvError};
use tracing::warn;

use super::PlaybackStatus;

const NOTIFICATION_CAPACITY: usize = 64;

/// Something observers of the player may want to republish.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Notification {
    /// The playback status changed to the given value
    StatusChanged(PlaybackStatus),
    /// The current track or its metadata changed
    TrackChanged,
    /// Entries were added to or removed from the playlist
    TrackListChanged,
    /// The output volume changed
    VolumeChanged,
}

/// Fan-out of player notifications to any number of subscribers.
///
/// Every subscriber sees each notification once, in the order the player
/// published them.
#[derive(Debug, Clone)]
pub(crate) struct NotificationHub {
    tx: broadcast::Sender<Notification>,
}

impl NotificationHub {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(NOTIFICATION_CAPACITY);
        Self { tx }
    }

    pub fn publish(&self, notification: Notification) {
        // no subscribers is fine
        let _ = self.tx.send(notification);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Notification> {
        self.tx.subscribe()
    }

    pub fn stream(&self) -> Pin<Box<dyn Stream<Item = Notification> + Send>> {
        let mut rx = self.tx.subscribe();

        Box::pin(stream! {
            loop {
                match rx.recv().await {
                    Ok(notification) => yield notification,
                    Err(RecvError::Lagged(skipped)) => {
                        warn!(skipped, "Notification subscriber fell behind");
                    }
                    Err(RecvError::Closed) => break,
                }
            }
        })
    }
}
