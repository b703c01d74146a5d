//! Desktop notifications for track changes.

/// org.freedesktop.Notifications proxy
pub mod proxy;

use std::collections::HashMap;

use async_trait::async_trait;
use tracing::instrument;
use zbus::Connection;

use proxy::NotificationsProxy;

const APP_NAME: &str = "grooved";
/// Slot reused by every grooved notification so a new one replaces the last.
const REPLACES_ID: u32 = 1;
const DEFAULT_TIMEOUT: i32 = -1;

/// Errors that can occur while delivering a desktop notification
#[derive(thiserror::Error, Debug)]
pub enum NotifyError {
    /// The notification server could not be reached or refused the call
    #[error("could not send notification: {0}")]
    Dbus(#[from] zbus::Error),
}

/// Delivers desktop notifications.
#[async_trait]
pub trait DesktopNotifier: Send + Sync {
    /// Shows a notification.
    ///
    /// # Errors
    ///
    /// Returns `NotifyError` if the notification could not be delivered.
    async fn notify(&self, title: &str, body: &str, icon: &str) -> Result<(), NotifyError>;
}

/// Notifier talking to `org.freedesktop.Notifications` on the session bus.
#[derive(Clone)]
pub struct FreedesktopNotifier {
    connection: Connection,
}

impl FreedesktopNotifier {
    /// Creates a notifier on an existing session bus connection.
    pub fn new(connection: Connection) -> Self {
        Self { connection }
    }
}

#[async_trait]
impl DesktopNotifier for FreedesktopNotifier {
    #[instrument(skip(self))]
    async fn notify(&self, title: &str, body: &str, icon: &str) -> Result<(), NotifyError> {
        let proxy = NotificationsProxy::new(&self.connection).await?;

        proxy
            .notify(
                APP_NAME,
                REPLACES_ID,
                icon,
                title,
                body,
                &[],
                HashMap::new(),
                DEFAULT_TIMEOUT,
            )
            .await?;

        Ok(())
    }
}
