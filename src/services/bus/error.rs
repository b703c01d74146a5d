use crate::services::player::PlayerError;

/// Errors returned to bus clients.
///
/// Every failed method call is reported under the single name
/// `io.github.ghedo.grooved.Error` with the failure's message.
#[derive(Debug, zbus::DBusError)]
#[zbus(prefix = "io.github.ghedo.grooved")]
pub enum BusError {
    /// Transport level failure
    #[zbus(error)]
    ZBus(zbus::Error),

    /// The player refused the operation
    Error(String),
}

impl From<PlayerError> for BusError {
    fn from(error: PlayerError) -> Self {
        Self::Error(error.to_string())
    }
}

/// Property writes are answered through the standard error set, so a
/// refused write reaches the client as `org.freedesktop.DBus.Error.Failed`
/// carrying the player's message.
pub(crate) fn setter_error(error: PlayerError) -> zbus::fdo::Error {
    zbus::fdo::Error::Failed(error.to_string())
}
