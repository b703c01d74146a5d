use async_trait::async_trait;

use super::{BackendError, MpvEvent, Node};

/// Call surface of the media engine consumed by the player core.
///
/// Implementations make no concurrency promises of their own: callers must
/// serialize property and command calls. [`Backend::wait_event`] is the
/// exception and may run concurrently with everything else, since it only
/// drains the event queue.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Sets a property to a typed value.
    ///
    /// # Errors
    ///
    /// Returns `BackendError::Rejected` with mpv's message if the property
    /// does not exist or the value is invalid.
    async fn set_property(&self, name: &str, value: Node) -> Result<(), BackendError>;

    /// Reads a property.
    ///
    /// # Errors
    ///
    /// Returns `BackendError::Rejected` if the property does not exist or is
    /// currently unavailable (e.g. `path` while idle).
    async fn get_property(&self, name: &str) -> Result<Node, BackendError>;

    /// Runs an mpv input command such as `["playlist-next", "force"]`.
    ///
    /// # Errors
    ///
    /// Returns `BackendError::Rejected` if mpv refuses the command.
    async fn command(&self, args: &[&str]) -> Result<(), BackendError>;

    /// Registers `name` for change notification.
    ///
    /// The current value is reported right away as a
    /// [`MpvEvent::PropertyChange`], later changes follow as they happen.
    ///
    /// # Errors
    ///
    /// Returns `BackendError` if the registration request fails.
    async fn observe_property(&self, name: &str) -> Result<(), BackendError>;

    /// Waits for the next event. Blocks until one is available; once the
    /// connection is gone this keeps returning [`MpvEvent::Shutdown`].
    async fn wait_event(&self) -> MpvEvent;
}
