use crate::services::{catalog::CatalogError, mpv::BackendError};

use super::PlaybackStatus;

/// Errors returned by player operations
#[derive(thiserror::Error, Debug)]
pub enum PlayerError {
    /// The operation is not legal in the current status
    #[error("invalid player state: cannot {operation} while {status:?}")]
    InvalidState {
        /// What was attempted
        operation: &'static str,
        /// Status at the time
        status: PlaybackStatus,
    },

    /// The backend refused the call. Displays the backend's own message.
    #[error("{0}")]
    Backend(BackendError),

    /// No track could be picked from the catalog
    #[error("could not get random track: {0}")]
    Catalog(#[from] CatalogError),

    /// Unrecognized loop mode
    #[error("invalid mode '{0}'")]
    InvalidMode(String),

    /// The backend has shut down, no further operations are possible
    #[error("player has shut down")]
    Terminated,
}

impl From<BackendError> for PlayerError {
    fn from(error: BackendError) -> Self {
        match error {
            BackendError::Closed => Self::Terminated,
            other => Self::Backend(other),
        }
    }
}
