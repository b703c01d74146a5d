/// Errors reported by the mpv backend adapter
#[derive(thiserror::Error, Debug)]
pub enum BackendError {
    /// The mpv process could not be started or never opened its IPC socket
    #[error("could not start player: {0}")]
    Spawn(String),

    /// An option was refused before the player started
    #[error("invalid option '{name}': {reason}")]
    InvalidOption {
        /// Option name as given
        name: String,
        /// Why it was refused
        reason: String,
    },

    /// mpv refused a command or property access. Carries mpv's own message.
    #[error("{0}")]
    Rejected(String),

    /// A property held a value of a different type than requested
    #[error("property '{property}' is {actual}, expected {expected}")]
    UnexpectedFormat {
        /// Property that was read
        property: String,
        /// Expected node kind
        expected: &'static str,
        /// Actual node kind
        actual: &'static str,
    },

    /// The IPC connection is gone, the player has shut down
    #[error("player connection closed")]
    Closed,

    /// Malformed message on the IPC socket
    #[error("protocol error: {0}")]
    Protocol(String),

    /// Socket I/O failure
    #[error("IPC I/O error: {0}")]
    Io(#[from] std::io::Error),
}
