use thiserror::Error;

/// Errors that can occur during `groovectl` command execution.
#[derive(Error, Debug)]
pub enum CliError {
    /// An argument could not be used as given.
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// Argument name
        arg: String,
        /// Why it was rejected
        reason: String,
    },

    /// The daemon could not be reached on the session bus.
    #[error("Could not connect to grooved: {0}")]
    Connection(zbus::Error),

    /// The daemon rejected a call. Carries the daemon's message.
    #[error("{0}")]
    Call(String),

    /// An I/O operation failed.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<zbus::Error> for CliError {
    fn from(error: zbus::Error) -> Self {
        match error {
            zbus::Error::MethodError(_, Some(description), _) => Self::Call(description),
            zbus::Error::FDO(fdo)
                if matches!(
                    *fdo,
                    zbus::fdo::Error::ServiceUnknown(_) | zbus::fdo::Error::NameHasNoOwner(_)
                ) =>
            {
                Self::Connection(zbus::Error::FDO(fdo))
            }
            other => Self::Call(other.to_string()),
        }
    }
}

/// Type alias for command execution results.
///
/// All commands return either the text to print on success or a
/// `CliError` describing what went wrong.
pub type CommandResult = Result<String, CliError>;
